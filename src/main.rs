//! ClockWatch: stopwatch and countdown timer rendered with Yew.
//! Wires the engine hooks into the two panels and the mode switch.

use std::rc::Rc;

use yew::prelude::*;

mod components;
mod hooks;

use components::{Mode, ModeSwitch, StopwatchPanel, TimerPanel};
use hooks::{use_countdown, use_stopwatch};

/// The widget. Both engines live here so switching modes only changes which
/// panel is drawn; the hidden engine keeps its state and keeps running.
#[function_component(ClockWatch)]
fn clock_watch() -> Html {
    let mode = use_state(|| Mode::Stopwatch);
    let stopwatch = use_stopwatch();
    let countdown = use_countdown();

    let on_select = {
        let mode = mode.clone();
        Callback::from(move |next: Mode| mode.set(next))
    };

    let panel = match *mode {
        Mode::Stopwatch => html! {
            <StopwatchPanel
                elapsed_ms={stopwatch.state.elapsed_ms()}
                running={stopwatch.state.is_running()}
                laps={Rc::new(stopwatch.state.lap_splits())}
                on_toggle={stopwatch.on_toggle.clone()}
                on_lap={stopwatch.on_lap.clone()}
                on_reset={stopwatch.on_reset.clone()}
                on_clear_laps={stopwatch.on_clear_laps.clone()}
            />
        },
        Mode::Timer => html! {
            <TimerPanel
                remaining_secs={countdown.state.remaining_secs()}
                minutes={countdown.state.configured_minutes()}
                seconds={countdown.state.configured_seconds()}
                progress={countdown.state.progress()}
                running={countdown.state.is_running()}
                on_toggle={countdown.on_toggle.clone()}
                on_reset={countdown.on_reset.clone()}
                on_minutes={countdown.on_minutes.clone()}
                on_seconds={countdown.on_seconds.clone()}
            />
        },
    };

    html! {
        <div class="clockwatch">
            <ModeSwitch mode={*mode} {on_select} />
            { panel }
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <div class="app-root">
            <header class="app-header">{ "ClockWatch" }</header>
            <main>
                <ClockWatch />
            </main>
            <footer class="app-footer">{ "A simple stopwatch & timer" }</footer>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
