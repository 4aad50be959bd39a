//! Pure Yew view components for the ClockWatch UI.
//!
//! Components only render props and forward button presses; all state lives
//! in the hooks.

use std::rc::Rc;

use clockwatch::utils::{parse_minutes, parse_seconds};
use clockwatch::{format_countdown, format_time, LapSplit};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Which engine's panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stopwatch,
    Timer,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Stopwatch => "Stopwatch",
            Mode::Timer => "Timer",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ModeSwitchProps {
    pub mode: Mode,
    pub on_select: Callback<Mode>,
}

#[function_component(ModeSwitch)]
pub fn mode_switch(props: &ModeSwitchProps) -> Html {
    html! {
        <div class="controls">
            { [Mode::Stopwatch, Mode::Timer].into_iter().map(|mode| {
                let class = classes!("mode-btn", (props.mode == mode).then_some("active"));
                html! {
                    <button {class} onclick={props.on_select.reform(move |_: MouseEvent| mode)}>
                        { mode.label() }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StopwatchPanelProps {
    pub elapsed_ms: u64,
    pub running: bool,
    pub laps: Rc<Vec<LapSplit>>,
    pub on_toggle: Callback<()>,
    pub on_lap: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_clear_laps: Callback<()>,
}

#[function_component(StopwatchPanel)]
pub fn stopwatch_panel(props: &StopwatchPanelProps) -> Html {
    html! {
        <div class="panel stopwatch">
            <div class="dial">
                <div class="time-display">{ format_time(props.elapsed_ms) }</div>
            </div>
            <div class="actions">
                <button class="big" onclick={props.on_toggle.reform(|_: MouseEvent| ())}>
                    { if props.running { "Pause" } else { "Start" } }
                </button>
                <button class="ghost" disabled={!props.running} onclick={props.on_lap.reform(|_: MouseEvent| ())}>
                    { "Lap" }
                </button>
                <button class="ghost" onclick={props.on_reset.reform(|_: MouseEvent| ())}>{ "Reset" }</button>
            </div>
            <LapList laps={props.laps.clone()} on_clear={props.on_clear_laps.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LapListProps {
    pub laps: Rc<Vec<LapSplit>>,
    pub on_clear: Callback<()>,
}

/// Lap table, most recent first. Renders nothing until the first lap.
#[function_component(LapList)]
pub fn lap_list(props: &LapListProps) -> Html {
    if props.laps.is_empty() {
        return html! {};
    }

    html! {
        <div class="laps">
            <div class="laps-head">
                <strong>{ "Laps" }</strong>
                <button class="ghost" onclick={props.on_clear.reform(|_: MouseEvent| ())}>{ "Clear" }</button>
            </div>
            <ol>
                { props.laps.iter().map(|split| html! {
                    <li key={split.lap.id}>
                        <span class="lap-number">{ format!("#{}", split.number) }</span>
                        <span class="lap-time">{ format_time(split.lap.time_ms) }</span>
                        <span class="lap-split">{ format!("+{}", format_time(split.split_ms)) }</span>
                    </li>
                }).collect::<Html>() }
            </ol>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerPanelProps {
    pub remaining_secs: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub progress: f64,
    pub running: bool,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_minutes: Callback<u32>,
    pub on_seconds: Callback<u32>,
}

#[function_component(TimerPanel)]
pub fn timer_panel(props: &TimerPanelProps) -> Html {
    let on_minutes = props.on_minutes.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        parse_minutes(&input.value())
    });
    let on_seconds = props.on_seconds.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        parse_seconds(&input.value())
    });

    html! {
        <div class="panel timer">
            <div class="timer-top">
                <div class="timer-display">{ format_countdown(props.remaining_secs) }</div>
                <div class="ring" style={format!("--pct: {}", 1.0 - props.progress)} />
            </div>

            <div class="timer-setup">
                <label for="timer-minutes">{ "Minutes:" }</label>
                <input id="timer-minutes"
                    type="number"
                    min="0"
                    value={props.minutes.to_string()}
                    oninput={on_minutes}
                />
                <label for="timer-seconds">{ "Seconds:" }</label>
                <input id="timer-seconds"
                    type="number"
                    min="0"
                    max="59"
                    value={props.seconds.to_string()}
                    oninput={on_seconds}
                />
            </div>

            <div class="actions">
                <button class="big" onclick={props.on_toggle.reform(|_: MouseEvent| ())}>
                    { if props.running { "Pause" } else { "Start" } }
                </button>
                <button class="ghost" onclick={props.on_reset.reform(|_: MouseEvent| ())}>{ "Reset" }</button>
            </div>
        </div>
    }
}
