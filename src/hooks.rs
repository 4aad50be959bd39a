//! Hooks binding the engines to their schedulers and alert tones.
//!
//! Each engine lives in a `use_reducer` slot. An effect keyed on the engine's
//! `running` flag owns the repeating task: it installs the task when the
//! engine starts and its destructor cancels it on pause, reset, completion or
//! unmount.

use clockwatch::config::TICK_INTERVAL_MS;
use clockwatch::scheduler::{FrameLoop, TaskSlot, Ticker};
use clockwatch::sound::{self, Tone};
use clockwatch::utils::now_ms;
use clockwatch::{Countdown, CountdownAction, Stopwatch, StopwatchAction};
use log::{info, warn};
use yew::prelude::*;

/// Stopwatch state plus the callbacks the panel needs.
#[derive(Clone)]
pub struct StopwatchControls {
    pub state: UseReducerHandle<Stopwatch>,
    pub on_toggle: Callback<()>,
    pub on_lap: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_clear_laps: Callback<()>,
}

#[hook]
pub fn use_stopwatch() -> StopwatchControls {
    let state = use_reducer(Stopwatch::new);
    let frame_loop = use_mut_ref(TaskSlot::<FrameLoop>::default);

    // Frame loop runs exactly while the stopwatch does.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.is_running(), move |&running| {
            if running {
                let on_frame = move |_: f64| dispatcher.dispatch(StopwatchAction::Frame(now_ms()));
                match FrameLoop::start(on_frame) {
                    Ok(task) => frame_loop.borrow_mut().replace(task),
                    Err(err) => warn!("Stopwatch frame loop unavailable: {}", err),
                }
            }
            move || frame_loop.borrow_mut().cancel()
        });
    }

    // The recorded count only moves when a lap is accepted.
    use_effect_with(state.laps_recorded(), |&recorded| {
        if recorded > 0 {
            sound::play(Tone::LAP);
        }
        || ()
    });

    let dispatch = |action_for: fn() -> StopwatchAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(action_for()))
    };

    StopwatchControls {
        on_toggle: dispatch(|| StopwatchAction::Toggle(now_ms())),
        on_lap: dispatch(|| StopwatchAction::Lap),
        on_reset: dispatch(|| StopwatchAction::Reset),
        on_clear_laps: dispatch(|| StopwatchAction::ClearLaps),
        state,
    }
}

/// Countdown state plus the callbacks the panel needs.
#[derive(Clone)]
pub struct CountdownControls {
    pub state: UseReducerHandle<Countdown>,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_minutes: Callback<u32>,
    pub on_seconds: Callback<u32>,
}

#[hook]
pub fn use_countdown() -> CountdownControls {
    let state = use_reducer(Countdown::default);
    let ticker = use_mut_ref(TaskSlot::<Ticker>::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.is_running(), move |&running| {
            if running {
                let task = Ticker::start(TICK_INTERVAL_MS, move || {
                    dispatcher.dispatch(CountdownAction::Tick)
                });
                ticker.borrow_mut().replace(task);
            }
            move || ticker.borrow_mut().cancel()
        });
    }

    // Completions only ever go up, one per finished run.
    use_effect_with(state.completions(), |&completions| {
        if completions > 0 {
            info!("Countdown complete ({} so far)", completions);
            sound::play(Tone::FINISH);
        }
        || ()
    });

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(CountdownAction::Toggle))
    };
    let on_reset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(CountdownAction::Reset))
    };
    let on_minutes = {
        let dispatcher = state.dispatcher();
        Callback::from(move |minutes| dispatcher.dispatch(CountdownAction::SetMinutes(minutes)))
    };
    let on_seconds = {
        let dispatcher = state.dispatcher();
        Callback::from(move |seconds| dispatcher.dispatch(CountdownAction::SetSeconds(seconds)))
    };

    CountdownControls {
        state,
        on_toggle,
        on_reset,
        on_minutes,
        on_seconds,
    }
}
