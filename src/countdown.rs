//! Countdown engine.
//!
//! Counts whole seconds down from a configured duration. A fixed-period
//! ticker calls [`Countdown::tick`] once per second while it runs; the engine
//! stops itself when it reaches zero and records the completion so the caller
//! can fire the alert exactly once per run.

use std::rc::Rc;

use log::{debug, info};
use yew::Reducible;

use crate::config::{DEFAULT_COUNTDOWN_SECS, MAX_MINUTES_INPUT, MAX_SECONDS_INPUT};
use crate::progress_fraction;

/// What a single tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, nothing changed.
    Idle,
    /// One second was taken off the remaining time.
    Counting,
    /// The countdown reached zero and stopped.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    configured_secs: u32,
    remaining_secs: u32,
    running: bool,
    completions: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_SECS)
    }
}

impl Countdown {
    pub fn new(configured_secs: u32) -> Self {
        Self {
            configured_secs,
            remaining_secs: configured_secs,
            running: false,
            completions: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn configured_secs(&self) -> u32 {
        self.configured_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of runs that have counted all the way down to zero.
    pub fn completions(&self) -> u32 {
        self.completions
    }

    /// Minutes part of the configured duration, as shown in the setup form.
    pub fn configured_minutes(&self) -> u32 {
        self.configured_secs / 60
    }

    /// Seconds part of the configured duration, as shown in the setup form.
    pub fn configured_seconds(&self) -> u32 {
        self.configured_secs % 60
    }

    /// Remaining share of the configured duration in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        progress_fraction(self.remaining_secs, self.configured_secs)
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Change the configured duration. An idle countdown reloads immediately;
    /// a running one keeps counting, capped at the new duration.
    pub fn set_duration(&mut self, total_secs: u32) {
        self.configured_secs = total_secs;
        if self.running {
            self.remaining_secs = self.remaining_secs.min(total_secs);
        } else {
            self.remaining_secs = total_secs;
        }
    }

    /// Replace the minutes part of the duration, keeping the seconds part.
    pub fn set_minutes(&mut self, minutes: u32) {
        let total = minutes.min(MAX_MINUTES_INPUT) * 60 + self.configured_seconds();
        self.set_duration(total);
    }

    /// Replace the seconds part of the duration, keeping the minutes part.
    pub fn set_seconds(&mut self, seconds: u32) {
        let minutes = self.configured_minutes().min(MAX_MINUTES_INPUT);
        let total = minutes * 60 + seconds.min(MAX_SECONDS_INPUT);
        self.set_duration(total);
    }

    /// Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        if self.remaining_secs == 0 {
            self.remaining_secs = self.configured_secs;
        }
        self.running = true;
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.configured_secs;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        if self.remaining_secs <= 1 {
            self.remaining_secs = 0;
            self.running = false;
            self.completions += 1;
            TickOutcome::Finished
        } else {
            self.remaining_secs -= 1;
            TickOutcome::Counting
        }
    }
}

/// Actions dispatched to a countdown held in a `use_reducer` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownAction {
    SetDuration(u32),
    SetMinutes(u32),
    SetSeconds(u32),
    Start,
    Pause,
    Toggle,
    Reset,
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CountdownAction::SetDuration(secs) => next.set_duration(secs),
            CountdownAction::SetMinutes(minutes) => next.set_minutes(minutes),
            CountdownAction::SetSeconds(seconds) => next.set_seconds(seconds),
            CountdownAction::Start => {
                next.start();
            }
            CountdownAction::Pause => {
                next.pause();
            }
            CountdownAction::Toggle => {
                next.toggle();
            }
            CountdownAction::Reset => next.reset(),
            CountdownAction::Tick => match next.tick() {
                TickOutcome::Finished => info!("Countdown of {} s finished", next.configured_secs),
                TickOutcome::Counting => {}
                TickOutcome::Idle => debug!("Tick ignored, countdown not running"),
            },
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_countdown;

    fn run_ticks(countdown: &mut Countdown, ticks: usize) -> Vec<TickOutcome> {
        (0..ticks).map(|_| countdown.tick()).collect()
    }

    #[test]
    fn defaults_to_one_minute() {
        let cd = Countdown::default();
        assert_eq!(cd.configured_secs(), 60);
        assert_eq!(cd.remaining_secs(), 60);
        assert!(!cd.is_running());
        assert_eq!(format_countdown(cd.remaining_secs()), "01:00");
    }

    #[test]
    fn set_duration_when_idle_reloads_remaining() {
        let mut cd = Countdown::default();
        cd.set_duration(90);
        assert_eq!(cd.remaining_secs(), 90);
    }

    #[test]
    fn one_tick_then_pause_leaves_89() {
        let mut cd = Countdown::default();
        cd.set_duration(90);
        cd.start();
        assert_eq!(cd.tick(), TickOutcome::Counting);
        cd.pause();

        assert_eq!(cd.remaining_secs(), 89);
        assert!(!cd.is_running());
    }

    #[test]
    fn set_duration_while_running_keeps_remaining() {
        let mut cd = Countdown::new(30);
        cd.start();
        cd.tick();
        cd.set_duration(120);

        assert_eq!(cd.configured_secs(), 120);
        assert_eq!(cd.remaining_secs(), 29);
        cd.reset();
        assert_eq!(cd.remaining_secs(), 120);
    }

    #[test]
    fn shrinking_duration_while_running_caps_remaining() {
        let mut cd = Countdown::new(120);
        cd.start();
        cd.tick();
        cd.set_duration(30);
        assert_eq!(cd.remaining_secs(), 30);

        cd.pause();
        assert!(cd.remaining_secs() <= cd.configured_secs());

        cd.start();
        cd.tick();
        cd.set_duration(45);
        assert_eq!(cd.remaining_secs(), 29);
    }

    #[test]
    fn largest_minutes_keep_seconds_exact() {
        let mut cd = Countdown::new(59);
        cd.set_minutes(u32::MAX);

        assert_eq!(cd.configured_minutes(), MAX_MINUTES_INPUT);
        assert_eq!(cd.configured_seconds(), 59);

        cd.set_seconds(59);
        assert_eq!(cd.configured_secs(), MAX_MINUTES_INPUT * 60 + 59);

        cd.set_duration(u32::MAX);
        cd.set_seconds(30);
        assert_eq!(cd.configured_secs(), MAX_MINUTES_INPUT * 60 + 30);
    }

    #[test]
    fn five_second_run_finishes_once() {
        let mut cd = Countdown::default();
        cd.set_duration(5);
        cd.start();

        let outcomes = run_ticks(&mut cd, 5);
        assert_eq!(
            outcomes,
            vec![
                TickOutcome::Counting,
                TickOutcome::Counting,
                TickOutcome::Counting,
                TickOutcome::Counting,
                TickOutcome::Finished,
            ]
        );
        assert_eq!(cd.remaining_secs(), 0);
        assert!(!cd.is_running());
        assert_eq!(cd.completions(), 1);
    }

    #[test]
    fn ticks_after_zero_do_not_go_negative() {
        let mut cd = Countdown::new(2);
        cd.start();
        run_ticks(&mut cd, 2);

        assert_eq!(run_ticks(&mut cd, 3), vec![TickOutcome::Idle; 3]);
        assert_eq!(cd.remaining_secs(), 0);
        assert_eq!(cd.completions(), 1);
    }

    #[test]
    fn start_at_zero_reloads_configured() {
        let mut cd = Countdown::new(3);
        cd.start();
        run_ticks(&mut cd, 3);
        assert_eq!(cd.remaining_secs(), 0);

        assert!(cd.start());
        assert_eq!(cd.remaining_secs(), 3);
        run_ticks(&mut cd, 3);
        assert_eq!(cd.completions(), 2);
    }

    #[test]
    fn pause_keeps_remaining_and_reset_restores() {
        let mut cd = Countdown::new(10);
        cd.start();
        run_ticks(&mut cd, 4);
        cd.pause();
        assert_eq!(cd.remaining_secs(), 6);
        assert_eq!(cd.tick(), TickOutcome::Idle);

        cd.start();
        assert_eq!(cd.remaining_secs(), 6);

        cd.reset();
        assert!(!cd.is_running());
        assert_eq!(cd.remaining_secs(), 10);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut cd = Countdown::new(0);
        cd.start();
        assert_eq!(cd.tick(), TickOutcome::Finished);
        assert_eq!(cd.remaining_secs(), 0);
    }

    #[test]
    fn minutes_and_seconds_compose_duration() {
        let mut cd = Countdown::new(75);
        cd.set_minutes(3);
        assert_eq!(cd.configured_secs(), 195);

        cd.set_seconds(5);
        assert_eq!(cd.configured_secs(), 185);
        assert_eq!(cd.remaining_secs(), 185);

        cd.set_seconds(99);
        assert_eq!(cd.configured_seconds(), 59);
        assert_eq!(cd.configured_minutes(), 3);
    }

    #[test]
    fn progress_tracks_remaining_share() {
        let mut cd = Countdown::new(4);
        assert_eq!(cd.progress(), 1.0);
        cd.start();
        cd.tick();
        assert_eq!(cd.progress(), 0.75);
        run_ticks(&mut cd, 3);
        assert_eq!(cd.progress(), 0.0);
    }

    #[test]
    fn reducer_skips_rerender_for_idle_ticks() {
        let state = Rc::new(Countdown::default());
        let next = state.clone().reduce(CountdownAction::Tick);
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(CountdownAction::Pause);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_runs_to_completion() {
        let mut state = Rc::new(Countdown::new(2)).reduce(CountdownAction::Toggle);
        for _ in 0..4 {
            state = state.reduce(CountdownAction::Tick);
        }
        assert_eq!(state.remaining_secs(), 0);
        assert!(!state.is_running());
        assert_eq!(state.completions(), 1);
    }
}
