//! Stopwatch engine.
//!
//! The engine is a plain state machine fed with timestamps from the caller.
//! It owns no timers: a frame loop calls [`Stopwatch::frame`] while the
//! stopwatch runs, which keeps every transition testable without a browser.
//!
//! ```text
//! Paused --start--> Running --pause--> Paused
//!   ^                  |
//!   +------reset-------+
//! ```

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::error::ClockError;

/// Immutable snapshot of the elapsed time at the moment a lap was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapEntry {
    /// Unique and increasing for the lifetime of one stopwatch.
    pub id: u64,
    pub time_ms: u64,
}

/// A lap paired with its display number and the time since the previous lap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapSplit {
    pub number: usize,
    pub lap: LapEntry,
    pub split_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stopwatch {
    running: bool,
    elapsed_ms: f64,
    /// Timestamp of the last accumulation, `None` while paused.
    last_timestamp: Option<f64>,
    /// Most recent first.
    laps: Vec<LapEntry>,
    next_lap_id: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms as u64
    }

    pub fn laps(&self) -> &[LapEntry] {
        &self.laps
    }

    pub fn latest_lap_id(&self) -> Option<u64> {
        self.laps.first().map(|lap| lap.id)
    }

    /// Laps accepted over the stopwatch's lifetime, including cleared ones.
    pub fn laps_recorded(&self) -> u64 {
        self.next_lap_id
    }

    /// Laps (most recent first) with their split against the lap before.
    pub fn lap_splits(&self) -> Vec<LapSplit> {
        let count = self.laps.len();
        self.laps
            .iter()
            .enumerate()
            .map(|(idx, lap)| {
                let previous = self.laps.get(idx + 1).map_or(0, |p| p.time_ms);
                LapSplit {
                    number: count - idx,
                    lap: *lap,
                    split_ms: lap.time_ms.saturating_sub(previous),
                }
            })
            .collect()
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Begin accumulating from `now`. Returns `false` if already running.
    pub fn start(&mut self, now: f64) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_timestamp = Some(now);
        true
    }

    /// Fold the time since the previous frame into the elapsed total.
    ///
    /// Deltas are clamped at zero so elapsed time never goes backwards.
    pub fn frame(&mut self, now: f64) -> bool {
        if !self.running {
            return false;
        }
        if let Some(last) = self.last_timestamp {
            self.elapsed_ms += (now - last).max(0.0);
        }
        self.last_timestamp = Some(now);
        true
    }

    /// Stop accumulating, keeping the time up to `now`.
    pub fn pause(&mut self, now: f64) -> bool {
        if !self.running {
            return false;
        }
        self.frame(now);
        self.running = false;
        self.last_timestamp = None;
        true
    }

    pub fn toggle(&mut self, now: f64) -> bool {
        if self.running {
            self.pause(now)
        } else {
            self.start(now)
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_ms = 0.0;
        self.last_timestamp = None;
        self.laps.clear();
    }

    /// Record a lap at the current elapsed time.
    ///
    /// Rejected with [`ClockError::LapWhilePaused`] unless running.
    pub fn add_lap(&mut self) -> Result<LapEntry, ClockError> {
        if !self.running {
            return Err(ClockError::LapWhilePaused);
        }
        let lap = LapEntry {
            id: self.next_lap_id,
            time_ms: self.elapsed_ms(),
        };
        self.next_lap_id += 1;
        self.laps.insert(0, lap);
        Ok(lap)
    }

    pub fn clear_laps(&mut self) {
        self.laps.clear();
    }
}

/// Actions dispatched to a stopwatch held in a `use_reducer` hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopwatchAction {
    Start(f64),
    Frame(f64),
    Pause(f64),
    Toggle(f64),
    Reset,
    Lap,
    ClearLaps,
}

impl Reducible for Stopwatch {
    type Action = StopwatchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            StopwatchAction::Start(now) => next.start(now),
            StopwatchAction::Frame(now) => next.frame(now),
            StopwatchAction::Pause(now) => next.pause(now),
            StopwatchAction::Toggle(now) => next.toggle(now),
            StopwatchAction::Reset => {
                next.reset();
                true
            }
            StopwatchAction::Lap => match next.add_lap() {
                Ok(lap) => {
                    debug!("Lap {} recorded at {} ms", lap.id, lap.time_ms);
                    true
                }
                Err(err) => {
                    debug!("Lap ignored: {}", err);
                    false
                }
            },
            StopwatchAction::ClearLaps => {
                next.clear_laps();
                true
            }
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}
