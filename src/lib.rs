//! Stopwatch and countdown engines for the ClockWatch widget.
//!
//! The engines are plain state machines; the browser side (frame loop,
//! interval ticker, alert tones) lives in [`scheduler`] and [`sound`].

pub mod config;
pub mod countdown;
pub mod error;
pub mod scheduler;
pub mod sound;
pub mod stopwatch;
pub mod utils;

pub use countdown::{Countdown, CountdownAction, TickOutcome};
pub use error::ClockError;
pub use stopwatch::{LapEntry, LapSplit, Stopwatch, StopwatchAction};

/// Render elapsed milliseconds as `MM:SS.CC`.
///
/// Minutes are not capped, so an hour reads `60:00.00`.
///
/// # Examples
/// ```
/// assert_eq!(clockwatch::format_time(1_500), "00:01.50");
/// assert_eq!(clockwatch::format_time(3_725_019), "62:05.01");
/// ```
pub fn format_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let centiseconds = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centiseconds)
}

/// Render whole seconds as `MM:SS`, minutes uncapped.
pub fn format_countdown(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Share of `total` still `remaining`, clamped to `[0, 1]`.
///
/// A zero total is treated as one second so the gauge never divides by zero.
pub fn progress_fraction(remaining: u32, total: u32) -> f64 {
    (remaining as f64 / total.max(1) as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_every_field() {
        assert_eq!(format_time(0), "00:00.00");
        assert_eq!(format_time(9), "00:00.00");
        assert_eq!(format_time(10), "00:00.01");
        assert_eq!(format_time(59_999), "00:59.99");
        assert_eq!(format_time(60_000), "01:00.00");
    }

    #[test]
    fn format_time_does_not_wrap_minutes() {
        assert_eq!(format_time(100 * 60_000 + 7_250), "100:07.25");
    }

    #[test]
    fn format_time_matches_component_definition() {
        for ms in (0..400_000u64).step_by(7_919) {
            let expected = format!(
                "{:02}:{:02}.{:02}",
                ms / 60_000,
                (ms / 1000) % 60,
                (ms % 1000) / 10
            );
            assert_eq!(format_time(ms), expected, "ms = {}", ms);
        }
    }

    #[test]
    fn format_countdown_renders_minutes_and_seconds() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(89), "01:29");
        assert_eq!(format_countdown(6_000), "100:00");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_fraction(30, 60), 0.5);
        assert_eq!(progress_fraction(0, 0), 0.0);
        assert_eq!(progress_fraction(5, 0), 1.0);
        assert_eq!(progress_fraction(90, 60), 1.0);
    }
}
