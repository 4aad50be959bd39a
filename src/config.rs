//! Application-level configuration constants.

// Countdown
pub const DEFAULT_COUNTDOWN_SECS: u32 = 60;
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Setup input limits
pub const MAX_SECONDS_INPUT: u32 = 59;
pub const MAX_MINUTES_INPUT: u32 = (u32::MAX - MAX_SECONDS_INPUT) / 60;

// Alert tones
pub const LAP_TONE_HZ: f32 = 880.0;
pub const LAP_TONE_MS: u32 = 80;
pub const FINISH_TONE_HZ: f32 = 520.0;
pub const FINISH_TONE_MS: u32 = 420;
pub const ALERT_GAIN: f32 = 0.05;
