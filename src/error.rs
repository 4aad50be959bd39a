//! Error type shared by the engines and the browser-facing helpers.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// A lap was requested while the stopwatch was paused.
    #[error("laps can only be recorded while the stopwatch is running")]
    LapWhilePaused,

    #[error("audio playback unavailable: {0}")]
    Audio(String),

    #[error("scheduler unavailable: {0}")]
    Scheduler(String),
}

impl ClockError {
    pub(crate) fn audio(value: JsValue) -> Self {
        Self::Audio(describe(&value))
    }

    pub(crate) fn scheduler(value: JsValue) -> Self {
        Self::Scheduler(describe(&value))
    }
}

/// Best-effort text for a thrown JS value.
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lap_rejection_message_is_user_readable() {
        assert_eq!(
            ClockError::LapWhilePaused.to_string(),
            "laps can only be recorded while the stopwatch is running"
        );
    }

    #[test]
    fn wrapped_messages_keep_their_cause() {
        let err = ClockError::Audio("AudioContext is not defined".to_string());
        assert_eq!(
            err.to_string(),
            "audio playback unavailable: AudioContext is not defined"
        );
    }
}
