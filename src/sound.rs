//! Best-effort alert tones through the Web Audio API.
//!
//! Playback never fails loudly: a missing `AudioContext` or any node error is
//! logged at debug level and dropped.

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{AudioContext, OscillatorType};

use crate::config::{ALERT_GAIN, FINISH_TONE_HZ, FINISH_TONE_MS, LAP_TONE_HZ, LAP_TONE_MS};
use crate::error::ClockError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
}

impl Tone {
    /// Short high beep when a lap is recorded.
    pub const LAP: Tone = Tone {
        frequency_hz: LAP_TONE_HZ,
        duration_ms: LAP_TONE_MS,
    };

    /// Longer, lower beep when the countdown reaches zero.
    pub const FINISH: Tone = Tone {
        frequency_hz: FINISH_TONE_HZ,
        duration_ms: FINISH_TONE_MS,
    };
}

/// Play `tone`, swallowing any audio failure.
pub fn play(tone: Tone) {
    if let Err(err) = try_play(tone) {
        debug!("Alert tone skipped: {}", err);
    }
}

fn try_play(tone: Tone) -> Result<(), ClockError> {
    let ctx = AudioContext::new().map_err(ClockError::audio)?;
    let oscillator = ctx.create_oscillator().map_err(ClockError::audio)?;
    let gain = ctx.create_gain().map_err(ClockError::audio)?;

    oscillator.set_type(OscillatorType::Sine);
    oscillator.frequency().set_value(tone.frequency_hz);
    gain.gain().set_value(ALERT_GAIN);

    oscillator
        .connect_with_audio_node(&gain)
        .map_err(ClockError::audio)?;
    gain.connect_with_audio_node(&ctx.destination())
        .map_err(ClockError::audio)?;
    oscillator.start().map_err(ClockError::audio)?;

    Timeout::new(tone.duration_ms, move || {
        let _ = oscillator.stop();
        let _ = ctx.close();
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_tone_is_lower_and_longer_than_lap_tone() {
        assert!(Tone::FINISH.frequency_hz < Tone::LAP.frequency_hz);
        assert!(Tone::FINISH.duration_ms > Tone::LAP.duration_ms);
    }
}
