use crate::config::{MAX_MINUTES_INPUT, MAX_SECONDS_INPUT};

/// Current time in milliseconds from the page's monotonic clock.
///
/// Falls back to wall-clock time when `performance` is unavailable.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Parse a numeric input field, clamping instead of rejecting.
///
/// - Empty or non-numeric text: `0`
/// - Negative values: `0`
/// - Fractions are floored
/// - Values above `max` saturate at `max`
///
/// # Examples
/// ```
/// use clockwatch::utils::clamp_numeric_input;
/// assert_eq!(clamp_numeric_input("12", 59), 12);
/// assert_eq!(clamp_numeric_input("abc", 59), 0);
/// assert_eq!(clamp_numeric_input("-4", 59), 0);
/// assert_eq!(clamp_numeric_input("75", 59), 59);
/// ```
pub fn clamp_numeric_input(input: &str, max: u32) -> u32 {
    let value = match input.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => return 0,
    };

    if value <= 0.0 {
        0
    } else if value >= max as f64 {
        max
    } else {
        value.floor() as u32
    }
}

/// Minutes field of the countdown setup: any value `>= 0`.
pub fn parse_minutes(input: &str) -> u32 {
    clamp_numeric_input(input, MAX_MINUTES_INPUT)
}

/// Seconds field of the countdown setup: `0..=59`.
pub fn parse_seconds(input: &str) -> u32 {
    clamp_numeric_input(input, MAX_SECONDS_INPUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numbers_pass_through() {
        assert_eq!(parse_minutes("5"), 5);
        assert_eq!(parse_seconds(" 30 "), 30);
        assert_eq!(parse_seconds("0"), 0);
    }

    #[test]
    fn non_numeric_input_is_zero() {
        assert_eq!(parse_minutes(""), 0);
        assert_eq!(parse_minutes("ten"), 0);
        assert_eq!(parse_seconds("NaN"), 0);
    }

    #[test]
    fn negatives_clamp_to_zero() {
        assert_eq!(parse_minutes("-1"), 0);
        assert_eq!(parse_seconds("-0.5"), 0);
        assert_eq!(parse_seconds("-inf"), 0);
    }

    #[test]
    fn seconds_saturate_at_59() {
        assert_eq!(parse_seconds("60"), 59);
        assert_eq!(parse_seconds("1000"), 59);
        assert_eq!(parse_seconds("inf"), 59);
    }

    #[test]
    fn fractions_are_floored() {
        assert_eq!(parse_minutes("2.9"), 2);
        assert_eq!(parse_seconds("58.99"), 58);
    }

    #[test]
    fn huge_minutes_do_not_overflow_seconds() {
        let minutes = parse_minutes("1e12");
        assert_eq!(minutes, MAX_MINUTES_INPUT);
        assert!(minutes
            .checked_mul(60)
            .and_then(|secs| secs.checked_add(MAX_SECONDS_INPUT))
            .is_some());
    }
}
