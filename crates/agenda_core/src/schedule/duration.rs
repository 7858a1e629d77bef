//! Best-effort duration parsing.
//!
//! Policy: every character other than an ASCII digit or `.` is discarded,
//! the longest leading decimal number of the remainder is taken, and the
//! value is rounded half-up to whole minutes. A `-` before the first digit
//! marks a negative duration, which counts as zero.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d*)?|\.\d+)").expect("valid duration regex"));

/// Parses a duration expression such as `7m` or `1.5m` into whole minutes.
///
/// Empty, non-numeric and negative input yields `0`.
pub fn parse_duration_minutes(value: &str) -> u64 {
    if is_negative(value) {
        return 0;
    }

    let digits = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect::<String>();
    let Some(number) = LEADING_NUMBER_RE.find(digits.as_str()) else {
        return 0;
    };

    match number.as_str().parse::<f64>() {
        Ok(minutes) if minutes.is_finite() && minutes > 0.0 => round_half_up(minutes),
        _ => 0,
    }
}

fn is_negative(value: &str) -> bool {
    value
        .chars()
        .take_while(|ch| !ch.is_ascii_digit())
        .any(|ch| ch == '-')
}

fn round_half_up(minutes: f64) -> u64 {
    // `as` saturates for values beyond u64::MAX.
    (minutes + 0.5).floor() as u64
}
