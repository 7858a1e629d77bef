//! Wall-clock time of day with `HH:MM` modular arithmetic.

use crate::model::defaults::DEFAULT_START_TIME;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

const MINUTES_PER_DAY: u64 = 24 * 60;

static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*$").expect("valid clock regex"));

/// Time of day in whole minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minute_of_day: u16,
}

impl ClockTime {
    /// Creates a clock time from hour and minute components.
    ///
    /// Returns `None` when `hour > 23` or `minute > 59`.
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minute_of_day: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    /// Parses `HH:MM` (1-2 digit hour, 2 digit minute, surrounding
    /// whitespace allowed).
    pub fn parse(value: &str) -> Option<Self> {
        let captures = CLOCK_RE.captures(value)?;
        let hour = captures.get(1)?.as_str().parse::<u8>().ok()?;
        let minute = captures.get(2)?.as_str().parse::<u8>().ok()?;
        Self::from_hm(hour, minute)
    }

    /// Parses `value`, falling back to the default meeting start time.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(Self::default_start)
    }

    /// Default meeting start time (`02:30`).
    pub fn default_start() -> Self {
        Self::parse(DEFAULT_START_TIME).unwrap_or(Self { minute_of_day: 150 })
    }

    pub fn hour(self) -> u8 {
        (self.minute_of_day / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.minute_of_day % 60) as u8
    }

    /// Adds minutes, wrapping across midnight.
    pub fn add_minutes(self, minutes: u64) -> Self {
        let total = (u64::from(self.minute_of_day) + minutes % MINUTES_PER_DAY) % MINUTES_PER_DAY;
        Self {
            minute_of_day: total as u16,
        }
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::ClockTime;

    #[test]
    fn parse_accepts_padded_and_short_hours() {
        assert_eq!(ClockTime::parse("14:30"), ClockTime::from_hm(14, 30));
        assert_eq!(ClockTime::parse(" 9:05 "), ClockTime::from_hm(9, 5));
        assert_eq!(ClockTime::parse("00:00"), ClockTime::from_hm(0, 0));
    }

    #[test]
    fn parse_rejects_malformed_values() {
        for value in ["", "14", "14:3", "24:00", "12:60", "ab:cd", "14:30pm", "-1:00"] {
            assert_eq!(ClockTime::parse(value), None, "{value} should not parse");
        }
    }

    #[test]
    fn parse_or_default_falls_back_to_0230() {
        assert_eq!(ClockTime::parse_or_default("noon").to_string(), "02:30");
        assert_eq!(ClockTime::parse_or_default("19:15").to_string(), "19:15");
    }

    #[test]
    fn add_minutes_carries_into_hours_and_wraps_midnight() {
        let start = ClockTime::from_hm(14, 50).unwrap();
        assert_eq!(start.add_minutes(15).to_string(), "15:05");

        let late = ClockTime::from_hm(23, 50).unwrap();
        assert_eq!(late.add_minutes(20).to_string(), "00:10");
        assert_eq!(late.add_minutes(24 * 60).to_string(), "23:50");
        assert!(late.add_minutes(u64::MAX).hour() < 24);
    }
}
