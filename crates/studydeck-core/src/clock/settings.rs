use serde::{Deserialize, Serialize};

use crate::input::parse_int_prefix;

const DEFAULT_SESSION_MIN: u64 = 25;
const DEFAULT_SHORT_BREAK_MIN: u64 = 5;
const DEFAULT_LONG_BREAK_MIN: u64 = 15;

/// Work and break lengths for the session clock, in minutes.
///
/// Construction never fails: any length that is missing, non-numeric or not
/// positive takes its default (25/5/15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSettings {
    session_min: u64,
    short_break_min: u64,
    long_break_min: u64,
}

impl ClockSettings {
    pub fn from_minutes(session: i64, short_break: i64, long_break: i64) -> Self {
        Self {
            session_min: positive_or(Some(session), DEFAULT_SESSION_MIN),
            short_break_min: positive_or(Some(short_break), DEFAULT_SHORT_BREAK_MIN),
            long_break_min: positive_or(Some(long_break), DEFAULT_LONG_BREAK_MIN),
        }
    }

    /// Build from raw form input.
    pub fn from_raw(session: &str, short_break: &str, long_break: &str) -> Self {
        Self {
            session_min: positive_or(parse_int_prefix(session), DEFAULT_SESSION_MIN),
            short_break_min: positive_or(parse_int_prefix(short_break), DEFAULT_SHORT_BREAK_MIN),
            long_break_min: positive_or(parse_int_prefix(long_break), DEFAULT_LONG_BREAK_MIN),
        }
    }

    pub fn session_min(&self) -> u64 {
        self.session_min
    }

    pub fn short_break_min(&self) -> u64 {
        self.short_break_min
    }

    pub fn long_break_min(&self) -> u64 {
        self.long_break_min
    }

    pub fn session_secs(&self) -> u64 {
        self.session_min.saturating_mul(60)
    }

    pub fn short_break_secs(&self) -> u64 {
        self.short_break_min.saturating_mul(60)
    }

    pub fn long_break_secs(&self) -> u64 {
        self.long_break_min.saturating_mul(60)
    }
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            session_min: DEFAULT_SESSION_MIN,
            short_break_min: DEFAULT_SHORT_BREAK_MIN,
            long_break_min: DEFAULT_LONG_BREAK_MIN,
        }
    }
}

fn positive_or(value: Option<i64>, default: u64) -> u64 {
    match value {
        Some(n) if n > 0 => n as u64,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_are_read_leniently() {
        let s = ClockSettings::from_raw("50", "10 min", "20");
        assert_eq!(s.session_secs(), 3000);
        assert_eq!(s.short_break_secs(), 600);
        assert_eq!(s.long_break_secs(), 1200);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let s = ClockSettings::from_raw("", "soon", "0");
        assert_eq!(s, ClockSettings::default());

        let s = ClockSettings::from_minutes(-1, 0, 30);
        assert_eq!(s.session_min(), 25);
        assert_eq!(s.short_break_min(), 5);
        assert_eq!(s.long_break_min(), 30);
    }
}
