//! Match clock shown next to every score: a running `MM:SS` counter or one of the
//! `HT` / `FT` sentinels.

use std::{fmt, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

const HALF_TIME_LABEL: &str = "HT";
const FULL_TIME_LABEL: &str = "FT";

/// Current reading of a match clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum MatchClock {
    /// Elapsed playing time. Before kick-off this may hold the scheduled kick-off time instead.
    Running {
        /// Whole minutes played.
        minutes: u32,
        /// Seconds into the current minute, always below 60.
        seconds: u32,
    },
    /// Half-time break (`HT`).
    HalfTime,
    /// Match is over (`FT`).
    FullTime,
}

impl MatchClock {
    /// Clock value at kick-off (`00:00`).
    pub const KICK_OFF: Self = Self::Running {
        minutes: 0,
        seconds: 0,
    };

    /// Clock value when the second half starts (`45:00`).
    pub const SECOND_HALF: Self = Self::Running {
        minutes: 45,
        seconds: 0,
    };

    /// Advance a running clock by one second. Sentinels stay as they are, and so does a clock
    /// already at its largest representable minute.
    pub fn advance(self) -> Self {
        match self {
            Self::Running { minutes, seconds } if seconds + 1 >= 60 => minutes
                .checked_add(1)
                .map_or(self, |minutes| Self::Running { minutes, seconds: 0 }),
            Self::Running { minutes, seconds } => Self::Running {
                minutes,
                seconds: seconds + 1,
            },
            other => other,
        }
    }

    /// Whole minutes elapsed, when the clock is running.
    pub fn minutes(&self) -> Option<u32> {
        match self {
            Self::Running { minutes, .. } => Some(*minutes),
            _ => None,
        }
    }

    /// Minute label stamped on a match event (`"05"`, `"HT"`, `"FT"`).
    pub fn minute_label(&self) -> String {
        match self {
            Self::Running { minutes, .. } => format!("{minutes:02}"),
            Self::HalfTime => HALF_TIME_LABEL.to_string(),
            Self::FullTime => FULL_TIME_LABEL.to_string(),
        }
    }
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::KICK_OFF
    }
}

impl fmt::Display for MatchClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running { minutes, seconds } => write!(f, "{minutes:02}:{seconds:02}"),
            Self::HalfTime => f.write_str(HALF_TIME_LABEL),
            Self::FullTime => f.write_str(FULL_TIME_LABEL),
        }
    }
}

/// Raised when a clock string is neither `MM:SS` nor a known sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid match clock `{0}`: expected MM:SS, HT or FT")]
pub struct ClockParseError(pub String);

impl FromStr for MatchClock {
    type Err = ClockParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        match trimmed {
            HALF_TIME_LABEL => return Ok(Self::HalfTime),
            FULL_TIME_LABEL => return Ok(Self::FullTime),
            _ => {}
        }

        let invalid = || ClockParseError(value.to_string());
        let (minutes, seconds) = trimmed.split_once(':').ok_or_else(invalid)?;
        if minutes.is_empty()
            || seconds.is_empty()
            || !minutes.bytes().all(|b| b.is_ascii_digit())
            || !seconds.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let minutes = minutes.parse::<u32>().map_err(|_| invalid())?;
        let seconds = seconds.parse::<u32>().map_err(|_| invalid())?;
        if seconds >= 60 {
            return Err(invalid());
        }

        Ok(Self::Running { minutes, seconds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(value: &str) -> MatchClock {
        value.parse().unwrap()
    }

    #[test]
    fn advance_rolls_seconds_into_minutes() {
        assert_eq!(clock("00:59").advance().to_string(), "01:00");
        assert_eq!(clock("12:30").advance().to_string(), "12:31");
        assert_eq!(clock("99:59").advance().to_string(), "100:00");
    }

    #[test]
    fn advance_stops_at_largest_minute() {
        let last = clock("4294967295:59");
        assert_eq!(last.advance(), last);
        assert_eq!(clock("4294967295:00").advance().to_string(), "4294967295:01");
    }

    #[test]
    fn sentinels_do_not_advance() {
        assert_eq!(MatchClock::HalfTime.advance(), MatchClock::HalfTime);
        assert_eq!(MatchClock::FullTime.advance(), MatchClock::FullTime);
    }

    #[test]
    fn parses_sentinels_and_running_values() {
        assert_eq!(clock("HT"), MatchClock::HalfTime);
        assert_eq!(clock("FT"), MatchClock::FullTime);
        assert_eq!(clock("00:00"), MatchClock::KICK_OFF);
        assert_eq!(
            clock("7:05"),
            MatchClock::Running {
                minutes: 7,
                seconds: 5
            }
        );
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in ["", "12", "ab:cd", "10:60", ":30", "10:", "-1:00", "ht"] {
            assert!(raw.parse::<MatchClock>().is_err(), "`{raw}` should not parse");
        }
    }

    #[test]
    fn minute_label_is_zero_padded() {
        assert_eq!(clock("05:42").minute_label(), "05");
        assert_eq!(clock("67:00").minute_label(), "67");
        assert_eq!(MatchClock::HalfTime.minute_label(), "HT");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&clock("45:00")).unwrap();
        assert_eq!(json, "\"45:00\"");
        let parsed: MatchClock = serde_json::from_str("\"FT\"").unwrap();
        assert_eq!(parsed, MatchClock::FullTime);
    }
}
