use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::state::clock::MatchClock;

/// Phases a match moves through.
///
/// `Scheduled -> Live`, `Live <-> Halftime` and `* -> Finished` are driven by admins; the ticker
/// additionally finishes a live match once regulation time plus overtime has elapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MatchStatus {
    /// Created but not kicked off yet.
    #[default]
    Scheduled,
    /// Clock is running.
    Live,
    /// Half-time break; the clock is parked on `HT`.
    Halftime,
    /// Match is over; no transition leaves this state.
    Finished,
}

/// Error returned when a status change is not allowed from the current status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transition: cannot move from {from:?} to {to:?}")]
pub struct InvalidTransition {
    /// Status the match was in.
    pub from: MatchStatus,
    /// Status that was requested.
    pub to: MatchStatus,
}

/// Validate a requested status change and return the clock value it forces, if any.
pub fn transition(
    from: MatchStatus,
    to: MatchStatus,
) -> Result<Option<MatchClock>, InvalidTransition> {
    let forced = match (from, to) {
        (MatchStatus::Finished, MatchStatus::Finished) => Some(MatchClock::FullTime),
        (MatchStatus::Finished, to) => return Err(InvalidTransition { from, to }),
        (MatchStatus::Scheduled, MatchStatus::Live) => Some(MatchClock::KICK_OFF),
        (MatchStatus::Halftime, MatchStatus::Live) => Some(MatchClock::SECOND_HALF),
        (_, MatchStatus::Halftime) => Some(MatchClock::HalfTime),
        (_, MatchStatus::Finished) => Some(MatchClock::FullTime),
        _ => None,
    };

    Ok(forced)
}

/// Whether a running clock has reached the end of regulation time plus `overtime` minutes.
pub fn full_time_reached(clock: &MatchClock, overtime: u32) -> bool {
    clock.minutes().is_some_and(|minutes| minutes >= overtime.saturating_add(90))
}
