//! Request payloads accepted by the admin match endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::state::{
    clock::{ClockParseError, MatchClock},
    matches::{EventKind, MatchPatch, MetricPair, NewMatch, StatsPatch, TeamSide},
    status::MatchStatus,
};

/// Payload used to schedule a new match.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    #[validate(
        required(message = "Home and away teams are required."),
        length(min = 1, message = "Home and away teams are required.")
    )]
    pub home_team: Option<String>,
    #[validate(
        required(message = "Home and away teams are required."),
        length(min = 1, message = "Home and away teams are required.")
    )]
    pub away_team: Option<String>,
    pub home_team_logo: Option<String>,
    pub away_team_logo: Option<String>,
    pub match_date: Option<String>,
    /// Scheduled kick-off shown until the match goes live (`HH:MM`).
    pub match_time: Option<String>,
}

impl TryFrom<CreateMatchRequest> for NewMatch {
    type Error = ClockParseError;

    fn try_from(value: CreateMatchRequest) -> Result<Self, Self::Error> {
        let kick_off = value
            .match_time
            .filter(|time| !time.trim().is_empty())
            .map(|time| time.parse::<MatchClock>())
            .transpose()?;

        Ok(Self {
            home_team: value.home_team.unwrap_or_default(),
            away_team: value.away_team.unwrap_or_default(),
            home_team_logo: value.home_team_logo,
            away_team_logo: value.away_team_logo,
            match_date: value.match_date.filter(|date| !date.trim().is_empty()),
            kick_off,
        })
    }
}

/// Partial statistics update; omitted metrics keep their value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsUpdate {
    pub possession: Option<MetricPair>,
    pub shots: Option<MetricPair>,
    pub shots_on_target: Option<MetricPair>,
    pub corners: Option<MetricPair>,
    pub fouls: Option<MetricPair>,
}

impl From<StatsUpdate> for StatsPatch {
    fn from(value: StatsUpdate) -> Self {
        Self {
            possession: value.possession,
            shots: value.shots,
            shots_on_target: value.shots_on_target,
            corners: value.corners,
            fouls: value.fouls,
        }
    }
}

/// Partial match update. Only the fields present in the body are applied; unknown fields are
/// ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchRequest {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_team_logo: Option<String>,
    pub away_team_logo: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// `MM:SS`, `HT` or `FT`. Overridden when `status` forces a clock value.
    pub time: Option<String>,
    /// If not specified, does not change it. If null is specified, clears the date.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub match_date: Option<Option<String>>,
    pub status: Option<MatchStatus>,
    pub stats: Option<StatsUpdate>,
    pub half_time_overtime: Option<u32>,
    pub full_time_overtime: Option<u32>,
}

impl TryFrom<UpdateMatchRequest> for MatchPatch {
    type Error = ClockParseError;

    fn try_from(value: UpdateMatchRequest) -> Result<Self, Self::Error> {
        let time = value
            .time
            .map(|time| time.parse::<MatchClock>())
            .transpose()?;

        Ok(Self {
            home_team: value.home_team,
            away_team: value.away_team,
            home_team_logo: value.home_team_logo,
            away_team_logo: value.away_team_logo,
            home_score: value.home_score,
            away_score: value.away_score,
            time,
            match_date: value.match_date,
            status: value.status,
            stats: value.stats.map(Into::into),
            half_time_overtime: value.half_time_overtime,
            full_time_overtime: value.full_time_overtime,
        })
    }
}

/// Payload used to record a goal, card or missed penalty.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub team: TeamSide,
    #[serde(default)]
    pub player: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAMS_REQUIRED: &str = "Home and away teams are required.";

    #[test]
    fn create_request_requires_both_team_names() {
        let missing: CreateMatchRequest =
            serde_json::from_str(r#"{"homeTeam": "Liverpool"}"#).unwrap();
        let empty: CreateMatchRequest =
            serde_json::from_str(r#"{"homeTeam": "", "awayTeam": "Dortmund"}"#).unwrap();
        let valid: CreateMatchRequest =
            serde_json::from_str(r#"{"homeTeam": "Liverpool", "awayTeam": "Dortmund"}"#).unwrap();

        assert!(missing.validate().is_err());
        assert!(empty.validate().is_err());
        assert!(valid.validate().is_ok());
        assert!(
            missing
                .validate()
                .unwrap_err()
                .to_string()
                .contains(TEAMS_REQUIRED)
        );
    }

    #[test]
    fn create_request_parses_kick_off_time() {
        let request: CreateMatchRequest = serde_json::from_str(
            r#"{"homeTeam": "A", "awayTeam": "B", "matchTime": "20:45", "matchDate": ""}"#,
        )
        .unwrap();

        let new = NewMatch::try_from(request).unwrap();
        assert_eq!(
            new.kick_off.map(|clock| clock.to_string()).as_deref(),
            Some("20:45")
        );
        assert_eq!(new.match_date, None);
    }

    #[test]
    fn create_request_rejects_bad_kick_off_time() {
        let request = CreateMatchRequest {
            home_team: Some("A".into()),
            away_team: Some("B".into()),
            match_time: Some("tonight".into()),
            ..CreateMatchRequest::default()
        };
        assert!(NewMatch::try_from(request).is_err());
    }

    #[test]
    fn update_request_distinguishes_null_from_absent_date() {
        let absent: UpdateMatchRequest = serde_json::from_str("{}").unwrap();
        let cleared: UpdateMatchRequest = serde_json::from_str(r#"{"matchDate": null}"#).unwrap();
        let set: UpdateMatchRequest =
            serde_json::from_str(r#"{"matchDate": "2026-11-02"}"#).unwrap();

        assert_eq!(absent.match_date, None);
        assert_eq!(cleared.match_date, Some(None));
        assert_eq!(set.match_date, Some(Some("2026-11-02".into())));
    }

    #[test]
    fn update_request_maps_to_patch() {
        let request: UpdateMatchRequest = serde_json::from_str(
            r#"{
                "status": "Live",
                "time": "12:00",
                "stats": {"shotsOnTarget": {"home": 3, "away": 1}},
                "fullTimeOvertime": 5,
                "id": 99
            }"#,
        )
        .unwrap();

        let patch = MatchPatch::try_from(request).unwrap();
        assert_eq!(patch.status, Some(MatchStatus::Live));
        assert_eq!(
            patch.time.map(|clock| clock.to_string()).as_deref(),
            Some("12:00")
        );
        assert_eq!(patch.full_time_overtime, Some(5));
        let stats = patch.stats.unwrap();
        assert_eq!(stats.shots_on_target, Some(MetricPair::new(3, 1)));
        assert_eq!(stats.possession, None);
    }

    #[test]
    fn update_request_rejects_bad_clock() {
        let request: UpdateMatchRequest = serde_json::from_str(r#"{"time": "99:99"}"#).unwrap();
        assert!(MatchPatch::try_from(request).is_err());
    }

    #[test]
    fn event_request_uses_wire_names() {
        let request: CreateEventRequest =
            serde_json::from_str(r#"{"type": "missed_penalty", "team": "away"}"#).unwrap();
        assert_eq!(request.kind, EventKind::MissedPenalty);
        assert_eq!(request.team, TeamSide::Away);
        assert_eq!(request.player, None);
    }
}
