//! In-memory match store mutated by admin requests and by the clock ticker.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::state::{
    clock::MatchClock,
    status::{self, InvalidTransition, MatchStatus},
};

/// Logo used when a match is created without one.
pub const PLACEHOLDER_LOGO: &str = "https://placehold.co/64x64/CCCCCC/000000?text=Logo";
/// Player name stored when an event is recorded without one.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// One tracked game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    /// `MM:SS` while running, `HT` at half-time, `FT` once finished.
    #[schema(value_type = String, example = "00:00")]
    pub time: MatchClock,
    pub match_date: Option<String>,
    pub status: MatchStatus,
    pub home_team_logo: String,
    pub away_team_logo: String,
    pub match_events: Vec<MatchEvent>,
    pub stats: MatchStats,
    pub half_time_overtime: u32,
    pub full_time_overtime: u32,
}

impl Match {
    /// Advance the clock of a live match by one second, finishing it once regulation time plus
    /// full-time overtime has elapsed. Returns `true` when the match was advanced.
    fn tick(&mut self) -> bool {
        if self.status != MatchStatus::Live {
            return false;
        }

        self.time = self.time.advance();
        if status::full_time_reached(&self.time, self.full_time_overtime) {
            self.status = MatchStatus::Finished;
            self.time = MatchClock::FullTime;
        }
        true
    }

    fn score_mut(&mut self, side: TeamSide) -> &mut u32 {
        match side {
            TeamSide::Home => &mut self.home_score,
            TeamSide::Away => &mut self.away_score,
        }
    }
}

/// Kind of incident recorded against a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    YellowCard,
    RedCard,
    MissedPenalty,
}

/// Side of the pitch an event is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

/// Goal, card or penalty entry attached to a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub team: TeamSide,
    pub player: String,
    /// Minutes portion of the match clock when the event was recorded.
    pub minute: String,
}

/// Home/away values of a single statistic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetricPair {
    pub home: u32,
    pub away: u32,
}

impl MetricPair {
    /// Build a pair from explicit home and away values.
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

/// Statistics panel shown for a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub possession: MetricPair,
    pub shots: MetricPair,
    pub shots_on_target: MetricPair,
    pub corners: MetricPair,
    pub fouls: MetricPair,
}

impl Default for MatchStats {
    fn default() -> Self {
        Self {
            possession: MetricPair::new(50, 50),
            shots: MetricPair::default(),
            shots_on_target: MetricPair::default(),
            corners: MetricPair::default(),
            fouls: MetricPair::default(),
        }
    }
}

/// Subset of statistics to overwrite; absent metrics are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsPatch {
    pub possession: Option<MetricPair>,
    pub shots: Option<MetricPair>,
    pub shots_on_target: Option<MetricPair>,
    pub corners: Option<MetricPair>,
    pub fouls: Option<MetricPair>,
}

impl MatchStats {
    fn merge(&mut self, patch: StatsPatch) {
        let StatsPatch {
            possession,
            shots,
            shots_on_target,
            corners,
            fouls,
        } = patch;
        merge_field(&mut self.possession, possession);
        merge_field(&mut self.shots, shots);
        merge_field(&mut self.shots_on_target, shots_on_target);
        merge_field(&mut self.corners, corners);
        merge_field(&mut self.fouls, fouls);
    }
}

/// Data required to create a match.
#[derive(Debug, Clone, Default)]
pub struct NewMatch {
    pub home_team: String,
    pub away_team: String,
    pub home_team_logo: Option<String>,
    pub away_team_logo: Option<String>,
    pub match_date: Option<String>,
    pub kick_off: Option<MatchClock>,
}

/// Partial update of a match. Every `Some` field overwrites the stored value.
#[derive(Debug, Clone, Default)]
pub struct MatchPatch {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_team_logo: Option<String>,
    pub away_team_logo: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub time: Option<MatchClock>,
    /// `Some(None)` clears the date.
    pub match_date: Option<Option<String>>,
    pub status: Option<MatchStatus>,
    pub stats: Option<StatsPatch>,
    pub half_time_overtime: Option<u32>,
    pub full_time_overtime: Option<u32>,
}

/// Errors raised by [`MatchStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchStoreError {
    /// No match carries the requested identifier.
    #[error("match {0} not found")]
    NotFound(u32),
    /// The requested status change is not allowed.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
}

/// Outcome of one clock tick across the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Number of live matches whose clock moved.
    pub advanced: usize,
    /// Matches that reached full time on this tick.
    pub finished: Vec<u32>,
}

/// Authoritative list of matches, kept in creation order.
#[derive(Debug, Clone)]
pub struct MatchStore {
    matches: IndexMap<u32, Match>,
    next_id: u32,
}

impl Default for MatchStore {
    fn default() -> Self {
        Self {
            matches: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl MatchStore {
    /// Create an empty store; the first match receives id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over matches in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.values()
    }

    /// Clone every match in creation order.
    pub fn snapshot(&self) -> Vec<Match> {
        self.iter().cloned().collect()
    }

    /// Look up a match by id.
    pub fn get(&self, id: u32) -> Option<&Match> {
        self.matches.get(&id)
    }

    /// Number of matches held.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the store holds no match.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Insert a scheduled match and return it.
    ///
    /// Identifiers come from a counter that never goes backwards, so deleting the newest match
    /// does not make its id available again.
    pub fn create(&mut self, new: NewMatch) -> Match {
        let id = self.next_id;
        self.next_id += 1;

        let created = Match {
            id,
            home_team: new.home_team,
            away_team: new.away_team,
            home_score: 0,
            away_score: 0,
            time: new.kick_off.unwrap_or_default(),
            match_date: new.match_date,
            status: MatchStatus::Scheduled,
            home_team_logo: logo_or_placeholder(new.home_team_logo),
            away_team_logo: logo_or_placeholder(new.away_team_logo),
            match_events: Vec::new(),
            stats: MatchStats::default(),
            half_time_overtime: 0,
            full_time_overtime: 0,
        };

        self.matches.insert(id, created.clone());
        created
    }

    /// Merge `patch` into the match with the given id.
    ///
    /// A status change first rewrites the incoming clock (kick-off, second half, `HT`, `FT`), so
    /// the forced value wins over any `time` carried in the same patch.
    pub fn update(&mut self, id: u32, mut patch: MatchPatch) -> Result<Match, MatchStoreError> {
        let current = self
            .matches
            .get_mut(&id)
            .ok_or(MatchStoreError::NotFound(id))?;

        if let Some(next) = patch.status {
            if let Some(forced) = status::transition(current.status, next)? {
                patch.time = Some(forced);
            }
        }

        let MatchPatch {
            home_team,
            away_team,
            home_team_logo,
            away_team_logo,
            home_score,
            away_score,
            time,
            match_date,
            status,
            stats,
            half_time_overtime,
            full_time_overtime,
        } = patch;

        merge_field(&mut current.home_team, home_team);
        merge_field(&mut current.away_team, away_team);
        merge_field(&mut current.home_team_logo, home_team_logo);
        merge_field(&mut current.away_team_logo, away_team_logo);
        merge_field(&mut current.home_score, home_score);
        merge_field(&mut current.away_score, away_score);
        merge_field(&mut current.time, time);
        merge_field(&mut current.match_date, match_date);
        merge_field(&mut current.status, status);
        merge_field(&mut current.half_time_overtime, half_time_overtime);
        merge_field(&mut current.full_time_overtime, full_time_overtime);
        if let Some(stats) = stats {
            current.stats.merge(stats);
        }

        Ok(current.clone())
    }

    /// Record an event against a match, stamping it with the current clock minute. Goals bump
    /// the scoring side by one.
    pub fn append_event(
        &mut self,
        id: u32,
        kind: EventKind,
        team: TeamSide,
        player: Option<String>,
    ) -> Result<MatchEvent, MatchStoreError> {
        let current = self
            .matches
            .get_mut(&id)
            .ok_or(MatchStoreError::NotFound(id))?;

        let event = MatchEvent {
            kind,
            team,
            player: player
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
            minute: current.time.minute_label(),
        };

        if kind == EventKind::Goal {
            let score = current.score_mut(team);
            *score = score.saturating_add(1);
        }
        current.match_events.push(event.clone());

        Ok(event)
    }

    /// Remove a match, keeping the remaining ones in order.
    pub fn delete(&mut self, id: u32) -> Result<Match, MatchStoreError> {
        self.matches
            .shift_remove(&id)
            .ok_or(MatchStoreError::NotFound(id))
    }

    /// Advance every live match by one second.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        for game in self.matches.values_mut() {
            if game.tick() {
                report.advanced += 1;
                if game.status == MatchStatus::Finished {
                    report.finished.push(game.id);
                }
            }
        }
        report
    }
}

fn merge_field<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn logo_or_placeholder(logo: Option<String>) -> String {
    logo.filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_LOGO.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_match(home: &str, away: &str) -> NewMatch {
        NewMatch {
            home_team: home.into(),
            away_team: away.into(),
            ..NewMatch::default()
        }
    }

    fn clock(value: &str) -> MatchClock {
        value.parse().unwrap()
    }

    fn live_store(time: &str) -> (MatchStore, u32) {
        let mut store = MatchStore::new();
        let id = store.create(new_match("Liverpool", "Dortmund")).id;
        store
            .update(
                id,
                MatchPatch {
                    status: Some(MatchStatus::Live),
                    ..MatchPatch::default()
                },
            )
            .unwrap();
        store
            .update(
                id,
                MatchPatch {
                    time: Some(clock(time)),
                    ..MatchPatch::default()
                },
            )
            .unwrap();
        (store, id)
    }

    #[test]
    fn create_initialises_defaults() {
        let mut store = MatchStore::new();
        let created = store.create(new_match("Real Madrid", "Barcelona"));

        assert_eq!(created.id, 1);
        assert_eq!((created.home_score, created.away_score), (0, 0));
        assert_eq!(created.time, MatchClock::KICK_OFF);
        assert_eq!(created.status, MatchStatus::Scheduled);
        assert_eq!(created.home_team_logo, PLACEHOLDER_LOGO);
        assert_eq!(created.stats.possession, MetricPair::new(50, 50));
        assert_eq!(created.stats.fouls, MetricPair::default());
        assert!(created.match_events.is_empty());
        assert_eq!(store.get(1), Some(&created));
    }

    #[test]
    fn create_keeps_supplied_kick_off_and_logos() {
        let mut store = MatchStore::new();
        let created = store.create(NewMatch {
            home_team_logo: Some("https://example.org/home.png".into()),
            away_team_logo: Some(String::new()),
            match_date: Some("2026-11-02".into()),
            kick_off: Some(clock("20:45")),
            ..new_match("Man Utd", "Liverpool")
        });

        assert_eq!(created.home_team_logo, "https://example.org/home.png");
        assert_eq!(created.away_team_logo, PLACEHOLDER_LOGO);
        assert_eq!(created.match_date.as_deref(), Some("2026-11-02"));
        assert_eq!(created.time.to_string(), "20:45");
    }

    #[test]
    fn ids_are_never_reused_after_deletion() {
        let mut store = MatchStore::new();
        let ids: Vec<u32> = (0..3)
            .map(|_| store.create(new_match("A", "B")).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        store.delete(3).unwrap();
        assert_eq!(store.create(new_match("A", "B")).id, 4);
    }

    #[test]
    fn going_live_from_scheduled_forces_kick_off() {
        let mut store = MatchStore::new();
        let id = store.create(new_match("A", "B")).id;

        let updated = store
            .update(
                id,
                MatchPatch {
                    status: Some(MatchStatus::Live),
                    time: Some(clock("33:12")),
                    ..MatchPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, MatchStatus::Live);
        assert_eq!(updated.time, MatchClock::KICK_OFF);
    }

    #[test]
    fn halftime_round_trip_sets_sentinel_then_second_half() {
        let (mut store, id) = live_store("44:10");

        let paused = store
            .update(
                id,
                MatchPatch {
                    status: Some(MatchStatus::Halftime),
                    ..MatchPatch::default()
                },
            )
            .unwrap();
        assert_eq!(paused.time, MatchClock::HalfTime);

        let resumed = store
            .update(
                id,
                MatchPatch {
                    status: Some(MatchStatus::Live),
                    ..MatchPatch::default()
                },
            )
            .unwrap();
        assert_eq!(resumed.time.to_string(), "45:00");
    }

    #[test]
    fn leaving_finished_is_rejected_without_changes() {
        let (mut store, id) = live_store("10:00");
        store
            .update(
                id,
                MatchPatch {
                    status: Some(MatchStatus::Finished),
                    ..MatchPatch::default()
                },
            )
            .unwrap();
        let before = store.snapshot();

        let err = store
            .update(
                id,
                MatchPatch {
                    status: Some(MatchStatus::Live),
                    home_team: Some("Changed".into()),
                    ..MatchPatch::default()
                },
            )
            .unwrap_err();

        assert!(matches!(err, MatchStoreError::InvalidTransition(_)));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn stats_merge_only_touches_named_metrics() {
        let mut store = MatchStore::new();
        let id = store.create(new_match("A", "B")).id;

        let updated = store
            .update(
                id,
                MatchPatch {
                    stats: Some(StatsPatch {
                        shots: Some(MetricPair::new(4, 2)),
                        ..StatsPatch::default()
                    }),
                    full_time_overtime: Some(4),
                    match_date: Some(None),
                    ..MatchPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.stats.shots, MetricPair::new(4, 2));
        assert_eq!(updated.stats.possession, MetricPair::new(50, 50));
        assert_eq!(updated.full_time_overtime, 4);
        assert_eq!(updated.match_date, None);
        assert_eq!(updated.home_team, "A");
    }

    #[test]
    fn update_unknown_match_is_not_found() {
        let mut store = MatchStore::new();
        let err = store.update(9, MatchPatch::default()).unwrap_err();
        assert_eq!(err, MatchStoreError::NotFound(9));
    }

    #[test]
    fn goal_increments_score_and_freezes_minute() {
        let (mut store, id) = live_store("23:41");
        store
            .update(
                id,
                MatchPatch {
                    home_score: Some(1),
                    ..MatchPatch::default()
                },
            )
            .unwrap();

        let event = store
            .append_event(id, EventKind::Goal, TeamSide::Home, Some("Salah".into()))
            .unwrap();
        assert_eq!(event.minute, "23");
        assert_eq!(event.player, "Salah");

        for _ in 0..120 {
            store.tick();
        }

        let game = store.get(id).unwrap();
        assert_eq!(game.home_score, 2);
        assert_eq!(game.away_score, 0);
        assert_eq!(game.match_events, vec![event]);
        assert_eq!(game.match_events[0].minute, "23");
    }

    #[test]
    fn cards_do_not_change_score_and_default_player() {
        let mut store = MatchStore::new();
        let id = store.create(new_match("A", "B")).id;

        let event = store
            .append_event(id, EventKind::YellowCard, TeamSide::Away, None)
            .unwrap();

        assert_eq!(event.player, UNKNOWN_PLAYER);
        assert_eq!(event.minute, "00");
        let game = store.get(id).unwrap();
        assert_eq!((game.home_score, game.away_score), (0, 0));
    }

    #[test]
    fn append_event_to_unknown_match_is_not_found() {
        let mut store = MatchStore::new();
        let err = store
            .append_event(5, EventKind::Goal, TeamSide::Away, None)
            .unwrap_err();
        assert_eq!(err, MatchStoreError::NotFound(5));
    }

    #[test]
    fn delete_unknown_match_leaves_store_untouched() {
        let mut store = MatchStore::new();
        store.create(new_match("A", "B"));
        store.create(new_match("C", "D"));
        let before = store.snapshot();

        assert_eq!(store.delete(42), Err(MatchStoreError::NotFound(42)));
        assert_eq!(store.snapshot(), before);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_preserves_order_of_remaining_matches() {
        let mut store = MatchStore::new();
        for _ in 0..3 {
            store.create(new_match("A", "B"));
        }
        store.delete(2).unwrap();
        let ids: Vec<u32> = store.iter().map(|game| game.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn tick_advances_only_live_matches() {
        let (mut store, live_id) = live_store("00:59");
        let scheduled_id = store.create(new_match("C", "D")).id;

        let report = store.tick();

        assert_eq!(report.advanced, 1);
        assert!(report.finished.is_empty());
        assert_eq!(store.get(live_id).unwrap().time.to_string(), "01:00");
        assert_eq!(store.get(scheduled_id).unwrap().time, MatchClock::KICK_OFF);
    }

    #[test]
    fn tick_finishes_match_at_full_time() {
        let (mut store, id) = live_store("89:59");

        let report = store.tick();

        assert_eq!(report.finished, vec![id]);
        let game = store.get(id).unwrap();
        assert_eq!(game.status, MatchStatus::Finished);
        assert_eq!(game.time, MatchClock::FullTime);

        assert_eq!(store.tick(), TickReport::default());
    }

    #[test]
    fn tick_with_maximum_overtime_keeps_match_live() {
        let (mut store, id) = live_store("89:59");
        store
            .update(
                id,
                MatchPatch {
                    full_time_overtime: Some(u32::MAX),
                    ..MatchPatch::default()
                },
            )
            .unwrap();

        let report = store.tick();

        assert_eq!(report.advanced, 1);
        assert!(report.finished.is_empty());
        let game = store.get(id).unwrap();
        assert_eq!(game.status, MatchStatus::Live);
        assert_eq!(game.time.to_string(), "90:00");
    }

    #[test]
    fn goal_at_maximum_score_still_records_event() {
        let (mut store, id) = live_store("10:00");
        store
            .update(
                id,
                MatchPatch {
                    home_score: Some(u32::MAX),
                    ..MatchPatch::default()
                },
            )
            .unwrap();

        store
            .append_event(id, EventKind::Goal, TeamSide::Home, None)
            .unwrap();

        let game = store.get(id).unwrap();
        assert_eq!(game.home_score, u32::MAX);
        assert_eq!(game.match_events.len(), 1);
    }

    #[test]
    fn tick_respects_full_time_overtime() {
        let (mut store, id) = live_store("89:59");
        store
            .update(
                id,
                MatchPatch {
                    full_time_overtime: Some(3),
                    ..MatchPatch::default()
                },
            )
            .unwrap();

        store.tick();
        let game = store.get(id).unwrap();
        assert_eq!(game.status, MatchStatus::Live);
        assert_eq!(game.time.to_string(), "90:00");
    }
}
