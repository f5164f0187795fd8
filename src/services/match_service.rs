//! Business logic behind the admin match routes. Every mutation runs under the store's write lock
//! and is followed by an immediate live-score broadcast so viewers do not wait for the next tick.

use tracing::info;

use crate::{
    dto::{
        common::MessageResponse,
        matches::{CreateEventRequest, CreateMatchRequest, UpdateMatchRequest},
    },
    error::ServiceError,
    services::sse_events,
    state::{
        SharedState,
        matches::{Match, MatchEvent, MatchPatch, MatchStoreError, NewMatch},
    },
};

/// Return every match in creation order.
pub async fn list_matches(state: &SharedState) -> Vec<Match> {
    state.read_matches(|store| store.snapshot()).await
}

/// Schedule a new match. Team names are validated by the caller.
pub async fn create_match(
    state: &SharedState,
    request: CreateMatchRequest,
) -> Result<Match, ServiceError> {
    let new = NewMatch::try_from(request)?;
    let created = state.with_matches_mut(|store| store.create(new)).await;
    info!(
        match_id = created.id,
        home = %created.home_team,
        away = %created.away_team,
        "match created"
    );

    sse_events::broadcast_live_scores(state).await;
    Ok(created)
}

/// Merge a partial update into an existing match.
pub async fn update_match(
    state: &SharedState,
    id: u32,
    request: UpdateMatchRequest,
) -> Result<Match, ServiceError> {
    let patch = MatchPatch::try_from(request)?;
    let requested_status = patch.status;
    let updated = state
        .with_matches_mut(|store| store.update(id, patch))
        .await?;

    if let Some(status) = requested_status {
        info!(match_id = id, ?status, time = %updated.time, "match status updated");
    }

    sse_events::broadcast_live_scores(state).await;
    Ok(updated)
}

/// Fail with `NotFound` unless a match with this id exists.
pub async fn ensure_match_exists(state: &SharedState, id: u32) -> Result<(), ServiceError> {
    state
        .read_matches(|store| store.get(id).map(|_| ()))
        .await
        .ok_or_else(|| MatchStoreError::NotFound(id).into())
}

/// Record a goal, card or missed penalty against a match.
pub async fn add_event(
    state: &SharedState,
    id: u32,
    request: CreateEventRequest,
) -> Result<MatchEvent, ServiceError> {
    let CreateEventRequest { kind, team, player } = request;
    let event = state
        .with_matches_mut(|store| store.append_event(id, kind, team, player))
        .await?;
    info!(
        match_id = id,
        kind = ?event.kind,
        team = ?event.team,
        minute = %event.minute,
        "match event recorded"
    );

    sse_events::broadcast_live_scores(state).await;
    Ok(event)
}

/// Remove a match from the store.
pub async fn delete_match(state: &SharedState, id: u32) -> Result<MessageResponse, ServiceError> {
    state.with_matches_mut(|store| store.delete(id)).await?;
    info!(match_id = id, "match deleted");

    sse_events::broadcast_live_scores(state).await;
    Ok(MessageResponse::new("Match deleted successfully"))
}
