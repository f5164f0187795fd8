use tracing::warn;

use crate::{
    dto::sse::ServerEvent,
    state::{SharedState, matches::Match},
};

/// Serialise the full match list into an unnamed SSE event.
pub fn live_scores_event(matches: &[Match]) -> serde_json::Result<ServerEvent> {
    ServerEvent::json(None::<String>, matches)
}

/// Broadcast a snapshot of every match to live-score subscribers.
///
/// The list is serialised once per call regardless of how many clients are connected, and not at
/// all when nobody is listening.
pub async fn broadcast_live_scores(state: &SharedState) {
    let hub = state.live_scores();
    if hub.subscriber_count() == 0 {
        return;
    }

    let snapshot = state.read_matches(|store| store.snapshot()).await;
    match live_scores_event(&snapshot) {
        Ok(event) => hub.broadcast(event),
        Err(err) => warn!(error = %err, "failed to serialize live scores snapshot"),
    }
}
