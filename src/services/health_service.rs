use crate::{dto::health::HealthResponse, state::SharedState};

/// Report liveness together with the number of tracked matches and stream subscribers.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let matches = state.read_matches(|store| store.len()).await;
    HealthResponse::ok(matches, state.live_scores().subscriber_count())
}
