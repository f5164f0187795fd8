use std::convert::Infallible;

use axum::{Router, extract::State, response::sse::Sse, routing::get};
use futures::Stream;
use tracing::info;

use crate::{services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/live-scores",
    tag = "sse",
    responses((status = 200, description = "Full match list pushed on every clock tick", content_type = "text/event-stream", body = String))
)]
/// Stream the full match list to connected viewers, starting with the current snapshot.
pub async fn live_scores_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>> {
    let subscription = sse_service::subscribe_live_scores(&state).await;
    info!(subscriber = %subscription.id, "New live scores SSE connection");
    sse_service::to_sse_stream(subscription)
}

/// Configure the SSE endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/live-scores", get(live_scores_stream))
}
