use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};

use crate::{services::sse_events, state::SharedState};

/// Advance every live match once per `period` and push the resulting snapshot to live-score
/// subscribers. Runs until the task is dropped.
pub async fn run(state: SharedState, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        tick_once(&state).await;
    }
}

/// Apply a single clock tick and broadcast the full match list.
pub async fn tick_once(state: &SharedState) {
    let report = state.with_matches_mut(|store| store.tick()).await;
    if report.advanced > 0 {
        debug!(advanced = report.advanced, "advanced live match clocks");
    }
    for match_id in &report.finished {
        info!(match_id, "match reached full time");
    }

    sse_events::broadcast_live_scores(state).await;
}
