use std::{convert::Infallible, time::Duration};

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::{
    broadcast::{self, error::RecvError},
    mpsc,
};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    dto::sse::ServerEvent,
    services::sse_events::live_scores_event,
    state::SharedState,
};

/// Live-score subscription: the snapshot to send first and the receiver for later ones.
pub struct LiveScoresSubscription {
    pub id: Uuid,
    pub initial: Option<ServerEvent>,
    pub receiver: broadcast::Receiver<ServerEvent>,
}

/// Subscribe to the live-score hub and capture the current snapshot.
///
/// The receiver is registered while the store is read-locked, so every change made after the
/// snapshot reaches the subscriber through a later broadcast.
pub async fn subscribe_live_scores(state: &SharedState) -> LiveScoresSubscription {
    let (snapshot, receiver) = state
        .read_matches(|store| (store.snapshot(), state.live_scores().subscribe()))
        .await;

    let initial = match live_scores_event(&snapshot) {
        Ok(event) => Some(event),
        Err(err) => {
            warn!(error = %err, "failed to serialize initial live scores snapshot");
            None
        }
    };

    LiveScoresSubscription {
        id: Uuid::new_v4(),
        initial,
        receiver,
    }
}

fn to_event(payload: ServerEvent) -> Event {
    let mut event = Event::default().data(payload.data);
    if let Some(name) = payload.event {
        event = event.event(name);
    }
    event
}

/// Convert a subscription into an SSE response, forwarding events and cleaning up once the
/// client disconnects.
pub fn to_sse_stream(
    subscription: LiveScoresSubscription,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let LiveScoresSubscription {
        id,
        initial,
        mut receiver,
    } = subscription;

    // small bounded channel between forwarder and response
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(8);

    // forwarder task: reads from broadcast and pushes into mpsc
    tokio::spawn(async move {
        if let Some(payload) = initial {
            if tx.send(Ok(to_event(payload))).await.is_err() {
                info!(subscriber = %id, "live scores stream disconnected");
                return;
            }
        }

        loop {
            tokio::select! {
                _ = tx.closed() => break,
                recv_result = receiver.recv() => {
                    match recv_result {
                        Ok(payload) => {
                            if tx.send(Ok(to_event(payload))).await.is_err() {
                                break;
                            }
                        }
                        Err(RecvError::Closed) => break,
                        Err(RecvError::Lagged(skipped)) => {
                            // Older snapshots are superseded by the next one anyway.
                            warn!(subscriber = %id, skipped, "live scores subscriber lagging");
                            continue;
                        }
                    }
                }
            }
        }

        info!(subscriber = %id, "live scores stream disconnected");
    });

    // response stream reads from mpsc; when client disconnects axum drops this stream
    let stream = ReceiverStream::new(rx);
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
