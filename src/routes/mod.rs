use axum::Router;

use crate::state::SharedState;

pub mod admin;
pub mod auth;
pub mod docs;
pub mod extract;
pub mod health;
pub mod sse;
pub mod teams;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(sse::router())
        .merge(teams::router())
        .merge(auth::router())
        .merge(admin::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
