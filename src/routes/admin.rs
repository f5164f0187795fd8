use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        matches::{CreateEventRequest, CreateMatchRequest, UpdateMatchRequest},
    },
    error::AppError,
    routes::extract::AppJson,
    services::match_service,
    state::{
        SharedState,
        matches::{Match, MatchEvent},
    },
};

/// Admin-only management endpoints for creating and driving matches.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/admin/matches", get(list_matches).post(create_match))
        .route("/admin/matches/{id}", put(update_match).delete(delete_match))
        .route("/admin/matches/{id}/events", post(add_event))
}

/// Retrieve every tracked match.
#[utoipa::path(
    get,
    path = "/admin/matches",
    tag = "admin",
    responses((status = 200, description = "Tracked matches", body = [Match]))
)]
pub async fn list_matches(State(state): State<SharedState>) -> Json<Vec<Match>> {
    Json(match_service::list_matches(&state).await)
}

/// Schedule a new match between two teams.
#[utoipa::path(
    post,
    path = "/admin/matches",
    tag = "admin",
    request_body = CreateMatchRequest,
    responses(
        (status = 201, description = "Match created", body = Match),
        (status = 400, description = "Team names missing or kick-off time malformed", body = MessageResponse)
    )
)]
pub async fn create_match(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<CreateMatchRequest>,
) -> Result<(StatusCode, Json<Match>), AppError> {
    payload.validate()?;
    let created = match_service::create_match(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Apply a partial update (status, clock, teams, stats, overtime) to a match.
#[utoipa::path(
    put,
    path = "/admin/matches/{id}",
    tag = "admin",
    params(("id" = u32, Path, description = "Identifier of the match to update")),
    request_body = UpdateMatchRequest,
    responses(
        (status = 200, description = "Match updated", body = Match),
        (status = 400, description = "Malformed clock value", body = MessageResponse),
        (status = 404, description = "Match not found", body = MessageResponse),
        (status = 409, description = "Status change not allowed", body = MessageResponse)
    )
)]
pub async fn update_match(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    AppJson(payload): AppJson<UpdateMatchRequest>,
) -> Result<Json<Match>, AppError> {
    Ok(Json(match_service::update_match(&state, id, payload).await?))
}

/// Record a goal, card or missed penalty.
#[utoipa::path(
    post,
    path = "/admin/matches/{id}/events",
    tag = "admin",
    params(("id" = u32, Path, description = "Identifier of the match the event belongs to")),
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event recorded", body = MatchEvent),
        (status = 400, description = "Malformed event body", body = MessageResponse),
        (status = 404, description = "Match not found", body = MessageResponse)
    )
)]
pub async fn add_event(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    payload: Result<AppJson<CreateEventRequest>, AppError>,
) -> Result<(StatusCode, Json<MatchEvent>), AppError> {
    // An unknown match wins over a malformed event body.
    let AppJson(payload) = match payload {
        Ok(payload) => payload,
        Err(err) => {
            match_service::ensure_match_exists(&state, id).await?;
            return Err(err);
        }
    };
    let event = match_service::add_event(&state, id, payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Remove a match.
#[utoipa::path(
    delete,
    path = "/admin/matches/{id}",
    tag = "admin",
    params(("id" = u32, Path, description = "Identifier of the match to delete")),
    responses(
        (status = 200, description = "Match deleted", body = MessageResponse),
        (status = 404, description = "Match not found", body = MessageResponse)
    )
)]
pub async fn delete_match(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(match_service::delete_match(&state, id).await?))
}
