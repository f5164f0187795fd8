use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use validator::Validate;

use crate::{
    dto::teams::CreateTeamPresetRequest,
    error::AppError,
    routes::extract::AppJson,
    services::team_service,
    state::{SharedState, presets::TeamPreset},
};

/// Team preset endpoints used to populate the match creation form.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/teams", get(list_teams).post(create_team))
}

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = "teams",
    responses((status = 200, description = "Team presets", body = [TeamPreset]))
)]
/// Return every stored team preset.
pub async fn list_teams(State(state): State<SharedState>) -> Json<Vec<TeamPreset>> {
    Json(team_service::list_presets(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/teams",
    tag = "teams",
    request_body = CreateTeamPresetRequest,
    responses(
        (status = 201, description = "Team preset added", body = TeamPreset),
        (status = 400, description = "Name or logo missing")
    )
)]
/// Add a team preset and persist the updated list.
pub async fn create_team(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<CreateTeamPresetRequest>,
) -> Result<(StatusCode, Json<TeamPreset>), AppError> {
    payload.validate()?;
    let preset = team_service::create_preset(&state, payload).await;
    Ok((StatusCode::CREATED, Json(preset)))
}
