use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::{auth::LoginRequest, common::MessageResponse},
    error::AppError,
    routes::extract::AppJson,
    services::auth_service,
    state::SharedState,
};

/// Admin login endpoint.
pub fn router() -> Router<SharedState> {
    Router::new().route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse)
    )
)]
/// Check the submitted admin credentials.
pub async fn login(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(auth_service::login(&state, payload)?))
}
