use tracing::{info, warn};

use crate::{
    dto::{auth::LoginRequest, common::MessageResponse},
    error::ServiceError,
    state::SharedState,
};

/// Compare submitted credentials with the configured admin pair. No session is issued.
pub fn login(state: &SharedState, request: LoginRequest) -> Result<MessageResponse, ServiceError> {
    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if state.config().admin().matches(&username, &password) {
        info!(%username, "admin login succeeded");
        Ok(MessageResponse::new("Login successful"))
    } else {
        warn!(%username, "admin login rejected");
        Err(ServiceError::Unauthorized("Invalid credentials".into()))
    }
}
