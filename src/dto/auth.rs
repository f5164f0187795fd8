use serde::Deserialize;
use utoipa::ToSchema;

/// Credentials submitted by the admin login form. Missing fields never match.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}
