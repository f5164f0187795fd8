use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::state::presets::TeamPreset;

/// Payload used to register a new team preset.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTeamPresetRequest {
    #[validate(
        required(message = "Team name and logo are required."),
        length(min = 1, message = "Team name and logo are required.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Team name and logo are required."),
        length(min = 1, message = "Team name and logo are required.")
    )]
    pub logo: Option<String>,
}

impl From<CreateTeamPresetRequest> for TeamPreset {
    fn from(value: CreateTeamPresetRequest) -> Self {
        TeamPreset::new(
            value.name.unwrap_or_default(),
            value.logo.unwrap_or_default(),
        )
    }
}
