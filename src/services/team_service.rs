use tracing::info;

use crate::{
    dto::teams::CreateTeamPresetRequest,
    state::{SharedState, presets::TeamPreset},
};

/// Return every team preset in the order it was added.
pub async fn list_presets(state: &SharedState) -> Vec<TeamPreset> {
    state.presets().lock().await.list().to_vec()
}

/// Append a team preset and persist the full list. Name and logo are validated by the caller.
pub async fn create_preset(state: &SharedState, request: CreateTeamPresetRequest) -> TeamPreset {
    let mut presets = state.presets().lock().await;
    let preset = presets.add(request.into()).await;
    info!(
        name = %preset.name,
        total = presets.list().len(),
        path = %presets.path().display(),
        "team preset added"
    );
    preset
}
