use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Live Scores Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sse::live_scores_stream,
        crate::routes::teams::list_teams,
        crate::routes::teams::create_team,
        crate::routes::auth::login,
        crate::routes::admin::list_matches,
        crate::routes::admin::create_match,
        crate::routes::admin::update_match,
        crate::routes::admin::add_event,
        crate::routes::admin::delete_match,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::MessageResponse,
            crate::dto::auth::LoginRequest,
            crate::dto::teams::CreateTeamPresetRequest,
            crate::dto::matches::CreateMatchRequest,
            crate::dto::matches::UpdateMatchRequest,
            crate::dto::matches::StatsUpdate,
            crate::dto::matches::CreateEventRequest,
            crate::state::matches::Match,
            crate::state::matches::MatchEvent,
            crate::state::matches::MatchStats,
            crate::state::matches::MetricPair,
            crate::state::matches::EventKind,
            crate::state::matches::TeamSide,
            crate::state::status::MatchStatus,
            crate::state::presets::TeamPreset,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent events streams"),
        (name = "teams", description = "Team presets offered when creating matches"),
        (name = "auth", description = "Admin credential check"),
        (name = "admin", description = "Match management"),
    )
)]
pub struct ApiDoc;
