/// Admin login credential check.
pub mod auth_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Match creation, partial updates, events and deletion.
pub mod match_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
/// Team preset listing and creation.
pub mod team_service;
/// Periodic clock advance and live-score broadcast.
pub mod ticker;
