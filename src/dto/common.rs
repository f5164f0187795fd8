use serde::Serialize;
use utoipa::ToSchema;

/// Generic acknowledgement carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message into a response payload.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
