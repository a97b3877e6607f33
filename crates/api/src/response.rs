//! Shared response bodies for handlers that do not return an entity.

use kartuli_core::types::DbId;
use serde::Serialize;

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "message": ..., "id": ... }` returned after a form submission is stored.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: DbId,
}
