//! Auth session model and DTOs.

use kartuli_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

/// Payload stored in the `sess` JSONB column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub user_id: UserId,
}

/// A session row from the `sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    /// SHA-256 hex digest of the cookie token.
    pub sid: String,
    pub sess: Json<SessionData>,
    pub expire: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub sid: String,
    pub data: SessionData,
    pub expire: Timestamp,
}
