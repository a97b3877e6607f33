/// Catalog, form and cart primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// User ids are opaque strings (UUID v4 text for locally registered accounts).
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
