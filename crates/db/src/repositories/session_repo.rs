//! Repository for the `sessions` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::session::{CreateSession, Session};

const COLUMNS: &str = "sid, sess, expire, created_at";

/// Provides storage for auth sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (sid, sess, expire)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(&input.sid)
            .bind(Json(&input.data))
            .bind(input.expire)
            .fetch_one(pool)
            .await
    }

    /// Find a session by `sid` that has not yet expired.
    pub async fn find_active(pool: &PgPool, sid: &str) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE sid = $1 AND expire > NOW()");
        sqlx::query_as::<_, Session>(&query)
            .bind(sid)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, sid: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE sid = $1")
            .bind(sid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every session belonging to a user. Returns the count removed.
    pub async fn delete_for_user(pool: &PgPool, user_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE sess->>'userId' = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Purge expired sessions. Returns the count removed.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expire <= NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
