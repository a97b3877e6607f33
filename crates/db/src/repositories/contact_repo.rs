//! Repository for the `contacts` table.

use kartuli_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact};

const COLUMNS: &str = "id, first_name, last_name, email, phone, interest, message, status, \
                        created_at, updated_at";

/// Provides storage for contact form submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Store a new submission with status `new`.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (first_name, last_name, email, phone, interest, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.interest)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Overwrite the status of a submission. The caller validates `status`.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
