//! Repository for the `users` table.

use kartuli_core::roles::ROLE_ADMIN;
use sqlx::{PgExecutor, PgPool};

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
                        profile_image_url, role, is_active, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with a generated UUID id, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, username, email, password_hash, first_name, last_name, role)
             VALUES (gen_random_uuid()::text, $1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Apply a partial update. Only non-`None` fields in `input` are written.
    ///
    /// Returns `None` if no row with the given `id` exists. No admin guard is
    /// applied; account management goes through [`UserRepo::update_guarded`].
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        Self::apply_update(pool, id, input).await
    }

    /// Apply a partial update unless it would leave no active admin.
    ///
    /// The active admin rows are locked (`FOR UPDATE`, in id order) for the
    /// duration of the transaction, so concurrent demotions or deactivations
    /// are serialized and the later one sees the earlier one's result.
    pub async fn update_guarded(
        pool: &PgPool,
        id: &str,
        input: &UpdateUser,
    ) -> Result<GuardedUpdate, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let admins: Vec<String> = sqlx::query_scalar(
            "SELECT id FROM users WHERE role = $1 AND is_active = true ORDER BY id FOR UPDATE",
        )
        .bind(ROLE_ADMIN)
        .fetch_all(&mut *tx)
        .await?;

        let demotes = input.role.as_deref().is_some_and(|role| role != ROLE_ADMIN);
        let deactivates = input.is_active == Some(false);
        let is_last_admin = matches!(admins.as_slice(), [only] if only == id);
        if is_last_admin && (demotes || deactivates) {
            tx.rollback().await?;
            return Ok(GuardedUpdate::LastAdmin);
        }

        let outcome = match Self::apply_update(&mut *tx, id, input).await? {
            Some(user) => GuardedUpdate::Updated(user),
            None => GuardedUpdate::NotFound,
        };
        tx.commit().await?;
        Ok(outcome)
    }

    async fn apply_update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                first_name = COALESCE($4, first_name),
                last_name = COALESCE($5, last_name),
                profile_image_url = COALESCE($6, profile_image_url),
                role = COALESCE($7, role),
                is_active = COALESCE($8, is_active),
                password_hash = COALESCE($9, password_hash)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.profile_image_url)
            .bind(&input.role)
            .bind(input.is_active)
            .bind(&input.password_hash)
            .fetch_optional(executor)
            .await
    }
}

/// Result of [`UserRepo::update_guarded`].
#[derive(Debug)]
pub enum GuardedUpdate {
    Updated(User),
    NotFound,
    /// The change would demote or deactivate the last active admin; nothing
    /// was written.
    LastAdmin,
}
