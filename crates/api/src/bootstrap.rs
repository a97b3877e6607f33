//! One-off tasks run by the binary before it starts serving.

use kartuli_core::error::CoreError;
use kartuli_core::roles::ROLE_ADMIN;
use kartuli_db::models::user::CreateUser;
use kartuli_db::repositories::{SessionRepo, UserRepo};
use kartuli_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::{BootstrapAdmin, ServerConfig};
use crate::error::{AppError, AppResult};

/// Purge expired sessions, seed the demo catalog when enabled, and ensure the
/// configured admin account exists.
pub async fn run_startup_tasks(pool: &DbPool, config: &ServerConfig) -> AppResult<()> {
    let purged = SessionRepo::cleanup_expired(pool).await?;
    tracing::info!(purged, "Expired sessions purged");

    if config.seed_catalog {
        let seeded = kartuli_db::seed::seed_catalog(pool).await?;
        if !seeded {
            tracing::info!("Catalog already populated, skipping seed");
        }
    }

    if let Some(admin) = &config.bootstrap_admin {
        ensure_admin(pool, admin).await?;
    }

    Ok(())
}

/// Create the bootstrap admin unless a user with that username exists.
///
/// An existing account is left untouched, whatever its role. Returns `true`
/// when a user was created.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %admin.username, "Bootstrap admin already exists");
        return Ok(false);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(format!("ADMIN_PASSWORD: {msg}"))))?;
    let hashed = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: None,
            password_hash: hashed,
            first_name: None,
            last_name: None,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, username = %admin.username, "Bootstrap admin created");
    Ok(true)
}
