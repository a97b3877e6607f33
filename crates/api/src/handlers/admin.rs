//! Handlers for the `/admin/users` resource (user management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::Json;
use kartuli_core::error::CoreError;
use kartuli_core::types::UserId;
use kartuli_db::models::user::{UpdateUser, User, UserResponse};
use kartuli_db::models::validation;
use kartuli_db::repositories::user_repo::GuardedUpdate;
use kartuli_db::repositories::{SessionRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /admin/users/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(url(message = "Invalid profile image URL"))]
    pub profile_image_url: Option<String>,
    #[validate(custom(function = "validation::role"))]
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub new_password: Option<String>,
}

/// Request body for `PATCH /admin/users/{id}/role`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(custom(function = "validation::role"))]
    pub role: String,
}

/// Request body for `PATCH /admin/users/{id}/status`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// PUT /api/admin/users/{id}
///
/// Update profile fields, role, active flag, and optionally reset the
/// password. Deactivating the account ends all of its sessions.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<UserId>,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let password_hash = match input.new_password.as_deref() {
        Some(password) => {
            validate_password_strength(password, MIN_PASSWORD_LENGTH)
                .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
            Some(
                hash_password(password)
                    .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
            )
        }
        None => None,
    };
    let password_reset = password_hash.is_some();

    let update_dto = UpdateUser {
        username: input.username,
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        profile_image_url: input.profile_image_url,
        role: input.role,
        is_active: input.is_active,
        password_hash,
    };
    let user = apply_guarded(&state, &id, &update_dto).await?;

    if update_dto.is_active == Some(false) {
        SessionRepo::delete_for_user(&state.pool, &id).await?;
    }

    tracing::info!(
        user_id = %id,
        admin_id = %admin.id(),
        password_reset,
        "User updated by admin"
    );

    Ok(Json(UserResponse::from(user)))
}

/// PATCH /api/admin/users/{id}/role
pub async fn update_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<UserId>,
    ValidatedJson(input): ValidatedJson<UpdateRoleRequest>,
) -> AppResult<Json<UserResponse>> {
    let update_dto = UpdateUser {
        role: Some(input.role),
        ..Default::default()
    };
    let user = apply_guarded(&state, &id, &update_dto).await?;

    tracing::info!(user_id = %id, admin_id = %admin.id(), role = %user.role, "User role changed");

    Ok(Json(UserResponse::from(user)))
}

/// PATCH /api/admin/users/{id}/status
///
/// Activate or deactivate an account. Deactivation ends all of its sessions.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<UserId>,
    ValidatedJson(input): ValidatedJson<UpdateStatusRequest>,
) -> AppResult<Json<UserResponse>> {
    let update_dto = UpdateUser {
        is_active: Some(input.is_active),
        ..Default::default()
    };
    let user = apply_guarded(&state, &id, &update_dto).await?;

    if !input.is_active {
        let ended = SessionRepo::delete_for_user(&state.pool, &id).await?;
        tracing::info!(user_id = %id, sessions = ended, "Sessions ended for deactivated user");
    }

    tracing::info!(
        user_id = %id,
        admin_id = %admin.id(),
        is_active = input.is_active,
        "User status changed"
    );

    Ok(Json(UserResponse::from(user)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Apply a user update, refusing one that would leave no active admin.
async fn apply_guarded(state: &AppState, id: &str, input: &UpdateUser) -> AppResult<User> {
    match UserRepo::update_guarded(&state.pool, id, input).await? {
        GuardedUpdate::Updated(user) => Ok(user),
        GuardedUpdate::NotFound => Err(AppError::not_found("User")),
        GuardedUpdate::LastAdmin => Err(AppError::Core(CoreError::Conflict(
            "Cannot remove the last active admin".into(),
        ))),
    }
}
