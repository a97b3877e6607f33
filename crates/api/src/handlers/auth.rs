//! Handlers for registration, login, logout, and the current identity.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use kartuli_core::cart::{guest_cart_key, user_cart_key};
use kartuli_core::roles::ROLE_USER;
use kartuli_db::models::session::{CreateSession, SessionData};
use kartuli_db::models::user::{CreateUser, UserResponse};
use kartuli_db::repositories::{CartRepo, SessionRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{burn_verification, hash_password, verify_password};
use crate::auth::session::{
    clear_session_cookie, generate_session_token, hash_session_token, session_cookie,
    session_token,
};
use crate::error::{unique_violation, AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::cart::guest_token;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register
///
/// Create a `user` account and sign it in. A guest cart named by the
/// `X-Session-Id` header is merged into the new account's cart.
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, CookieJar, Json<UserResponse>)> {
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Username already exists".into()));
    }
    if let Some(email) = input.email.as_deref() {
        if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
            return Err(AppError::BadRequest("Email already registered".into()));
        }
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash: hashed,
        first_name: input.first_name,
        last_name: input.last_name,
        role: ROLE_USER.to_string(),
    };

    // A concurrent registration can still win the race past the lookups above.
    let user = UserRepo::create(&state.pool, &create_dto)
        .await
        .map_err(|err| match unique_violation(&err) {
            Some("uq_users_username") => AppError::BadRequest("Username already exists".into()),
            Some("uq_users_email") => AppError::BadRequest("Email already registered".into()),
            _ => AppError::Database(err),
        })?;

    let jar = start_session(&state, jar, &user.id).await?;
    merge_guest_cart(&state, &headers, &user.id).await?;

    tracing::info!(user_id = %user.id, username = ?user.username, "User registered");

    Ok((StatusCode::CREATED, jar, Json(UserResponse::from(user))))
}

/// POST /api/login
///
/// Authenticate with username + password and set the session cookie.
/// Every failure answers with the same 401.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<UserResponse>)> {
    let user = UserRepo::find_by_username(&state.pool, &input.username).await?;

    let Some((user, hash)) = user
        .filter(|u| u.is_active)
        .and_then(|u| u.password_hash.clone().map(|hash| (u, hash)))
    else {
        burn_verification(&input.password);
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    };

    let password_valid = verify_password(&input.password, &hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = %user.id, "Login rejected: wrong password");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    // Replace any session the browser was already holding.
    if let Some(token) = session_token(&jar) {
        SessionRepo::delete(&state.pool, &hash_session_token(&token)).await?;
    }

    let jar = start_session(&state, jar, &user.id).await?;
    merge_guest_cart(&state, &headers, &user.id).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((jar, Json(UserResponse::from(user))))
}

/// POST /api/logout
///
/// Delete the caller's session, if any, and clear the cookie. Returns 204
/// whether or not a session existed.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(StatusCode, CookieJar)> {
    if let Some(token) = session_token(&jar) {
        let removed = SessionRepo::delete(&state.pool, &hash_session_token(&token)).await?;
        if removed {
            tracing::info!("Session ended");
        }
    }
    Ok((StatusCode::NO_CONTENT, clear_session_cookie(jar)))
}

/// GET /api/user
pub async fn current_user(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(auth.user))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persist a new session for `user_id` and add its cookie to `jar`.
async fn start_session(state: &AppState, jar: CookieJar, user_id: &str) -> AppResult<CookieJar> {
    let (token, sid) = generate_session_token();
    let session_input = CreateSession {
        sid,
        data: SessionData {
            user_id: user_id.to_string(),
        },
        expire: Utc::now() + state.config.session.ttl(),
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    Ok(jar.add(session_cookie(token, &state.config.session)))
}

/// Move the guest cart named by `X-Session-Id` into the user's cart.
///
/// A missing or malformed header is not an error here; the guest simply has
/// nothing to merge.
async fn merge_guest_cart(state: &AppState, headers: &HeaderMap, user_id: &str) -> AppResult<()> {
    let Some(guest_key) = guest_token(headers).and_then(|t| guest_cart_key(t).ok()) else {
        return Ok(());
    };

    let moved = CartRepo::merge_sessions(&state.pool, &guest_key, &user_cart_key(user_id)).await?;
    if moved > 0 {
        tracing::info!(user_id = %user_id, items = moved, "Guest cart merged");
    }
    Ok(())
}
