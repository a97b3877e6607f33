//! Session-cookie authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use kartuli_db::models::user::User;
use kartuli_db::repositories::{SessionRepo, UserRepo};

use crate::auth::session::{hash_session_token, session_token};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `kartuli_session` cookie.
///
/// The user row is re-read on every request, so role changes apply
/// immediately and a deactivated account stops authenticating.
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user.id, role = %auth.user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.user.id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_session_user(parts, state)
            .await?
            .map(|user| AuthUser { user })
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Optional variant of [`AuthUser`] for routes open to guests.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = resolve_session_user(parts, state).await?;
        Ok(MaybeAuthUser(user.map(|user| AuthUser { user })))
    }
}

/// Look up the active, non-expired session for the request cookie and load
/// its user. Inactive users resolve to `None`.
async fn resolve_session_user(parts: &Parts, state: &AppState) -> Result<Option<User>, AppError> {
    let jar = CookieJar::from_headers(&parts.headers);
    let Some(token) = session_token(&jar) else {
        return Ok(None);
    };

    let sid = hash_session_token(&token);
    let Some(session) = SessionRepo::find_active(&state.pool, &sid).await? else {
        return Ok(None);
    };

    let user = UserRepo::find_by_id(&state.pool, &session.sess.user_id).await?;
    Ok(user.filter(|u| u.is_active))
}
