//! Cart identity extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use kartuli_core::cart::{guest_cart_key, user_cart_key, CART_SESSION_HEADER};

use super::auth::MaybeAuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// The cart key a request shops under.
///
/// Signed-in callers always use `user:{id}`. Guests must send a token in the
/// `X-Session-Id` header and get `guest:{token}`. A guest request without the
/// header is rejected with 400.
#[derive(Debug, Clone)]
pub struct CartSession {
    pub key: String,
}

impl FromRequestParts<AppState> for CartSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybeAuthUser(user) = MaybeAuthUser::from_request_parts(parts, state).await?;
        if let Some(user) = user {
            return Ok(CartSession {
                key: user_cart_key(user.id()),
            });
        }

        let token = guest_token(&parts.headers)
            .ok_or_else(|| AppError::BadRequest("Missing cart session".into()))?;
        Ok(CartSession {
            key: guest_cart_key(token)?,
        })
    }
}

/// Raw `X-Session-Id` header value, if present and non-empty.
pub fn guest_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CART_SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn guest_token_reads_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(guest_token(&headers), None);

        headers.insert(CART_SESSION_HEADER, HeaderValue::from_static("  "));
        assert_eq!(guest_token(&headers), None);

        headers.insert(CART_SESSION_HEADER, HeaderValue::from_static("abcd1234"));
        assert_eq!(guest_token(&headers), Some("abcd1234"));
    }
}
