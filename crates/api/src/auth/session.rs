//! Opaque session tokens and the session cookie.
//!
//! A session token is 32 random bytes, base64url-encoded, handed to the
//! browser in an HTTP-only cookie. Only its SHA-256 hex digest is stored as
//! the `sessions.sid`, so a database leak does not expose live sessions.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::config::{parse_bool_env, parse_env};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "kartuli_session";

const TOKEN_BYTES: usize = 32;
const DEFAULT_TTL_HOURS: i64 = 24;

/// Session lifetime and cookie attributes.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fixed session lifetime in hours, counted from login.
    pub ttl_hours: i64,
    /// Set the `Secure` attribute on the cookie (enable behind HTTPS).
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: DEFAULT_TTL_HOURS,
            cookie_secure: false,
        }
    }
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `SESSION_TTL_HOURS`     | `24`    |
    /// | `SESSION_COOKIE_SECURE` | `false` |
    pub fn from_env() -> Self {
        let ttl_hours: i64 = parse_env("SESSION_TTL_HOURS", DEFAULT_TTL_HOURS);
        assert!(ttl_hours > 0, "SESSION_TTL_HOURS must be positive");

        Self {
            ttl_hours,
            cookie_secure: parse_bool_env("SESSION_COOKIE_SECURE", false),
        }
    }

    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.ttl_hours)
    }
}

/// Generate a new session token.
///
/// Returns `(plaintext_token, sha256_hex_hash)`. The plaintext goes into the
/// cookie; only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    let token = URL_SAFE_NO_PAD.encode(bytes);
    let hash = hash_session_token(&token);
    (token, hash)
}

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Build the cookie that carries `token`.
pub fn session_cookie(token: String, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build()
}

/// Add a removal cookie for the session to `jar`.
pub fn clear_session_cookie(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

/// Read the session token from the request cookies, if present.
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_hash_matches() {
        let (token, hash) = generate_session_token();

        assert_eq!(hash, hash_session_token(&token), "hash must be stable");
        assert_eq!(hash.len(), 64);
        // 32 bytes base64url without padding.
        assert_eq!(token.len(), 43);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cookie_attributes() {
        let config = SessionConfig {
            ttl_hours: 24,
            cookie_secure: true,
        };
        let cookie = session_cookie("tok".into(), &config);
        let rendered = cookie.to_string();

        assert!(rendered.starts_with("kartuli_session=tok"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Secure"));
    }

    #[test]
    fn test_insecure_cookie_by_default() {
        let cookie = session_cookie("tok".into(), &SessionConfig::default());
        assert!(!cookie.to_string().contains("Secure"));
    }

    #[test]
    fn test_session_token_read_from_jar() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "abc"));
        assert_eq!(session_token(&jar).as_deref(), Some("abc"));
        assert_eq!(session_token(&CookieJar::new()), None);
    }
}
