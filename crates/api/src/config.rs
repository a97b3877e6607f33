use std::fmt;
use std::str::FromStr;

use crate::auth::session::SessionConfig;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected text or json)")),
        }
    }
}

/// Credentials for the admin account ensured at startup.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session lifetime and cookie attributes.
    pub session: SessionConfig,
    /// Insert the demo catalog into an empty database on startup.
    pub seed_catalog: bool,
    /// Admin account to create on startup if it does not exist yet.
    pub bootstrap_admin: Option<BootstrapAdmin>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SEED_CATALOG`         | `false`                    |
    /// | `ADMIN_USERNAME`       | unset                      |
    /// | `ADMIN_PASSWORD`       | unset                      |
    /// | `LOG_FORMAT`           | `text`                     |
    ///
    /// Session settings are read by [`SessionConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = parse_env("PORT", 5000);

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_env("REQUEST_TIMEOUT_SECS", 30);
        let seed_catalog = parse_bool_env("SEED_CATALOG", false);
        let log_format: LogFormat = parse_env("LOG_FORMAT", LogFormat::Text);

        let bootstrap_admin = match (
            non_empty_env("ADMIN_USERNAME"),
            non_empty_env("ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some(BootstrapAdmin { username, password }),
            (None, None) => None,
            _ => panic!("ADMIN_USERNAME and ADMIN_PASSWORD must be set together"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session: SessionConfig::from_env(),
            seed_catalog,
            bootstrap_admin,
            log_format,
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse `key` from the environment, falling back to `default` when unset.
///
/// # Panics
///
/// Panics if the variable is set but cannot be parsed.
pub(crate) fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Parse a boolean flag. Accepts `true`/`false`/`1`/`0` (case-insensitive).
pub(crate) fn parse_bool_env(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => parse_bool(&raw)
            .unwrap_or_else(|| panic!("{key} must be true or false, got '{raw}'")),
        Err(_) => default,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn bool_flags() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn bootstrap_admin_debug_hides_password() {
        let admin = BootstrapAdmin {
            username: "root".into(),
            password: "hunter22".into(),
        };
        let rendered = format!("{admin:?}");
        assert!(rendered.contains("root"));
        assert!(!rendered.contains("hunter22"));
    }
}
