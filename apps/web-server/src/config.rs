//! Application configuration loaded from environment variables.

use std::env;

use actix_web::cookie::Key;
use quill_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub session: SessionConfig,
}

/// Session cookie settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cookie signing/encryption secret, at least 64 bytes.
    pub secret: Option<String>,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            cookie_name: "quill_session".to_string(),
            cookie_secure: false,
        }
    }
}

impl SessionConfig {
    /// The cookie key. Falls back to a random key, which logs everybody out on restart.
    pub fn key(&self) -> Key {
        match self.secret.as_deref().map(|s| Key::try_from(s.as_bytes())) {
            Some(Ok(key)) => key,
            Some(Err(_)) => {
                tracing::warn!("SESSION_SECRET is shorter than 64 bytes. Using a random key.");
                Key::generate()
            }
            None => {
                tracing::warn!("SESSION_SECRET not set. Using a random key.");
                Key::generate()
            }
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: var("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        let defaults = SessionConfig::default();
        let session = SessionConfig {
            secret: var("SESSION_SECRET"),
            cookie_name: var("SESSION_COOKIE_NAME").unwrap_or(defaults.cookie_name),
            cookie_secure: var("SESSION_COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.cookie_secure),
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
            session,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert_eq!(config.session.cookie_name, "quill_session");
        assert!(!config.session.cookie_secure);
    }

    #[test]
    fn test_database_settings() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/quill"),
            ("DB_MAX_CONNECTIONS", "20"),
            ("DB_MIN_CONNECTIONS", "not-a-number"),
        ]);
        let db = config.database.unwrap();
        assert_eq!(db.url, "postgres://localhost/quill");
        assert_eq!(db.max_connections, 20);
        assert_eq!(db.min_connections, 10);
    }

    #[test]
    fn test_session_settings() {
        let config = load(&[
            ("PORT", "3000"),
            ("SESSION_COOKIE_NAME", "blog"),
            ("SESSION_COOKIE_SECURE", "true"),
        ]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.session.cookie_name, "blog");
        assert!(config.session.cookie_secure);
    }

    #[test]
    fn test_long_secret_gives_stable_key() {
        let session = SessionConfig {
            secret: Some("s".repeat(64)),
            ..SessionConfig::default()
        };
        assert_eq!(session.key().master(), session.key().master());
    }
}
