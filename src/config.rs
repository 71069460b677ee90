// src/config.rs
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Brevo credentials. Absent means magic links are only logged.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: String,
    pub sender_email: String,
    pub sender_name: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub workers: usize,
    pub database_path: PathBuf,
    /// Absolute site origin used for canonical URLs, sitemap and emails.
    pub base_url: String,
    pub mail: Option<MailConfig>,
}

impl Config {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url: String = try_load(&lookup, "SITE_BASE_URL", "https://turanchito.com")?;

        let mail = match lookup("BREVO_API_KEY").filter(|k| !k.trim().is_empty()) {
            Some(api_key) => Some(MailConfig {
                api_key,
                sender_email: try_load(&lookup, "MAIL_SENDER_EMAIL", "no-reply@turanchito.com")?,
                sender_name: try_load(&lookup, "MAIL_SENDER_NAME", "Turanchito")?,
            }),
            None => {
                warn!("BREVO_API_KEY not set, magic links will be logged instead of emailed");
                None
            }
        };

        Ok(Self {
            addr: try_load(&lookup, "TURANCHITO_ADDR", "127.0.0.1:3000")?,
            workers: try_load(&lookup, "TURANCHITO_WORKERS", "8")?,
            database_path: try_load(&lookup, "DATABASE_PATH", "turanchito.sqlite3")?,
            base_url: base_url.trim_end_matches('/').to_string(),
            mail,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(cfg.workers, 8);
        assert_eq!(cfg.database_path, PathBuf::from("turanchito.sqlite3"));
        assert_eq!(cfg.base_url, "https://turanchito.com");
        assert!(cfg.mail.is_none());
    }

    #[test]
    fn overrides_and_trailing_slash() {
        let cfg = Config::from_lookup(lookup(&[
            ("TURANCHITO_ADDR", "0.0.0.0:8080"),
            ("TURANCHITO_WORKERS", "2"),
            ("SITE_BASE_URL", "https://staging.turanchito.com/"),
            ("BREVO_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.workers, 2);
        assert_eq!(cfg.base_url, "https://staging.turanchito.com");
        let mail = cfg.mail.unwrap();
        assert_eq!(mail.sender_name, "Turanchito");
    }

    #[test]
    fn bad_values_are_errors() {
        let err = Config::from_lookup(lookup(&[("TURANCHITO_WORKERS", "many")])).unwrap_err();
        assert!(err.to_string().contains("TURANCHITO_WORKERS"));
    }
}
