use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare environment starts the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Sessions untouched for longer than this are dropped on the next create.
    pub session_idle_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_idle_ttl_secs: env_or("SESSION_IDLE_TTL_SECS", 3600)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_when_unset() {
        let value: u16 = env_or("RESUME_WIZARD_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_env_or_parses_value() {
        std::env::set_var("RESUME_WIZARD_TEST_TTL", "90");
        let value: u64 = env_or("RESUME_WIZARD_TEST_TTL", 3600).unwrap();
        assert_eq!(value, 90);
    }

    #[test]
    fn test_env_or_rejects_garbage() {
        std::env::set_var("RESUME_WIZARD_TEST_BAD_PORT", "eighty");
        let err = env_or::<u16>("RESUME_WIZARD_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("RESUME_WIZARD_TEST_BAD_PORT"));
    }
}
