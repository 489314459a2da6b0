use std::time::Duration;

use health_lib::util::ProbeSettings;
use secrecy::Secret;

use crate::constants::{
    CORS_ALLOWED_ORIGINS, DATABASE_URL, DB_CONNECT_TIMEOUT_SECS,
    DEFAULT_PORT, HEALTH_API_PORT, MAX_BODY_SIZE_BYTES, REQUEST_TIMEOUT_SECS,
    SHUTDOWN_TIMEOUT_SECS,
};

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub shutdown_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_body_size: 1_048_576, // 1MB
            shutdown_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_env() -> Self {
        let default = Self::default();

        let request_timeout = env_parse::<u64>(REQUEST_TIMEOUT_SECS)
            .map(Duration::from_secs)
            .unwrap_or(default.request_timeout);

        let max_body_size = env_parse(MAX_BODY_SIZE_BYTES).unwrap_or(default.max_body_size);

        let shutdown_timeout = env_parse::<u64>(SHUTDOWN_TIMEOUT_SECS)
            .map(Duration::from_secs)
            .unwrap_or(default.shutdown_timeout);

        let cors_allowed_origins = std::env::var(CORS_ALLOWED_ORIGINS)
            .ok()
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(default.cors_allowed_origins);

        Self {
            request_timeout,
            max_body_size,
            shutdown_timeout,
            cors_allowed_origins,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    pub probe: ProbeSettings,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, String> {
        let url = std::env::var(DATABASE_URL)
            .map_err(|_| format!("{} environment variable must be set", DATABASE_URL))?;

        let probe = ProbeSettings {
            connect_timeout: env_parse::<u64>(DB_CONNECT_TIMEOUT_SECS)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(ProbeSettings::default().connect_timeout),
        };

        Ok(Self {
            url: Secret::new(url),
            probe,
        })
    }
}

pub fn port_from_env() -> u16 {
    env_parse(HEALTH_API_PORT).unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middleware_defaults() {
        let config = MiddlewareConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_body_size, 1_048_576);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_explicit_origins_do_not_allow_any() {
        let config = MiddlewareConfig {
            cors_allowed_origins: vec!["https://status.example.com".to_string()],
            ..MiddlewareConfig::default()
        };
        assert!(!config.allows_any_origin());
    }
}
