//! Server settings read from the environment (a `.env` file is honoured by the binary).

use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3333;
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/campaign";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    /// Apply the idempotent schema DDL before serving.
    pub migrate: bool,
    pub body_limit_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            migrate: true,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Missing or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Settings::default();

        Ok(Settings {
            host: parse_or("HOST", get("HOST"), defaults.host)?,
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"), defaults.max_connections)?,
            migrate: match get("DATABASE_MIGRATE") {
                None => defaults.migrate,
                Some(v) => parse_flag("DATABASE_MIGRATE", &v)?,
            },
            body_limit_bytes: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), defaults.body_limit_bytes)?,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: value.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.port, 3333);
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert!(s.migrate);
        assert_eq!(s.listen_addr().to_string(), "0.0.0.0:3333");
    }

    #[test]
    fn port_and_flags_are_read() {
        let s = settings(&[("PORT", "8080"), ("DATABASE_MIGRATE", "off"), ("HOST", "127.0.0.1")]).unwrap();
        assert_eq!(s.listen_addr().to_string(), "127.0.0.1:8080");
        assert!(!s.migrate);
    }

    #[test]
    fn blank_values_fall_back() {
        let s = settings(&[("PORT", "  ")]).unwrap();
        assert_eq!(s.port, DEFAULT_PORT);
    }

    #[test]
    fn bad_port_is_rejected() {
        match settings(&[("PORT", "eighty")]) {
            Err(ConfigError::Invalid { key, value }) => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("expected invalid port, got {:?}", other),
        }
    }
}
