use std::{env, str::FromStr};

use tracing::warn;

use crate::backend::{BackendConfig, DEFAULT_BACKEND_URL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub timeout_ms: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000);
        let backend_url =
            lookup("RECIPE_BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let timeout_ms = lookup("QUERY_TIMEOUT_MS").and_then(|value| {
            value
                .parse::<u64>()
                .map_err(|e| warn!("Invalid QUERY_TIMEOUT_MS value {value:?}: {e}, no timeout"))
                .ok()
        });

        Self {
            host,
            port,
            backend_url,
            timeout_ms,
        }
    }

    pub fn backend(&self) -> BackendConfig {
        BackendConfig::new(self.backend_url.clone(), self.timeout_ms)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {value:?}: {e}, using default {default}");
            default
        }),
        None => default,
    }
}
