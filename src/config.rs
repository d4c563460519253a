// src/config.rs
use std::env;

use anyhow::Context;

pub const DEFAULT_LOG_FILTER: &str = "ayurveda_backend=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Normalised: empty, or a leading slash with no trailing slash.
    pub api_prefix: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            api_prefix: normalize_prefix(&lookup("API_PREFIX").unwrap_or_else(|| "/api".to_string())),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.log_level, DEFAULT_LOG_FILTER);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn custom_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("API_PREFIX", "v1/"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.api_prefix, "/v1");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn root_prefix_becomes_empty() {
        for raw in ["", "/", " // "] {
            let config = Config::from_lookup(lookup_from(&[("API_PREFIX", raw)])).unwrap();
            assert_eq!(config.api_prefix, "");
        }
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "invalid")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }
}
