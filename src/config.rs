use std::path::PathBuf;

use thiserror::Error;

use crate::consultant::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_COURSES_PATH: &str = "courses.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Process configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` keeps the server up but makes `/ask` fail until a key is set
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub courses_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            courses_path: PathBuf::from(DEFAULT_COURSES_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(host) = get("HOST") {
            config.host = host;
        }
        if let Some(port) = get("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: port,
            })?;
        }

        config.gemini_api_key = get("GEMINI_API_KEY");

        if let Some(model) = get("GEMINI_MODEL") {
            config.gemini_model = model;
        }
        if let Some(url) = get("GEMINI_BASE_URL") {
            config.gemini_base_url = url;
        }
        if let Some(path) = get("COURSES_PATH") {
            config.courses_path = PathBuf::from(path);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.courses_path, PathBuf::from("courses.json"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("GEMINI_API_KEY", "abc123"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("COURSES_PATH", "/srv/data/courses.json"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.gemini_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.courses_path, PathBuf::from("/srv/data/courses.json"));
    }

    #[test]
    fn test_blank_key_is_unset() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert_eq!(config.gemini_api_key, None);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
