//! Configuration types and loading

use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use crate::traits::ToQueryParams;

pub const DEFAULT_API_URL: &str = "https://bis.brontosaurus.cz/api/frontend/";
pub const DEFAULT_EVENTS_PATH: &str = "events/";

/// Where the remote BIS API lives
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ClientConfig {
    /// Base URL of the API
    #[validate(url)]
    pub api_url: String,

    /// Path of the events endpoint, relative to `api_url`
    #[validate(length(min = 1), custom = "validate_relative_path")]
    pub events_path: String,
}

/// Fields in the order their errors are reported
const FIELDS: [&str; 2] = ["api_url", "events_path"];

/// A leading slash or a scheme would make `Url::join` discard the base path
fn validate_relative_path(path: &str) -> Result<(), ValidationError> {
    if path.starts_with('/') || path.starts_with('\\') || Url::parse(path).is_ok() {
        return Err(ValidationError::new("relative_path"));
    }
    Ok(())
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            events_path: DEFAULT_EVENTS_PATH.to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// - `BIS_API_URL` overrides the API base URL
    /// - `BIS_EVENTS_PATH` overrides the events endpoint path
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("BIS_API_URL") {
            config.api_url = url;
        }
        if let Some(path) = lookup("BIS_EVENTS_PATH") {
            config.events_path = path;
        }

        config.check()?;
        tracing::debug!(api_url = %config.api_url, events_path = %config.events_path, "Loaded client config");
        Ok(config)
    }

    /// Validate the configuration
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|errors| {
            let failed = errors.field_errors();
            let key = FIELDS
                .into_iter()
                .find(|field| failed.contains_key(*field))
                .unwrap_or("config")
                .to_string();
            ConfigError::InvalidValue {
                key,
                message: errors.to_string(),
            }
        })
    }

    /// Parsed API base URL, always ending with a slash so relative joins append
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let mut raw = self.api_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
            key: "api_url".to_string(),
            message: e.to_string(),
        })
    }

    /// Full URL of the events endpoint with the request's query appended
    pub fn events_url(&self, request: &impl ToQueryParams) -> Result<Url, ConfigError> {
        self.check()?;
        let mut url = self
            .base_url()?
            .join(&self.events_path)
            .map_err(|e| ConfigError::InvalidValue {
                key: "events_path".to_string(),
                message: e.to_string(),
            })?;
        request.to_query_params().apply_to(&mut url);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::QueryParams;
    use std::collections::HashMap;

    struct Fixed(QueryParams);

    impl ToQueryParams for Fixed {
        fn to_query_params(&self) -> QueryParams {
            self.0.clone()
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.events_path, DEFAULT_EVENTS_PATH);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = ClientConfig::from_vars(vars(&[
            ("BIS_API_URL", "https://bis.example.org/api"),
            ("BIS_EVENTS_PATH", "akce/"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://bis.example.org/api");
        assert_eq!(config.events_path, "akce/");
    }

    #[test]
    fn test_from_vars_rejects_bad_url() {
        let err = ClientConfig::from_vars(vars(&[("BIS_API_URL", "not a url")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, .. } => assert_eq!(key, "api_url"),
        }
    }

    #[test]
    fn test_from_vars_rejects_absolute_events_path() {
        for path in ["/events/", "https://other.example/x", "//other.example/x"] {
            let err = ClientConfig::from_vars(vars(&[("BIS_EVENTS_PATH", path)])).unwrap_err();
            match err {
                ConfigError::InvalidValue { key, .. } => assert_eq!(key, "events_path", "{path}"),
            }
        }
    }

    #[test]
    fn test_events_url_rejects_absolute_events_path() {
        let config = ClientConfig {
            events_path: "/events/".to_string(),
            ..Default::default()
        };
        let request = Fixed(QueryParams::new());
        assert!(config.events_url(&request).is_err());
    }

    #[test]
    fn test_invalid_fields_reported_in_order() {
        let config = ClientConfig {
            api_url: "not a url".to_string(),
            events_path: "/events/".to_string(),
        };
        for _ in 0..10 {
            match config.check().unwrap_err() {
                ConfigError::InvalidValue { key, .. } => assert_eq!(key, "api_url"),
            }
        }
    }

    #[test]
    fn test_events_url() {
        let config = ClientConfig {
            api_url: "https://bis.example.org/api".to_string(),
            events_path: "events/".to_string(),
        };
        let request = Fixed(QueryParams::new().with("ordering", "date_to"));

        let url = config.events_url(&request).unwrap();
        assert_eq!(url.as_str(), "https://bis.example.org/api/events/?ordering=date_to");
    }
}
