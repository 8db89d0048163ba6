// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer configuration.
//!
//! Settings are read from an optional YAML file and then overridden from
//! `PORTFOLIO_*` environment variables, so relay identifiers and the API
//! base can be supplied by the hosting environment instead of being
//! written into the file.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::navigation::NavigationMode;

/// Public send endpoint of the default email-relay service.
pub const DEFAULT_RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Allowed auto-reset delay range, in seconds.
pub const RESET_DELAY_RANGE: std::ops::RangeInclusive<u64> = 1..=10;

/// Errors raised while reading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },

    #[error("email relay transport requires {0}")]
    MissingRelaySetting(&'static str),

    #[error("reset delay of {0}s is outside 1-10s")]
    ResetDelayOutOfRange(u64),

    #[error("request timeout must be at least 1s")]
    ZeroRequestTimeout,
}

/// Where content lists come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// Built-in lists only.
    #[default]
    Static,
    /// Fetch from the API, falling back to the built-in lists.
    Remote,
}

impl FromStr for ContentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "remote" => Ok(Self::Remote),
            other => Err(format!("unknown content mode: {other}")),
        }
    }
}

/// How contact messages leave the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    #[default]
    Backend,
    EmailRelay,
}

impl FromStr for TransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backend" => Ok(Self::Backend),
            "email_relay" | "email-relay" | "relay" => Ok(Self::EmailRelay),
            other => Err(format!("unknown contact transport: {other}")),
        }
    }
}

/// Contact transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub transport: TransportKind,
    pub relay_url: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            service_id: None,
            template_id: None,
            public_key: None,
        }
    }
}

/// Complete viewer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the content API; unset means same-origin relative paths.
    pub api_base: Option<String>,
    pub content: ContentMode,
    pub navigation: NavigationMode,
    pub contact: ContactConfig,
    /// Seconds before a success or error status returns to idle.
    pub reset_delay_secs: u64,
    pub request_timeout_secs: u64,
    pub profile_image: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: None,
            content: ContentMode::default(),
            navigation: NavigationMode::default(),
            contact: ContactConfig::default(),
            reset_delay_secs: 3,
            request_timeout_secs: 10,
            profile_image: None,
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        })
}

impl Config {
    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load the configuration file, if any.
    ///
    /// A path that does not exist yields the defaults; a file that exists
    /// but cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(path) {
            Ok(yaml) => {
                let config = Self::from_yaml_str(&yaml)?;
                log::info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No configuration at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply `PORTFOLIO_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base) = get("PORTFOLIO_API_BASE") {
            self.api_base = Some(base);
        }
        if let Some(value) = get("PORTFOLIO_CONTENT") {
            self.content = parse_value("PORTFOLIO_CONTENT", value)?;
        }
        if let Some(value) = get("PORTFOLIO_NAVIGATION") {
            self.navigation = parse_value("PORTFOLIO_NAVIGATION", value)?;
        }
        if let Some(value) = get("PORTFOLIO_CONTACT_TRANSPORT") {
            self.contact.transport = parse_value("PORTFOLIO_CONTACT_TRANSPORT", value)?;
        }
        if let Some(url) = get("PORTFOLIO_RELAY_URL") {
            self.contact.relay_url = url;
        }
        if let Some(id) = get("PORTFOLIO_RELAY_SERVICE_ID") {
            self.contact.service_id = Some(id);
        }
        if let Some(id) = get("PORTFOLIO_RELAY_TEMPLATE_ID") {
            self.contact.template_id = Some(id);
        }
        if let Some(key) = get("PORTFOLIO_RELAY_PUBLIC_KEY") {
            self.contact.public_key = Some(key);
        }

        Ok(())
    }

    /// Check settings that cannot be expressed in the types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !RESET_DELAY_RANGE.contains(&self.reset_delay_secs) {
            return Err(ConfigError::ResetDelayOutOfRange(self.reset_delay_secs));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroRequestTimeout);
        }

        if self.contact.transport == TransportKind::EmailRelay {
            let missing = |value: &Option<String>| value.as_deref().map_or(true, str::is_empty);
            if missing(&self.contact.service_id) {
                return Err(ConfigError::MissingRelaySetting("service_id"));
            }
            if missing(&self.contact.template_id) {
                return Err(ConfigError::MissingRelaySetting("template_id"));
            }
            if missing(&self.contact.public_key) {
                return Err(ConfigError::MissingRelaySetting("public_key"));
            }
        }

        Ok(())
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_secs(self.reset_delay_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base, None);
        assert_eq!(config.content, ContentMode::Static);
        assert_eq!(config.navigation, NavigationMode::Tabs);
        assert_eq!(config.contact.transport, TransportKind::Backend);
        assert_eq!(config.reset_delay(), Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml_str(
            "api_base: http://localhost:8000\ncontent: remote\nnavigation: scroll_spy\n",
        )
        .unwrap();

        assert_eq!(config.api_base.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.content, ContentMode::Remote);
        assert_eq!(config.navigation, NavigationMode::ScrollSpy);
        assert_eq!(config.contact.relay_url, DEFAULT_RELAY_URL);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_enum_value_is_parse_error() {
        let result = Config::from_yaml_str("navigation: sidebar\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.yaml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "reset_delay_secs: 4").unwrap();
        writeln!(file, "contact:").unwrap();
        writeln!(file, "  transport: email_relay").unwrap();
        writeln!(file, "  service_id: svc").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.reset_delay_secs, 4);
        assert_eq!(config.contact.transport, TransportKind::EmailRelay);
        assert_eq!(config.contact.service_id.as_deref(), Some("svc"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("PORTFOLIO_API_BASE", "https://api.example"),
                ("PORTFOLIO_CONTENT", "remote"),
                ("PORTFOLIO_CONTACT_TRANSPORT", "email_relay"),
                ("PORTFOLIO_RELAY_SERVICE_ID", "svc"),
                ("PORTFOLIO_RELAY_TEMPLATE_ID", "tpl"),
                ("PORTFOLIO_RELAY_PUBLIC_KEY", "key"),
                ("PORTFOLIO_NAVIGATION", ""),
            ]))
            .unwrap();

        assert_eq!(config.api_base.as_deref(), Some("https://api.example"));
        assert_eq!(config.content, ContentMode::Remote);
        assert_eq!(config.navigation, NavigationMode::Tabs);
        assert_eq!(config.contact.transport, TransportKind::EmailRelay);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("PORTFOLIO_CONTENT", "cached")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "PORTFOLIO_CONTENT"
        ));
    }

    #[test]
    fn test_relay_without_identifiers_is_rejected() {
        let mut config = Config::default();
        config.contact.transport = TransportKind::EmailRelay;
        config.contact.service_id = Some("svc".to_string());

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRelaySetting("template_id"))
        ));
    }

    #[test]
    fn test_reset_delay_range() {
        let mut config = Config::default();
        config.reset_delay_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ResetDelayOutOfRange(0))));

        config.reset_delay_secs = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_request_timeout_is_rejected() {
        let mut config = Config::from_yaml_str("request_timeout_secs: 0").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::ZeroRequestTimeout)));

        config.request_timeout_secs = 1;
        assert!(config.validate().is_ok());
    }
}
