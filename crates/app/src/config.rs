//! Dashboard configuration.
//!
//! Every field has a sensible default so a host page may supply none of them.
//! Adapters feed string overrides (meta tags, query parameters, ...) through
//! [`DashboardConfig::apply_override`] and then call
//! [`DashboardConfig::validate`].

use std::time::Duration;

use serde::Deserialize;

/// Tunables of the dashboard client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix prepended to every `/api/*` path. Empty means same origin.
    pub api_base: String,
    /// Period of the dashboard refresh, in milliseconds.
    pub poll_interval_ms: u32,
    /// Delay of the extra refresh after test data generation, in milliseconds.
    pub follow_up_delay_ms: u32,
    /// Maximum number of log entries kept when appending local events.
    pub local_log_capacity: usize,
    /// Diagnostic filter directive (`RUST_LOG` syntax).
    pub log_filter: String,
}

/// Errors raised while building a [`DashboardConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override names a field that does not exist.
    #[error("unknown configuration key `{0}`")]
    UnknownKey(String),

    /// The override value does not parse for its field.
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue {
        /// Field name.
        key: String,
        /// Raw value as supplied.
        value: String,
    },

    /// The configuration parsed but violates an invariant.
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}

impl DashboardConfig {
    /// Apply a single `key = value` override.
    ///
    /// Keys accept both `snake_case` and `kebab-case`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] for an unrecognised key and
    /// [`ConfigError::InvalidValue`] when a numeric field does not parse.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key.replace('-', "_").as_str() {
            "api_base" => self.api_base = value.trim_end_matches('/').to_string(),
            "poll_interval_ms" => {
                self.poll_interval_ms = value.trim().parse().map_err(|_| invalid())?;
            }
            "follow_up_delay_ms" => {
                self.follow_up_delay_ms = value.trim().parse().map_err(|_| invalid())?;
            }
            "local_log_capacity" => {
                self.local_log_capacity = value.trim().parse().map_err(|_| invalid())?;
            }
            "log_filter" => self.log_filter = value.trim().to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Check invariants the rest of the client relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the poll interval or the log
    /// capacity is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Validation("poll interval must be non-zero"));
        }
        if self.local_log_capacity == 0 {
            return Err(ConfigError::Validation("log capacity must be non-zero"));
        }
        Ok(())
    }

    /// Refresh period.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }

    /// Delay of the refresh that follows test data generation.
    #[must_use]
    pub fn follow_up_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.follow_up_delay_ms))
    }

    /// Absolute or origin-relative URL for an API path such as `/api/status`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval_ms: 1000,
            follow_up_delay_ms: 100,
            local_log_capacity: 50,
            log_filter: "picoguard_app=info,picoguard_dashboard=info".to_string(),
        }
    }
}
