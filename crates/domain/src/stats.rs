//! Stats: device counters aggregated by the bridge.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Placeholder shown when the bridge has not recorded any update yet.
pub const NO_UPDATE: &str = "--";

/// Counters reported in `GET /api/events`. Replaced wholesale on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Number of lines received from the Pico.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_events: u64,
    /// Number of events classified as blocked.
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocked_devices: u64,
    /// Number of events classified as allowed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowed_devices: u64,
    /// Bridge-formatted time of the last counted event.
    #[serde(default)]
    pub last_update: Option<String>,
}

impl Stats {
    /// Last update time, or [`NO_UPDATE`] when none was recorded.
    #[must_use]
    pub fn last_update_label(&self) -> &str {
        self.last_update.as_deref().unwrap_or(NO_UPDATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_missing_counters_to_zero() {
        let stats: Stats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.last_update_label(), "--");
    }

    #[test]
    fn should_default_null_counters_to_zero() {
        let stats: Stats = serde_json::from_str(
            r#"{"total_events": null, "blocked_devices": 3, "allowed_devices": null, "last_update": null}"#,
        )
        .unwrap();
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.blocked_devices, 3);
        assert_eq!(stats.allowed_devices, 0);
        assert_eq!(stats.last_update, None);
    }

    #[test]
    fn should_expose_last_update_when_present() {
        let stats = Stats {
            last_update: Some("2024-05-01 13:37:00".to_string()),
            ..Stats::default()
        };
        assert_eq!(stats.last_update_label(), "2024-05-01 13:37:00");
    }
}
