//! Event: a line from the Pico, classified by the bridge, or a record
//! synthesized locally in response to an operator action.

use serde::{Deserialize, Deserializer, Serialize};

use crate::de::null_as_default;
use crate::stats::Stats;
use crate::time;

/// Timestamp shown on placeholder records.
pub const NO_TIMESTAMP: &str = "--";

/// Closed set of event kinds. Used only to pick a style token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    #[default]
    Info,
    Warning,
    Error,
    Blocked,
    Allowed,
    /// Any kind the bridge sends that this client does not know about.
    Other,
}

impl EventKind {
    /// Style token appended to the log entry's class list.
    #[must_use]
    pub fn style_token(self) -> &'static str {
        match self {
            Self::Info | Self::Other => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Blocked => "blocked",
            Self::Allowed => "allowed",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Other => "other",
            known => known.style_token(),
        }
    }
}

impl From<&str> for EventKind {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "info" => Self::Info,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "blocked" => Self::Blocked,
            "allowed" => Self::Allowed,
            _ => Self::Other,
        }
    }
}

impl From<String> for EventKind {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Deserialize an event kind the bridge may send as `null`, treating it as
/// an unknown kind.
fn null_as_other<'de, D>(deserializer: D) -> Result<EventKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map_or(EventKind::Other, EventKind::from))
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Display timestamp, already formatted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    /// Classification, used for styling only.
    #[serde(rename = "type", default, deserialize_with = "null_as_other")]
    pub kind: EventKind,
    /// Raw message text. Always rendered as text, never as markup.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl EventRecord {
    /// Build a record with an explicit timestamp.
    pub fn new(kind: EventKind, message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            kind,
            message: message.into(),
        }
    }

    /// Build a record stamped with the current local time.
    pub fn now(kind: EventKind, message: impl Into<String>) -> Self {
        Self::new(kind, message, time::display(&time::now()))
    }

    /// Build an untimed info record used as a stand-in for an empty log.
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self::new(EventKind::Info, message, NO_TIMESTAMP)
    }
}

/// Body of `GET /api/events`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventsSnapshot {
    /// Counters, replaced wholesale.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Stats,
    /// Recent events, oldest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<EventRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_known_kinds_to_their_style_token() {
        assert_eq!(EventKind::from("info").style_token(), "info");
        assert_eq!(EventKind::from("warning").style_token(), "warning");
        assert_eq!(EventKind::from("error").style_token(), "error");
        assert_eq!(EventKind::from("blocked").style_token(), "blocked");
        assert_eq!(EventKind::from("ALLOWED").style_token(), "allowed");
    }

    #[test]
    fn should_style_unknown_kinds_as_info() {
        let kind = EventKind::from("quarantined");
        assert_eq!(kind, EventKind::Other);
        assert_eq!(kind.style_token(), "info");
    }

    #[test]
    fn should_deserialize_record_with_type_field() {
        let record: EventRecord = serde_json::from_str(
            r#"{"timestamp": "2024-05-01 13:37:00", "type": "blocked", "message": "BLOCKED: HID"}"#,
        )
        .unwrap();
        assert_eq!(record.kind, EventKind::Blocked);
        assert_eq!(record.message, "BLOCKED: HID");
    }

    #[test]
    fn should_serialize_kind_as_lowercase_string() {
        let record = EventRecord::new(EventKind::Allowed, "ok", "t");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "allowed");
    }

    #[test]
    fn should_stamp_placeholder_with_dashes() {
        let record = EventRecord::placeholder("Logs cleared");
        assert_eq!(record.timestamp, "--");
        assert_eq!(record.kind, EventKind::Info);
    }

    #[test]
    fn should_stamp_local_record_with_current_time() {
        let record = EventRecord::now(EventKind::Info, "hello");
        assert_eq!(record.timestamp.len(), "2024-05-01 13:37:00".len());
    }

    #[test]
    fn should_deserialize_snapshot_with_missing_parts() {
        let snapshot: EventsSnapshot = serde_json::from_str(r#"{"stats": {}}"#).unwrap();
        assert!(snapshot.events.is_empty());
        assert_eq!(snapshot.stats.total_events, 0);

        let empty: EventsSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EventsSnapshot::default());
    }

    #[test]
    fn should_default_null_event_fields() {
        let snapshot: EventsSnapshot = serde_json::from_str(
            r#"{"stats": {"total_events": 4}, "events": [{"timestamp": null, "type": null, "message": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.stats.total_events, 4);
        assert_eq!(
            snapshot.events,
            vec![EventRecord::new(EventKind::Other, "x", "")]
        );
        assert_eq!(snapshot.events[0].kind.style_token(), "info");

        let snapshot: EventsSnapshot = serde_json::from_str(
            r#"{"stats": {"total_events": 4}, "events": [{"timestamp": "t", "type": "blocked", "message": null}]}"#,
        )
        .unwrap();
        assert_eq!(
            snapshot.events,
            vec![EventRecord::new(EventKind::Blocked, "", "t")]
        );
    }
}
