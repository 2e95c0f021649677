//! Action outcomes: bodies returned by the bridge's POST endpoints.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Body of `POST /api/connect`, `/api/disconnect`, `/api/test_data` and
/// `/api/send_command`.
///
/// A missing or null `success` counts as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionOutcome {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    /// Connection flag echoed by connect/disconnect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    /// Informational text (test data generation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure reason (command sending).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionOutcome {
    /// A successful outcome with no extra fields.
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// A failed outcome with no extra fields.
    #[must_use]
    pub fn failed() -> Self {
        Self::default()
    }
}

/// Body of `POST /api/send_command`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Line written to the Pico, without the trailing newline.
    pub command: String,
}
