//! Connection status: whether the bridge holds an open serial link to the Pico.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Binary connection state shown by the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    Connected,
    #[default]
    Disconnected,
}

impl ConnectionState {
    /// Whether the bridge currently holds the serial link.
    #[must_use]
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Human-readable label for the status text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }

    /// Style token appended to the status dot's class list.
    #[must_use]
    pub fn style_token(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }

    /// The connect action is offered only while disconnected.
    #[must_use]
    pub fn can_connect(self) -> bool {
        !self.is_connected()
    }

    /// The disconnect action is offered only while connected.
    #[must_use]
    pub fn can_disconnect(self) -> bool {
        self.is_connected()
    }
}

impl From<bool> for ConnectionState {
    fn from(connected: bool) -> Self {
        if connected {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A serial port visible to the bridge host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialPortInfo {
    /// OS device path (`/dev/ttyACM0`, `COM3`, ...).
    pub device: String,
    /// Free-form description reported by the OS, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Hardware id string (VID:PID and serial number), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hwid: Option<String>,
}

impl SerialPortInfo {
    /// Description, or `"Unknown"` when the OS did not report one.
    #[must_use]
    pub fn description_or_unknown(&self) -> &str {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => desc,
            _ => "Unknown",
        }
    }

    /// One-line summary: `device - description`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - {}", self.device, self.description_or_unknown())
    }
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionStatus {
    /// Whether the bridge holds an open serial link.
    #[serde(default, deserialize_with = "null_as_default")]
    pub connected: bool,
    /// The port in use, or the one the bridge would pick.
    #[serde(default)]
    pub port: Option<String>,
    /// Every serial port the bridge host can see, in OS order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_ports: Vec<SerialPortInfo>,
}

impl ConnectionStatus {
    /// The connection state carried by this status.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        ConnectionState::from(self.connected)
    }
}
