//! Dashboard state: everything the view renders, mirrored from the bridge.

use picoguard_domain::stats::Stats;
use picoguard_domain::status::{ConnectionState, ConnectionStatus};

use crate::event_log::EventLog;

/// Contents of the `portInfo` panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PortPanel {
    /// No status response has been applied yet.
    #[default]
    Checking,
    /// The bridge host sees no serial ports.
    NoPorts,
    /// The bridge host sees at least one serial port.
    Ports {
        /// One `device - description` line per port, in bridge order.
        lines: Vec<String>,
        /// Port in use or preferred by the bridge.
        current: Option<String>,
    },
}

impl PortPanel {
    /// Build the panel from a status response.
    #[must_use]
    pub fn from_status(status: &ConnectionStatus) -> Self {
        if status.available_ports.is_empty() {
            return Self::NoPorts;
        }
        Self::Ports {
            lines: status
                .available_ports
                .iter()
                .map(picoguard_domain::status::SerialPortInfo::summary)
                .collect(),
            current: status.port.clone(),
        }
    }
}

/// Full dashboard view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    /// Status indicator and connect/disconnect enablement.
    pub connection: ConnectionState,
    /// Serial port panel.
    pub ports: PortPanel,
    /// Counters from the last applied events poll.
    pub stats: Stats,
    /// Rendered event log.
    pub log: EventLog,
}

impl DashboardState {
    /// Initial state: disconnected, no data, waiting placeholder in the log.
    #[must_use]
    pub fn new(local_log_capacity: usize) -> Self {
        Self {
            connection: ConnectionState::Disconnected,
            ports: PortPanel::Checking,
            stats: Stats::default(),
            log: EventLog::new(local_log_capacity),
        }
    }

    /// Apply a status response wholesale.
    pub fn apply_status(&mut self, status: &ConnectionStatus) {
        self.connection = status.state();
        self.ports = PortPanel::from_status(status);
    }
}
