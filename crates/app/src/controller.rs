//! Dashboard page controller: one operation per poll or operator action.
//!
//! Operations never return errors. Each catches its own failure and either
//! degrades silently (polls, disconnect) or alerts the operator (connect,
//! test data, send command). A failure never affects another operation or
//! the poller.

use std::time::Duration;

use picoguard_domain::event::{EventKind, EventRecord};
use picoguard_domain::status::ConnectionState;

use crate::config::DashboardConfig;
use crate::ports::{DashboardApi, Notifier, StateStore};
use crate::sequencer::{Endpoint, RequestSequencer, Ticket};

/// Local record appended after a successful connect.
pub const CONNECTED_MESSAGE: &str = "Connected to Raspberry Pi Pico";
/// Local record appended after a successful disconnect.
pub const DISCONNECTED_MESSAGE: &str = "Disconnected from Raspberry Pi Pico";
/// Local record appended after test data generation.
pub const TEST_DATA_MESSAGE: &str = "Test data generated - check the event log";

/// Alert shown when the bridge refuses to connect.
pub const CONNECT_REFUSED_ALERT: &str = "Failed to connect to Pico. Make sure it is plugged in.";
/// Alert shown when the connect request itself fails.
pub const CONNECT_ERROR_ALERT: &str = "Error connecting to Pico";
/// Alert shown when the bridge refuses to generate test data.
pub const TEST_DATA_REFUSED_ALERT: &str = "Failed to generate test data";
/// Alert shown when the test data request itself fails.
pub const TEST_DATA_ERROR_ALERT: &str = "Error generating test data";
/// Alert shown when the bridge refuses a command without saying why.
pub const COMMAND_REFUSED_ALERT: &str = "Failed to send command";
/// Alert shown when the command request itself fails.
pub const COMMAND_ERROR_ALERT: &str = "Error sending command";

/// Work the caller should schedule once an operation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Nothing to do.
    None,
    /// Run [`DashboardController::update_dashboard`] after `after`.
    Refresh { after: Duration },
}

/// Page controller owning the client state of the dashboard.
pub struct DashboardController<A, N, S> {
    api: A,
    notifier: N,
    store: S,
    sequencer: RequestSequencer,
    config: DashboardConfig,
}

impl<A, N, S> DashboardController<A, N, S>
where
    A: DashboardApi,
    N: Notifier,
    S: StateStore,
{
    /// Create a controller. `store` should already hold the initial state.
    pub fn new(api: A, notifier: N, store: S, config: DashboardConfig) -> Self {
        Self {
            api,
            notifier,
            store,
            sequencer: RequestSequencer::new(),
            config,
        }
    }

    /// Configuration the controller was built with.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The state store the controller writes to.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn is_stale(&self, ticket: Ticket) -> bool {
        let stale = !self.sequencer.is_latest(ticket);
        if stale {
            tracing::debug!(
                endpoint = %ticket.endpoint(),
                seq = ticket.seq(),
                "discarding superseded response"
            );
        }
        stale
    }

    fn push_local(&self, message: &str) {
        let record = EventRecord::now(EventKind::Info, message);
        self.store.update(|state| state.log.push_local(record));
    }

    /// Set the connection state after an explicit action and discard any
    /// status response still in flight, since it predates the action.
    fn set_connection(&self, connection: ConnectionState) {
        self.sequencer.issue(Endpoint::Status);
        self.store.update(|state| state.connection = connection);
    }

    /// Refresh the status indicator and the port panel.
    ///
    /// Fails closed: when the request fails the dashboard shows
    /// disconnected and the port panel keeps its previous content.
    #[tracing::instrument(skip(self))]
    pub async fn check_status(&self) {
        let ticket = self.sequencer.issue(Endpoint::Status);
        let result = self.api.fetch_status().await;
        if self.is_stale(ticket) {
            return;
        }
        match result {
            Ok(status) => {
                tracing::debug!(
                    connected = status.connected,
                    ports = status.available_ports.len(),
                    "status applied"
                );
                self.store.update(|state| state.apply_status(&status));
            }
            Err(err) => {
                tracing::warn!(%err, "failed to check status");
                self.store
                    .update(|state| state.connection = ConnectionState::Disconnected);
            }
        }
    }

    /// Refresh the counters, then replace the event log with the bridge's list.
    #[tracing::instrument(skip(self))]
    pub async fn update_dashboard(&self) {
        let ticket = self.sequencer.issue(Endpoint::Events);
        let result = self.api.fetch_events().await;
        if self.is_stale(ticket) {
            return;
        }
        match result {
            Ok(snapshot) => {
                tracing::debug!(events = snapshot.events.len(), "dashboard applied");
                self.store.update(|state| {
                    state.stats = snapshot.stats;
                    state.log.replace_from_server(snapshot.events);
                });
            }
            Err(err) => tracing::warn!(%err, "failed to update dashboard"),
        }
    }

    /// Ask the bridge to open the serial link.
    #[tracing::instrument(skip(self))]
    pub async fn connect(&self) {
        match self.api.connect().await {
            Ok(outcome) if outcome.success => {
                self.set_connection(ConnectionState::Connected);
                self.push_local(CONNECTED_MESSAGE);
            }
            Ok(_) => {
                tracing::warn!("bridge refused to connect");
                self.notifier.alert(CONNECT_REFUSED_ALERT);
            }
            Err(err) => {
                tracing::warn!(%err, "failed to connect");
                self.notifier.alert(CONNECT_ERROR_ALERT);
            }
        }
    }

    /// Ask the bridge to close the serial link. Failures are not surfaced.
    #[tracing::instrument(skip(self))]
    pub async fn disconnect(&self) {
        match self.api.disconnect().await {
            Ok(outcome) if outcome.success => {
                self.set_connection(ConnectionState::Disconnected);
                self.push_local(DISCONNECTED_MESSAGE);
            }
            Ok(_) => tracing::warn!("bridge refused to disconnect"),
            Err(err) => tracing::warn!(%err, "failed to disconnect"),
        }
    }

    /// Ask the bridge to inject a batch of synthetic events.
    ///
    /// On success the caller should refresh the dashboard after the returned
    /// delay so the new events show up before the next regular tick.
    #[tracing::instrument(skip(self))]
    pub async fn generate_test_data(&self) -> FollowUp {
        match self.api.generate_test_data().await {
            Ok(outcome) if outcome.success => {
                self.push_local(TEST_DATA_MESSAGE);
                FollowUp::Refresh {
                    after: self.config.follow_up_delay(),
                }
            }
            Ok(_) => {
                tracing::warn!("bridge refused to generate test data");
                self.notifier.alert(TEST_DATA_REFUSED_ALERT);
                FollowUp::None
            }
            Err(err) => {
                tracing::warn!(%err, "failed to generate test data");
                self.notifier.alert(TEST_DATA_ERROR_ALERT);
                FollowUp::None
            }
        }
    }

    /// Forward a command line to the Pico through the bridge.
    ///
    /// Blank commands are ignored without a request. Returns `true` when the
    /// bridge accepted the command.
    #[tracing::instrument(skip(self))]
    pub async fn send_command(&self, command: &str) -> bool {
        let command = command.trim();
        if command.is_empty() {
            return false;
        }
        match self.api.send_command(command).await {
            Ok(outcome) if outcome.success => {
                self.push_local(&format!("Sent command: {command}"));
                true
            }
            Ok(outcome) => {
                let reason = outcome.error.as_deref().unwrap_or(COMMAND_REFUSED_ALERT);
                tracing::warn!(%reason, "bridge refused command");
                self.notifier.alert(reason);
                false
            }
            Err(err) => {
                tracing::warn!(%err, "failed to send command");
                self.notifier.alert(COMMAND_ERROR_ALERT);
                false
            }
        }
    }

    /// Replace the visible log with the "cleared" placeholder.
    ///
    /// Local only: the next applied dashboard refresh restores the bridge's
    /// list.
    pub fn clear_logs(&self) {
        self.store.update(|state| state.log.clear());
    }
}
