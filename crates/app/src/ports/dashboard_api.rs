//! Bridge API port: the `/api/*` endpoints exposed by the Pico bridge.

use std::future::Future;
use std::rc::Rc;

use picoguard_domain::action::ActionOutcome;
use picoguard_domain::event::EventsSnapshot;
use picoguard_domain::status::ConnectionStatus;

use crate::error::ApiError;

/// Client for the bridge's HTTP API.
///
/// Every method issues exactly one request. Implementations must not retry.
pub trait DashboardApi {
    /// `GET /api/status`.
    fn fetch_status(&self) -> impl Future<Output = Result<ConnectionStatus, ApiError>>;

    /// `GET /api/events`.
    fn fetch_events(&self) -> impl Future<Output = Result<EventsSnapshot, ApiError>>;

    /// `POST /api/connect`.
    fn connect(&self) -> impl Future<Output = Result<ActionOutcome, ApiError>>;

    /// `POST /api/disconnect`.
    fn disconnect(&self) -> impl Future<Output = Result<ActionOutcome, ApiError>>;

    /// `POST /api/test_data`.
    fn generate_test_data(&self) -> impl Future<Output = Result<ActionOutcome, ApiError>>;

    /// `POST /api/send_command` with `{"command": command}`.
    fn send_command(
        &self,
        command: &str,
    ) -> impl Future<Output = Result<ActionOutcome, ApiError>>;
}

impl<T: DashboardApi> DashboardApi for Rc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<ConnectionStatus, ApiError>> {
        (**self).fetch_status()
    }

    fn fetch_events(&self) -> impl Future<Output = Result<EventsSnapshot, ApiError>> {
        (**self).fetch_events()
    }

    fn connect(&self) -> impl Future<Output = Result<ActionOutcome, ApiError>> {
        (**self).connect()
    }

    fn disconnect(&self) -> impl Future<Output = Result<ActionOutcome, ApiError>> {
        (**self).disconnect()
    }

    fn generate_test_data(&self) -> impl Future<Output = Result<ActionOutcome, ApiError>> {
        (**self).generate_test_data()
    }

    fn send_command(
        &self,
        command: &str,
    ) -> impl Future<Output = Result<ActionOutcome, ApiError>> {
        (**self).send_command(command)
    }
}
