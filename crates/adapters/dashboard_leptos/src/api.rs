//! HTTP API client wrapping `gloo-net` for calls to the bridge's `/api/*`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use picoguard_app::config::DashboardConfig;
use picoguard_app::error::ApiError;
use picoguard_app::ports::DashboardApi;
use picoguard_domain::action::{ActionOutcome, CommandRequest};
use picoguard_domain::event::EventsSnapshot;
use picoguard_domain::status::ConnectionStatus;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const STATUS: &str = "/api/status";
const EVENTS: &str = "/api/events";
const CONNECT: &str = "/api/connect";
const DISCONNECT: &str = "/api/disconnect";
const TEST_DATA: &str = "/api/test_data";
const SEND_COMMAND: &str = "/api/send_command";

/// Body of the POST endpoints that take no parameters: `{}`.
#[derive(Serialize)]
struct EmptyBody {}

/// JSON error body returned by the bridge on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn api_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => resp.status_text(),
    };
    Err(ApiError::Status { status, message })
}

/// [`DashboardApi`] over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    config: DashboardConfig,
}

impl HttpDashboardApi {
    /// Build a client resolving paths against `config.api_base`.
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::get(&self.config.url(path))
            .send()
            .await
            .map_err(api_error)?;
        check_response(resp).await?.json().await.map_err(api_error)
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: B,
    ) -> Result<ActionOutcome, ApiError> {
        let resp = Request::post(&self.config.url(path))
            .json(&body)
            .map_err(api_error)?
            .send()
            .await
            .map_err(api_error)?;
        check_response(resp).await?.json().await.map_err(api_error)
    }
}

impl DashboardApi for HttpDashboardApi {
    fn fetch_status(&self) -> impl Future<Output = Result<ConnectionStatus, ApiError>> {
        self.get_json(STATUS)
    }

    fn fetch_events(&self) -> impl Future<Output = Result<EventsSnapshot, ApiError>> {
        self.get_json(EVENTS)
    }

    fn connect(&self) -> impl Future<Output = Result<ActionOutcome, ApiError>> {
        self.post_json(CONNECT, EmptyBody {})
    }

    fn disconnect(&self) -> impl Future<Output = Result<ActionOutcome, ApiError>> {
        self.post_json(DISCONNECT, EmptyBody {})
    }

    fn generate_test_data(&self) -> impl Future<Output = Result<ActionOutcome, ApiError>> {
        self.post_json(TEST_DATA, EmptyBody {})
    }

    fn send_command(
        &self,
        command: &str,
    ) -> impl Future<Output = Result<ActionOutcome, ApiError>> {
        self.post_json(
            SEND_COMMAND,
            CommandRequest {
                command: command.to_string(),
            },
        )
    }
}
