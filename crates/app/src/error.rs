//! Errors raised while talking to the bridge API.

/// Failure of a single request to the bridge.
///
/// All variants are transport-level: the request did not produce a usable
/// body. An application-level refusal (`success: false`) is not an error and
/// is carried by [`ActionOutcome`](picoguard_domain::action::ActionOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection dropped.
    #[error("request failed: {0}")]
    Transport(String),

    /// The bridge answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error text from the body, or the status line.
        message: String,
    },

    /// The body was not the JSON shape the endpoint documents.
    #[error("invalid response body: {0}")]
    Decode(String),
}
