//! Client-observable error taxonomy for the backend boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every REST helper returns `Result<_, ApiError>`. Validation failures
//! (empty input, unsupported files) are rejected before a request is built
//! and never appear here. Errors are converted to user-facing text at the
//! view layer; they are never allowed to propagate as panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of one backend exchange.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed: network unreachable, CORS rejection, or
    /// timeout.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Human-readable message, from the error body when one was present.
        message: String,
    },
    /// A 2xx body did not match the expected schema. Treated the same as a
    /// backend failure by callers.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a non-2xx response.
    ///
    /// Error bodies are not contractually structured; the only field read is
    /// an optional human-readable `message`, with the raw status as fallback.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::Status { status, message }
    }
}
