//! Request-level error taxonomy.
//!
//! Every error is local to the request that produced it; handlers return
//! `Result<_, RelayError>` and the `IntoResponse` impl maps each variant to its
//! status line. Upstream failures map to 502 on all three routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors a relay handler can produce.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Webhook route hit while the relay feature is disabled.
    #[error("webhook relay is disabled")]
    WebhookDisabled,

    /// Encoded path segment did not decode to a syntactically valid URL.
    #[error("invalid callback url")]
    InvalidCallbackUrl(#[from] crate::webhook::codec::DecodeError),

    /// Non-empty request body that is not valid JSON.
    #[error("invalid request body")]
    InvalidBody(#[source] serde_json::Error),

    /// `setWebhook` body without a string `url` field.
    #[error("missing webhook url")]
    MissingWebhookUrl,

    /// Inbound request carried no Host header to build the relay URL from.
    #[error("missing host header")]
    MissingHost,

    /// File path contained a traversal segment.
    #[error("invalid file path")]
    InvalidFilePath,

    /// Network-level failure talking to the upstream API.
    #[error("upstream request failed")]
    Upstream(#[from] reqwest::Error),
}

impl RelayError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::WebhookDisabled => StatusCode::FORBIDDEN,
            RelayError::InvalidCallbackUrl(_)
            | RelayError::InvalidBody(_)
            | RelayError::MissingWebhookUrl
            | RelayError::MissingHost
            | RelayError::InvalidFilePath => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Relay request failed");
        } else {
            tracing::warn!(error = %self, status = %status, "Relay request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
