//! Route handlers for the three relay shapes.
//!
//! # Responsibilities
//! - `/webhook/{encoded}`: decode the callback URL and relay the body to it
//! - `/bot{token}/{method}`: relay Bot API calls, rewriting `setWebhook` when the
//!   relay feature is enabled
//! - `/file/{token}/{*path}`: relay file downloads, content-type aware
//!
//! Each handler performs exactly one outbound call and writes its own response;
//! there is no shared mutable state between requests.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

use crate::error::RelayError;
use crate::http::server::AppState;
use crate::webhook::codec;

/// Parse an inbound body: empty means no body, anything else must be JSON.
fn parse_json_body(body: &Bytes) -> Result<Option<Value>, RelayError> {
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(RelayError::InvalidBody)
}

/// `ALL /webhook/{encoded}` — relay a webhook delivery to the encoded URL.
pub async fn relay_webhook(
    State(state): State<AppState>,
    Path(encoded): Path<String>,
    body: Bytes,
) -> Result<Response, RelayError> {
    if !state.webhook.relay_enabled {
        return Err(RelayError::WebhookDisabled);
    }

    let target = codec::decode_callback(&encoded)?;
    let json = parse_json_body(&body)?;

    tracing::debug!(target = %target, "Relaying webhook callback");
    let text = state
        .upstream
        .fetch_text(target, json.as_ref())
        .await?;
    Ok(text.into_response())
}

/// `ALL /bot{token}/{method}` — relay a Bot API call.
///
/// Axum cannot capture `bot{token}` as a partial segment, so the route matches
/// `/{token}/{method}` and the handler requires the `bot` prefix itself.
pub async fn relay_api(
    State(state): State<AppState>,
    Path((token_segment, method)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    let Some(token) = token_segment.strip_prefix("bot") else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let json = parse_json_body(&body)?;

    if method.to_lowercase() == "setwebhook" && state.webhook.relay_enabled {
        return set_webhook_indirect(&state, token, json, &headers).await;
    }

    tracing::debug!(method = %method, "Relaying Bot API call");
    let text = state.upstream.api_request(token, &method, json.as_ref()).await?;
    Ok(text.into_response())
}

/// Substitute a self-referential `/webhook/{encoded}` URL for the caller's URL,
/// so future webhook deliveries route back through this relay.
async fn set_webhook_indirect(
    state: &AppState,
    token: &str,
    body: Option<Value>,
    headers: &HeaderMap,
) -> Result<Response, RelayError> {
    let callback = body
        .as_ref()
        .and_then(|b| b.get("url"))
        .and_then(Value::as_str)
        .ok_or(RelayError::MissingWebhookUrl)?;

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .ok_or(RelayError::MissingHost)?;

    let relay_url = format!(
        "{}://{}/webhook/{}",
        state.webhook.public_scheme,
        host,
        codec::encode_callback(callback)
    );

    tracing::debug!(callback = callback, relay_url = %relay_url, "Rewriting setWebhook target");
    let text = state
        .upstream
        .api_request(token, "setWebhook", Some(&json!({ "url": relay_url })))
        .await?;
    Ok(text.into_response())
}

/// `GET /file/{token}/{*path}` — relay a file download.
pub async fn relay_file(
    State(state): State<AppState>,
    Path((token, path)): Path<(String, String)>,
) -> Result<Response, RelayError> {
    // The trailing capture is rejoined verbatim into the outbound URL, so
    // traversal segments must not pass through.
    if path.split('/').any(|segment| segment == "..") {
        return Err(RelayError::InvalidFilePath);
    }

    let url = state.upstream.file_url(&token, &path);
    tracing::debug!(url = %url, "Relaying file fetch");

    let (payload, content_type) = state.upstream.fetch_with_content_type(url).await?;
    let content_type =
        content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    if content_type.to_lowercase().contains("application/json") {
        let text = String::from_utf8_lossy(&payload).into_owned();
        Ok(([(header::CONTENT_TYPE, content_type)], text).into_response())
    } else {
        Ok((
            [
                (header::CONTENT_TYPE, content_type),
                (header::CONTENT_DISPOSITION, "attachment".to_string()),
            ],
            payload,
        )
            .into_response())
    }
}
