//! Base64 codec for callback URLs carried as path segments.
//!
//! # Design Decisions
//! - Standard alphabet with padding, matching what callers already registered
//! - Decoding validates the payload is a syntactically valid URL; that check is
//!   the only gate on what the webhook route will forward to

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use url::Url;

/// Failure to turn an encoded path segment back into a URL.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("decoded string is not a URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Encode a callback URL string for use as a path segment.
pub fn encode_callback(url: &str) -> String {
    B64.encode(url)
}

/// Decode a path segment back into the callback URL it embeds.
pub fn decode_callback(encoded: &str) -> Result<Url, DecodeError> {
    let bytes = B64.decode(encoded)?;
    let text = String::from_utf8(bytes)?;
    Ok(Url::parse(&text)?)
}
