//! Callback URL encoding for the webhook indirection.
//!
//! # Data Flow
//! ```text
//! setWebhook body url
//!     → codec.rs encode (base64)
//!     → embedded as /webhook/{encoded} path segment
//!
//! inbound /webhook/{encoded}
//!     → codec.rs decode (base64 → UTF-8 → Url)
//!     → forwarded callback target
//! ```

pub mod codec;

pub use codec::{decode_callback, encode_callback, DecodeError};
