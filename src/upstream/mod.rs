//! Outbound calls to the Bot API and webhook callback targets.
//!
//! # Responsibilities
//! - One HTTPS call per inbound request, no retries, no timeouts
//! - Method selection (GET without a body, POST with one)
//! - Fixed User-Agent; JSON content-type only when a body is sent
//! - Bot API and file URL construction from the configured base

pub mod client;

pub use client::UpstreamClient;
