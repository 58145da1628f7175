//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream Bot API settings.
    pub upstream: UpstreamConfig,

    /// Webhook relay settings.
    pub webhook: WebhookConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Upstream Bot API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org").
    /// Overridable so tests can point the relay at a local mock.
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.telegram.org".to_string(),
        }
    }
}

/// Webhook relay configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Enable the webhook relay indirection. When disabled, `/webhook/*` returns
    /// 403 and `setWebhook` calls pass through unmodified.
    pub relay_enabled: bool,

    /// Scheme used when building the self-referential relay URL. The relay
    /// terminates no TLS itself, so this reflects what sits in front of it.
    pub public_scheme: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            relay_enabled: false,
            public_scheme: "http".to_string(),
        }
    }
}
