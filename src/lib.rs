//! Telegram Bot API Relay Library

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod upstream;
pub mod webhook;

pub use config::schema::RelayConfig;
pub use error::RelayError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
