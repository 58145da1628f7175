//! HTTP ingress subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing, graceful shutdown)
//!     → handlers.rs (one handler per route shape)
//!     → upstream client call
//!     → response relayed to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
