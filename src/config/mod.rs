//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → passed into HttpServer at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the webhook toggle is fixed at startup
//! - All fields have defaults so an empty (or absent) config file works
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ListenerConfig;
pub use schema::RelayConfig;
pub use schema::UpstreamConfig;
pub use schema::WebhookConfig;
