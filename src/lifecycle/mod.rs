//! Process lifecycle.
//!
//! The relay has no background tasks to drain; shutdown is a single broadcast
//! that stops the accept loop, letting in-flight handlers finish.

pub mod shutdown;

pub use shutdown::Shutdown;
