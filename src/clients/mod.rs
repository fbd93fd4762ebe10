//! External service clients.
//!
//! Each client module defines a trait for the operations the notifier
//! consumes plus the concrete implementation, so tests can substitute mocks
//! at the seam.

pub mod slack_client;
pub mod thread_store;
