//! Shared types for the qresto table-session engine
//!
//! Plain data types used by the session engine and its consumers:
//! catalog models, order snapshot types, split-payment ledger types,
//! decimal money helpers, and the engine error type.

pub mod error;
pub mod models;
pub mod money;
pub mod order;

// Re-exports
pub use error::SessionError;
pub use serde::{Deserialize, Serialize};
