//! Order and split-payment types
//!
//! - **line**: a menu item plus quantity inside a cart or order snapshot
//! - **snapshot**: the immutable order record frozen at checkout
//! - **split**: the append-only split-payment ledger over one order

pub mod line;
pub mod snapshot;
pub mod split;

// Re-exports
pub use line::CartLine;
pub use snapshot::{Order, OrderStatus};
pub use split::{Contribution, SplitMode, SplitPayment};
