//! Table-session state engine for the qresto demo ordering flow
//!
//! A single in-memory [`TableSession`] owns the cart, the current order,
//! and the split-payment ledger for one table visit. View layers hold a
//! `&mut TableSession` and poll derived reads on every render; nothing is
//! pushed. There is no persistence and no cross-device sync: the session
//! ends when its owner drops it.
//!
//! # Flow
//!
//! ```text
//! resolve_table -> set_table -> add_item* -> create_order
//!     -> pay in full            (update_order_status(Paid))
//!     -> or split the bill      (initialize_split_payment
//!                                -> add_contribution* -> is_fully_paid)
//! -> reset
//! ```

pub mod cart;
pub mod catalog;
pub mod session;
pub mod tables;

// Re-exports
pub use cart::Cart;
pub use session::TableSession;

// Re-export shared types for convenience
pub use shared::SessionError;
pub use shared::money;
pub use shared::order::{CartLine, Contribution, Order, OrderStatus, SplitMode, SplitPayment};
