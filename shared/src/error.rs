//! Session error types

use crate::order::OrderStatus;
use thiserror::Error;

/// Errors raised by the session engine
///
/// Most cart operations are total functions and cannot fail; the variants
/// here cover checkout on an empty cart, order status transitions outside
/// the legal table, and contribution inputs the ledger must not record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Illegal order status transition: {from:?} -> {to:?}")]
    InvalidStatusTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Contributor name must not be empty")]
    EmptyContributorName,

    #[error("Contribution amount must be positive, got {0}")]
    InvalidContributionAmount(f64),
}
