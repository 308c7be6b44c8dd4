//! Order snapshot - immutable checkout record
//!
//! An order owns a frozen copy of the cart lines and the total computed
//! at checkout time; later cart mutations never touch it.

use super::line::CartLine;
use crate::error::SessionError;
use serde::{Deserialize, Serialize};

/// Sentinel table id used when checkout happens with no table bound
pub const UNKNOWN_TABLE: &str = "unknown";

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Paid,
}

impl OrderStatus {
    /// Legal forward transitions: Pending -> Confirmed, Confirmed -> Paid,
    /// Pending -> Paid. Paid is terminal.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Confirmed)
                | (OrderStatus::Pending, OrderStatus::Paid)
                | (OrderStatus::Confirmed, OrderStatus::Paid)
        )
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Paid
    }
}

/// Order - immutable snapshot taken at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Generated id (e.g. "order-<uuid>")
    pub id: String,
    /// Table the session was bound to, or [`UNKNOWN_TABLE`]
    pub table_id: String,
    /// Frozen copy of the cart lines at checkout time
    pub lines: Vec<CartLine>,
    /// Total computed at snapshot time; never recomputed afterwards
    pub total: f64,
    pub status: OrderStatus,
    /// Creation timestamp (epoch millis)
    pub created_at: i64,
}

impl Order {
    /// New pending order stamped with the current time
    pub fn new(id: String, table_id: String, lines: Vec<CartLine>, total: f64) -> Self {
        Self {
            id,
            table_id,
            lines,
            total,
            status: OrderStatus::Pending,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Move to `next`, rejecting transitions outside the legal table
    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), SessionError> {
        if !self.status.can_transition_to(next) {
            return Err(SessionError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Simulated payment-gateway URL for the pay-in-full QR
    pub fn payment_url(&self) -> String {
        format!("https://qresto.pay/order/{}?amount={}", self.id, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_order() -> Order {
        Order::new(
            "order-1".to_string(),
            "table-001".to_string(),
            Vec::new(),
            500.0,
        )
    }

    #[test]
    fn test_legal_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Paid));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Paid));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::Confirmed));
        assert!(!OrderStatus::Confirmed.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn test_transition_to_rejects_and_leaves_status_unchanged() {
        let mut order = pending_order();
        order.transition_to(OrderStatus::Paid).unwrap();

        let err = order.transition_to(OrderStatus::Pending).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidStatusTransition {
                from: OrderStatus::Paid,
                to: OrderStatus::Pending,
            }
        );
        assert_eq!(order.status, OrderStatus::Paid);
    }

    #[test]
    fn test_two_step_path() {
        let mut order = pending_order();
        order.transition_to(OrderStatus::Confirmed).unwrap();
        order.transition_to(OrderStatus::Paid).unwrap();
        assert!(order.is_paid());
        assert!(order.status.is_terminal());
    }

    #[test]
    fn test_payment_url_carries_id_and_amount() {
        let order = pending_order();
        assert_eq!(
            order.payment_url(),
            "https://qresto.pay/order/order-1?amount=500"
        );
    }
}
