//! TableSession - caller-owned state container for one table visit
//!
//! Owns the cart, the current order, and the split-payment ledger; at
//! most one of each is live at a time. Consumers hold a `&mut
//! TableSession` (handed down by whoever owns the session) instead of
//! reaching for a process-wide global.

use crate::cart::Cart;
use serde::{Deserialize, Serialize};
use shared::SessionError;
use shared::models::MenuItem;
use shared::order::{Contribution, Order, OrderStatus, SplitMode, SplitPayment};
use shared::order::snapshot::UNKNOWN_TABLE;
use uuid::Uuid;

/// State container for a single table session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSession {
    table_id: Option<String>,
    cart: Cart,
    current_order: Option<Order>,
    split_payment: Option<SplitPayment>,
}

impl TableSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Table binding
    // ------------------------------------------------------------------

    /// Bind the session to a table; any identifier is accepted
    pub fn set_table(&mut self, table_id: impl Into<String>) {
        let table_id = table_id.into();
        tracing::debug!(table_id, "table bound");
        self.table_id = Some(table_id);
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    pub fn add_item(&mut self, item: MenuItem) {
        tracing::trace!(item_id = %item.id, "cart add");
        self.cart.add_item(item);
    }

    pub fn remove_item(&mut self, item_id: &str) {
        tracing::trace!(item_id, "cart remove");
        self.cart.remove_item(item_id);
    }

    pub fn update_quantity(&mut self, item_id: &str, quantity: i32) {
        tracing::trace!(item_id, quantity, "cart quantity set");
        self.cart.update_quantity(item_id, quantity);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    pub fn item_count(&self) -> i32 {
        self.cart.item_count()
    }

    // ------------------------------------------------------------------
    // Order lifecycle
    // ------------------------------------------------------------------

    /// Snapshot the cart into a new pending order
    ///
    /// Captures the table id (or the "unknown" sentinel), a deep copy of
    /// the current lines, and the cart total at this instant. The cart is
    /// NOT cleared here; that happens at order completion. A session holds
    /// a single active order: calling again before the previous order
    /// completes replaces it.
    pub fn create_order(&mut self) -> Result<&Order, SessionError> {
        if self.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }
        if let Some(prev) = &self.current_order {
            tracing::warn!(order_id = %prev.id, "replacing unfinished order");
        }

        let order = Order::new(
            format!("order-{}", Uuid::new_v4()),
            self.table_id
                .clone()
                .unwrap_or_else(|| UNKNOWN_TABLE.to_string()),
            self.cart.lines().to_vec(),
            self.cart.total(),
        );
        tracing::info!(order_id = %order.id, total = order.total, "order created");
        Ok(self.current_order.insert(order))
    }

    /// Move the current order's status along the legal transition table
    ///
    /// With no current order this is a silent no-op, matching the rest of
    /// the operation surface; an illegal transition is rejected and
    /// leaves the order untouched.
    pub fn update_order_status(&mut self, status: OrderStatus) -> Result<(), SessionError> {
        let Some(order) = self.current_order.as_mut() else {
            tracing::debug!(?status, "status update with no active order ignored");
            return Ok(());
        };
        let from = order.status;
        order.transition_to(status)?;
        tracing::info!(order_id = %order.id, ?from, to = ?status, "order status updated");
        Ok(())
    }

    pub fn current_order(&self) -> Option<&Order> {
        self.current_order.as_ref()
    }

    // ------------------------------------------------------------------
    // Split-payment ledger
    // ------------------------------------------------------------------

    /// Open the split ledger for `order_id`, create-if-absent
    ///
    /// Re-entering with the id of the ledger that is already open (e.g.
    /// a friend following the share QR into the same flow) keeps the
    /// existing contribution log. A different order id replaces the
    /// ledger: there is at most one live bill per session.
    pub fn initialize_split_payment(
        &mut self,
        order_id: &str,
        total_amount: f64,
        mode: SplitMode,
    ) {
        let already_open = self
            .split_payment
            .as_ref()
            .is_some_and(|sp| sp.order_id() == order_id);
        if already_open {
            tracing::debug!(order_id, "split ledger already open, keeping contributions");
            return;
        }
        tracing::info!(order_id, total = total_amount, ?mode, "split ledger opened");
        self.split_payment = Some(SplitPayment::new(order_id, total_amount, mode));
    }

    /// Switch the split presentation mode; no-op when no ledger is open
    pub fn set_split_mode(&mut self, mode: SplitMode) {
        if let Some(split) = self.split_payment.as_mut() {
            split.set_mode(mode);
        }
    }

    /// Record a contribution against the open ledger
    ///
    /// The name must be non-blank and the amount positive. `amount` is
    /// expected to already be clamped to the remaining balance by the
    /// caller (`money::clamp_contribution`); the ledger records overshoot
    /// as handed in. With no open ledger this is a silent no-op.
    pub fn add_contribution(
        &mut self,
        name: &str,
        amount: f64,
        items: Option<Vec<String>>,
    ) -> Result<(), SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyContributorName);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(SessionError::InvalidContributionAmount(amount));
        }
        let Some(split) = self.split_payment.as_mut() else {
            tracing::debug!(contributor = name, "contribution with no open split ledger ignored");
            return Ok(());
        };

        split.record(Contribution::new(name, amount, items));
        tracing::info!(
            contributor = name,
            amount,
            paid = split.paid_amount(),
            remaining = split.remaining_amount(),
            "contribution recorded"
        );
        Ok(())
    }

    pub fn split_payment(&self) -> Option<&SplitPayment> {
        self.split_payment.as_ref()
    }

    /// Discard the split ledger
    pub fn clear_split_payment(&mut self) {
        self.split_payment = None;
    }

    // ------------------------------------------------------------------
    // Session reset
    // ------------------------------------------------------------------

    /// Discard cart, order, and ledger together (order completion or
    /// explicit reset); the table binding survives for the next round
    pub fn reset(&mut self) {
        tracing::info!("session reset");
        self.cart.clear();
        self.current_order = None;
        self.split_payment = None;
    }
}
