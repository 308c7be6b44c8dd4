//! Split-payment ledger
//!
//! One ledger per order. The contribution log is append-only and the
//! backing field is private: `paid_amount` and friends exist only as
//! derived reads over the log, so they can never drift from it.

use crate::money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the bill is being divided on the split screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SplitMode {
    /// Equal share per person
    #[default]
    Even,
    /// Each contributor pays for the lines they pick
    Itemized,
}

/// One named payer's recorded amount within a split-payment ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contribution {
    pub name: String,
    pub amount: f64,
    /// Item names this contribution covers (itemized mode, informational)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    /// Recording timestamp (epoch millis)
    pub timestamp: i64,
}

impl Contribution {
    pub fn new(name: impl Into<String>, amount: f64, items: Option<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            amount,
            items,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Split-payment ledger over exactly one order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitPayment {
    order_id: String,
    /// Copied from the order once; immutable thereafter
    total_amount: f64,
    mode: SplitMode,
    contributions: Vec<Contribution>,
}

impl SplitPayment {
    pub fn new(order_id: impl Into<String>, total_amount: f64, mode: SplitMode) -> Self {
        Self {
            order_id: order_id.into(),
            total_amount,
            mode,
            contributions: Vec::new(),
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    /// Switch the presentation mode; recorded contributions keep their
    /// amounts
    pub fn set_mode(&mut self, mode: SplitMode) {
        self.mode = mode;
    }

    /// Append a contribution to the log
    ///
    /// The log is append-only; there is no edit or removal path. Amount
    /// clamping against the remaining balance is the caller's job
    /// (`money::clamp_contribution`); the ledger records overshoot as
    /// handed in.
    pub fn record(&mut self, contribution: Contribution) {
        self.contributions.push(contribution);
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// Sum over the contribution log (derived, never stored)
    pub fn paid_amount(&self) -> f64 {
        money::sum_contributions(&self.contributions)
    }

    /// Outstanding balance, clamped to zero
    pub fn remaining_amount(&self) -> f64 {
        money::to_f64(
            (money::to_decimal(self.total_amount) - money::to_decimal(self.paid_amount()))
                .max(rust_decimal::Decimal::ZERO),
        )
    }

    /// Fully paid once the log covers the total (within money tolerance)
    pub fn is_fully_paid(&self) -> bool {
        money::is_payment_sufficient(self.paid_amount(), self.total_amount)
    }

    /// Item names already covered by recorded contributions
    ///
    /// The ledger does not reject a line claimed twice across
    /// contributors; this set is the hook a stricter mode would check
    /// before recording.
    pub fn claimed_items(&self) -> HashSet<String> {
        self.contributions
            .iter()
            .filter_map(|c| c.items.as_ref())
            .flatten()
            .cloned()
            .collect()
    }

    /// Path a friend's phone lands on after scanning the share QR
    pub fn share_path(&self) -> String {
        format!("/split?orderId={}", self.order_id)
    }
}
