//! Money calculation utilities using rust_decimal for precision
//!
//! All totals, shares, and remaining balances are computed with `Decimal`
//! internally and converted back to `f64` for storage/serialization,
//! rounded to 2 decimal places half-up.

use crate::order::{CartLine, Contribution};
use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Minimum party size for an even split; the split screen never offers
/// fewer than two people.
pub const MIN_SPLIT_PEOPLE: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total for a single cart line: unit price * quantity
pub fn line_total(line: &CartLine) -> Decimal {
    to_decimal(line.item.price) * Decimal::from(line.quantity)
}

/// Sum of `price * quantity` over the given lines
pub fn cart_total(lines: &[CartLine]) -> f64 {
    let total: Decimal = lines.iter().map(line_total).sum();
    to_f64(total)
}

/// Sum of quantities over the given lines
pub fn item_count(lines: &[CartLine]) -> i32 {
    lines.iter().map(|l| l.quantity).sum()
}

/// Sum contribution amounts with precise arithmetic
pub fn sum_contributions(contributions: &[Contribution]) -> f64 {
    let total: Decimal = contributions.iter().map(|c| to_decimal(c.amount)).sum();
    to_f64(total)
}

/// Per-person share for an even split: `total / people`
///
/// `people` is floor-clamped to [`MIN_SPLIT_PEOPLE`]; the split screen
/// disallows splitting with fewer than two people, the ledger itself
/// never sees a party size.
pub fn even_split_share(total: f64, people: u32) -> f64 {
    let people = people.max(MIN_SPLIT_PEOPLE);
    to_f64(to_decimal(total) / Decimal::from(people))
}

/// Share for an itemized split: sum of `price * quantity` over the lines
/// whose item id is in `selected_ids`
///
/// Unknown ids are ignored. Nothing here tracks which lines earlier
/// contributors already claimed; see `SplitPayment::claimed_items` for
/// the hook a stricter mode would build on.
pub fn itemized_share(lines: &[CartLine], selected_ids: &[&str]) -> f64 {
    let total: Decimal = lines
        .iter()
        .filter(|l| selected_ids.contains(&l.item.id.as_str()))
        .map(line_total)
        .sum();
    to_f64(total)
}

/// Clamp a computed share to the remaining balance before submission
///
/// The ledger records whatever amount it is handed; this is the
/// caller-side guard that keeps a final contribution from overshooting.
pub fn clamp_contribution(share: f64, remaining: f64) -> f64 {
    to_f64(to_decimal(share).min(to_decimal(remaining)).max(Decimal::ZERO))
}

/// Check if payment is sufficient (with small tolerance for edge cases)
///
/// Returns true if paid >= required - 0.01
pub fn is_payment_sufficient(paid: f64, required: f64) -> bool {
    to_decimal(paid) >= to_decimal(required) - MONEY_TOLERANCE
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}
