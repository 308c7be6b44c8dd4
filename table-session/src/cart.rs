//! Cart - the live selection for one table
//!
//! Lines are kept in insertion order, at most one per item id. All
//! operations are total functions: an unknown item id is a silent no-op,
//! a non-positive quantity removes the line. Totals are derived reads
//! recomputed on every call, never cached.

use serde::{Deserialize, Serialize};
use shared::models::MenuItem;
use shared::money;
use shared::order::CartLine;

/// Live cart for one table session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`: bump the existing line for its id, or
    /// append a new line with quantity 1
    pub fn add_item(&mut self, item: MenuItem) {
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::new(item)),
        }
    }

    /// Remove the line for `item_id`; no-op if absent
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item.id != item_id);
    }

    /// Set the line's quantity outright; `quantity <= 0` behaves exactly
    /// as [`Cart::remove_item`]
    pub fn update_quantity(&mut self, item_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over current lines
    pub fn total(&self) -> f64 {
        money::cart_total(&self.lines)
    }

    /// Sum of quantities over current lines
    pub fn item_count(&self) -> i32 {
        money::item_count(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MenuCategory;

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price,
            category: MenuCategory::Mains,
            image: None,
            available: true,
        }
    }

    #[test]
    fn test_add_item_never_duplicates_lines() {
        let mut cart = Cart::new();
        cart.add_item(item("item-001", 180.0));
        cart.add_item(item("item-001", 180.0));
        cart.add_item(item("item-002", 250.0));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(item("item-003", 200.0));
        cart.add_item(item("item-001", 180.0));
        cart.add_item(item("item-002", 250.0));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["item-003", "item-001", "item-002"]);
    }

    #[test]
    fn test_remove_item_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item("item-001", 180.0));
        cart.remove_item("item-999");
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_update_quantity_absolute_set() {
        let mut cart = Cart::new();
        cart.add_item(item("item-001", 180.0));
        cart.add_item(item("item-001", 180.0));

        cart.update_quantity("item-001", 5);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total(), 900.0);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes_like_remove_item() {
        let mut a = Cart::new();
        a.add_item(item("item-001", 180.0));
        a.update_quantity("item-001", 0);

        let mut b = Cart::new();
        b.add_item(item("item-001", 180.0));
        b.update_quantity("item-001", -5);

        let mut c = Cart::new();
        c.add_item(item("item-001", 180.0));
        c.remove_item("item-001");

        assert!(a.is_empty());
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item("item-001", 180.0));
        cart.update_quantity("item-999", 4);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_quantity_invariant_holds_over_mixed_operations() {
        let mut cart = Cart::new();
        cart.add_item(item("item-001", 180.0));
        cart.add_item(item("item-002", 250.0));
        cart.update_quantity("item-001", 3);
        cart.remove_item("item-002");
        cart.add_item(item("item-002", 250.0));
        cart.update_quantity("item-002", -1);
        cart.add_item(item("item-001", 180.0));

        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        let mut ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.lines().len());
    }

    #[test]
    fn test_total_matches_sum_for_any_operation_order() {
        let mut cart = Cart::new();
        cart.add_item(item("item-001", 180.0));
        cart.add_item(item("item-002", 250.0));
        cart.update_quantity("item-002", 2);
        cart.add_item(item("item-001", 180.0));
        cart.remove_item("item-001");

        // Only item-002 x2 remains
        assert_eq!(cart.total(), 500.0);
        assert_eq!(cart.item_count(), 2);

        let expected: f64 = cart
            .lines()
            .iter()
            .map(|l| l.item.price * l.quantity as f64)
            .sum();
        assert_eq!(cart.total(), expected);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(item("item-001", 180.0));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }
}
