//! Cart line - one menu item plus its quantity

use crate::models::MenuItem;
use crate::money;
use serde::{Deserialize, Serialize};

/// One menu item plus its quantity within a cart or order snapshot
///
/// A cart holds at most one line per item id; the line's quantity is
/// always >= 1 while the line exists (a non-positive quantity removes
/// the line instead).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Owned copy of the catalog entry at the time it was added
    pub item: MenuItem,
    pub quantity: i32,
}

impl CartLine {
    /// New line with quantity 1
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    /// Line total: unit price * quantity, rounded to 2 decimal places
    pub fn line_total(&self) -> f64 {
        money::to_f64(money::line_total(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuCategory;

    #[test]
    fn test_line_total() {
        let line = CartLine {
            item: MenuItem {
                id: "item-004".to_string(),
                name: "Chicken Adobo".to_string(),
                description: String::new(),
                price: 280.0,
                category: MenuCategory::Mains,
                image: None,
                available: true,
            },
            quantity: 3,
        };
        assert_eq!(line.line_total(), 840.0);
    }
}
