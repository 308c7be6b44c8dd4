//! Table directory and venue info
//!
//! External lookup from the table number printed on the QR sticker to a
//! table record. Absence is a caller-side "table not found" state, not
//! an engine error.

use shared::models::{DiningTable, Restaurant};
use std::sync::LazyLock;

const TABLE_COUNT: i32 = 10;

static RESTAURANT: LazyLock<Restaurant> = LazyLock::new(|| Restaurant {
    id: "rest-001".to_string(),
    name: "The Filipino Kitchen".to_string(),
    description: "Authentic Filipino cuisine with a modern twist".to_string(),
    logo: Some("🍜".to_string()),
});

static TABLES: LazyLock<Vec<DiningTable>> = LazyLock::new(|| {
    (1..=TABLE_COUNT)
        .map(|number| DiningTable {
            id: format!("table-{number:03}"),
            number,
            restaurant_id: RESTAURANT.id.clone(),
        })
        .collect()
});

pub fn restaurant() -> &'static Restaurant {
    &RESTAURANT
}

pub fn tables() -> &'static [DiningTable] {
    &TABLES
}

/// Resolve a scanned table number to its record
pub fn resolve_table(number: i32) -> Option<&'static DiningTable> {
    TABLES.iter().find(|t| t.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_table() {
        let table = resolve_table(3).unwrap();
        assert_eq!(table.id, "table-003");
        assert_eq!(table.restaurant_id, restaurant().id);

        assert!(resolve_table(0).is_none());
        assert!(resolve_table(11).is_none());
    }

    #[test]
    fn test_table_directory_size() {
        assert_eq!(tables().len(), 10);
    }
}
