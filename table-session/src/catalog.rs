//! Static menu catalog
//!
//! Read-only input to the session engine; a real deployment would load
//! this from the venue's backoffice. Item ids are stable, carts and
//! order snapshots reference them.

use shared::models::{MenuCategory, MenuItem};
use std::sync::LazyLock;

fn entry(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: MenuCategory,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        image: None,
        available: true,
    }
}

static MENU: LazyLock<Vec<MenuItem>> = LazyLock::new(|| {
    use MenuCategory::*;
    vec![
        // Starters
        entry(
            "item-001",
            "Lumpia Shanghai",
            "Crispy Filipino spring rolls filled with seasoned pork and vegetables",
            180.0,
            Starters,
        ),
        entry(
            "item-002",
            "Crispy Calamari",
            "Golden fried squid rings served with sweet chili sauce",
            250.0,
            Starters,
        ),
        entry(
            "item-003",
            "Tokwa't Baboy",
            "Fried tofu and pork in soy-vinegar sauce",
            200.0,
            Starters,
        ),
        // Mains
        entry(
            "item-004",
            "Chicken Adobo",
            "Classic Filipino dish with tender chicken in soy and vinegar sauce",
            280.0,
            Mains,
        ),
        entry(
            "item-005",
            "Sinigang na Baboy",
            "Savory pork soup with tamarind and vegetables",
            320.0,
            Mains,
        ),
        entry(
            "item-006",
            "Kare-Kare",
            "Oxtail stew in rich peanut sauce with vegetables",
            380.0,
            Mains,
        ),
        entry(
            "item-007",
            "Crispy Pata",
            "Deep-fried pork leg served with spiced vinegar",
            680.0,
            Mains,
        ),
        entry(
            "item-008",
            "Beef Caldereta",
            "Tender beef stew in tomato sauce with bell peppers",
            350.0,
            Mains,
        ),
        // Rice & Noodles
        entry(
            "item-009",
            "Garlic Rice",
            "Fragrant rice tossed with garlic",
            60.0,
            RiceNoodles,
        ),
        entry(
            "item-010",
            "Pancit Canton",
            "Stir-fried egg noodles with vegetables and meat",
            180.0,
            RiceNoodles,
        ),
        entry(
            "item-011",
            "Java Rice",
            "Turmeric-infused yellow rice",
            70.0,
            RiceNoodles,
        ),
        // Drinks
        entry(
            "item-012",
            "Calamansi Juice",
            "Fresh Philippine lime juice",
            80.0,
            Drinks,
        ),
        entry(
            "item-013",
            "Mango Shake",
            "Creamy mango smoothie",
            120.0,
            Drinks,
        ),
        entry(
            "item-014",
            "San Miguel Beer",
            "Local pilsner (330ml)",
            90.0,
            Drinks,
        ),
        entry(
            "item-015",
            "Iced Tea",
            "Refreshing cold brewed tea",
            60.0,
            Drinks,
        ),
        // Desserts
        entry(
            "item-016",
            "Halo-Halo",
            "Filipino shaved ice dessert with mixed fruits and ice cream",
            150.0,
            Desserts,
        ),
        entry(
            "item-017",
            "Leche Flan",
            "Creamy caramel custard",
            120.0,
            Desserts,
        ),
        entry(
            "item-018",
            "Turon",
            "Caramelized banana spring roll",
            100.0,
            Desserts,
        ),
    ]
});

/// Full menu in catalog order
pub fn menu_items() -> &'static [MenuItem] {
    &MENU
}

/// Categories in menu display order
pub fn categories() -> &'static [MenuCategory] {
    &MenuCategory::ALL
}

/// Items of one category, in catalog order
pub fn items_by_category(category: MenuCategory) -> Vec<&'static MenuItem> {
    MENU.iter().filter(|i| i.category == category).collect()
}

/// Look up a catalog entry by id
pub fn find_item(id: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = menu_items().iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_catalog_prices_non_negative() {
        assert!(menu_items().iter().all(|i| i.price >= 0.0));
    }

    #[test]
    fn test_every_category_has_items() {
        for &category in categories() {
            assert!(
                !items_by_category(category).is_empty(),
                "no items in {category}"
            );
        }
    }

    #[test]
    fn test_find_item() {
        let adobo = find_item("item-004").unwrap();
        assert_eq!(adobo.name, "Chicken Adobo");
        assert_eq!(adobo.price, 280.0);
        assert!(find_item("item-999").is_none());
    }
}
