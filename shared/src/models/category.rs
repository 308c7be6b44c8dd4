//! Menu Category Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu category (fixed set, in menu display order)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    Starters,
    Mains,
    RiceNoodles,
    Drinks,
    Desserts,
}

impl MenuCategory {
    /// All categories in menu display order
    pub const ALL: [MenuCategory; 5] = [
        MenuCategory::Starters,
        MenuCategory::Mains,
        MenuCategory::RiceNoodles,
        MenuCategory::Drinks,
        MenuCategory::Desserts,
    ];

    /// Display label shown on the menu screen
    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "Starters",
            MenuCategory::Mains => "Mains",
            MenuCategory::RiceNoodles => "Rice & Noodles",
            MenuCategory::Drinks => "Drinks",
            MenuCategory::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
