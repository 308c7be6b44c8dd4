//! Menu Item Model

use super::MenuCategory;
use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Immutable catalog entry. The session engine copies items into cart
/// lines rather than referencing the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Stable catalog id (e.g. "item-001")
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in currency unit (non-negative)
    pub price: f64,
    pub category: MenuCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub available: bool,
}
