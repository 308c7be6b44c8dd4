//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiningTable {
    /// Stable id (e.g. "table-001")
    pub id: String,
    /// Table number printed on the physical QR sticker
    pub number: i32,
    pub restaurant_id: String,
}
