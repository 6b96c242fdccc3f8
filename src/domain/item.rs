//! Item types: the purchasable entries inside a list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ItemId, ListId};

/// A single purchasable entry within a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub list_id: ListId,
    pub name: String,
    pub quantity: i32,
    pub purchased: bool,
    /// Display position within the owning list. The ordering service keeps
    /// positions dense (0..n-1) after a reorder.
    #[serde(rename = "order")]
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// Partial update for an item. A `None` field leaves the stored value
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub purchased: Option<bool>,
}

impl ItemPatch {
    /// True when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.purchased.is_none()
    }
}

/// Item fields for a pending insert; the storage adapter assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: i32,
    pub purchased: bool,
    pub position: i32,
}
