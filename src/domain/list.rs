//! Shopping-list aggregate types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ListId;

/// A named shopping list.
///
/// `finalized_at` is set exactly when the list transitions into the
/// finalized state and cleared when it transitions back to active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub finalized: bool,
    pub finalized_at: Option<DateTime<Utc>>,
}

/// A list together with its item count, as returned by collection reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub finalized: bool,
    pub finalized_at: Option<DateTime<Utc>>,
    pub item_count: i64,
}

impl ListSummary {
    #[must_use]
    pub fn new(list: List, item_count: i64) -> Self {
        Self {
            id: list.id,
            name: list.name,
            created_at: list.created_at,
            finalized: list.finalized,
            finalized_at: list.finalized_at,
            item_count,
        }
    }
}

/// Purchased/total counters for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListTotals {
    pub id: ListId,
    pub items: i64,
    pub purchased: i64,
}
