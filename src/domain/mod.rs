//! Core domain types: lists, items, history queries and preferences.

pub mod export;
pub mod history;
pub mod id;
pub mod item;
pub mod list;
pub mod preferences;

pub use id::{ItemId, ListId};
pub use item::{Item, ItemDraft, ItemPatch};
pub use list::{List, ListSummary, ListTotals};
