//! Persistence ports for lists, items and preferences.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::history::HistoryFilter;
use crate::domain::preferences::Theme;
use crate::domain::{Item, ItemDraft, ItemId, ItemPatch, List, ListId};
use crate::error::Result;

/// Storage operations for lists and their items.
///
/// Multi-row mutations (`apply_positions`, `insert_list_with_items`) commit
/// atomically: either every row write lands or none do.
pub trait ListStore: Send + Sync {
    /// All lists, newest first, each with its item count.
    fn all_lists(&self) -> impl Future<Output = Result<Vec<(List, i64)>>> + Send;

    /// Insert a new active list.
    fn insert_list(
        &self,
        name: &str,
        created_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<List>> + Send;

    /// Get a list by id.
    fn find_list(&self, id: ListId) -> impl Future<Output = Result<Option<List>>> + Send;

    /// Rename a list. Returns the updated row, or `None` when absent.
    fn rename_list(
        &self,
        id: ListId,
        name: &str,
    ) -> impl Future<Output = Result<Option<List>>> + Send;

    /// Delete a list and, through the schema cascade, all of its items.
    fn delete_list(&self, id: ListId) -> impl Future<Output = Result<bool>> + Send;

    /// Set or clear the finalized flag; `finalized_at` is stored verbatim.
    fn set_finalized(
        &self,
        id: ListId,
        finalized_at: Option<DateTime<Utc>>,
    ) -> impl Future<Output = Result<Option<List>>> + Send;

    /// Items of one list, ordered by `(order, created_at)` ascending.
    fn list_items(&self, list_id: ListId) -> impl Future<Output = Result<Vec<Item>>> + Send;

    /// Insert one item into a list.
    fn insert_item(
        &self,
        list_id: ListId,
        draft: &ItemDraft,
        created_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Item>> + Send;

    /// Get an item scoped to its list.
    fn find_item(
        &self,
        list_id: ListId,
        item_id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>>> + Send;

    /// Apply a partial update to an item scoped to its list. The patch must
    /// carry at least one field.
    fn update_item(
        &self,
        list_id: ListId,
        item_id: ItemId,
        patch: &ItemPatch,
    ) -> impl Future<Output = Result<Option<Item>>> + Send;

    /// Delete an item scoped to its list.
    fn delete_item(
        &self,
        list_id: ListId,
        item_id: ItemId,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Highest `order` value in the list, `None` when it has no items.
    fn max_position(&self, list_id: ListId) -> impl Future<Output = Result<Option<i32>>> + Send;

    /// Write the given `(item, order)` assignments in one transaction.
    fn apply_positions(
        &self,
        list_id: ListId,
        assignments: &[(ItemId, i32)],
    ) -> impl Future<Output = Result<()>> + Send;

    /// `(total, purchased)` item counts for one list.
    fn count_items(&self, list_id: ListId) -> impl Future<Output = Result<(i64, i64)>> + Send;

    /// Count finalized lists matching the filter.
    fn count_finalized(&self, filter: &HistoryFilter)
        -> impl Future<Output = Result<i64>> + Send;

    /// One page of finalized lists matching the filter, ordered by
    /// `finalized_at` descending (nulls last), then `created_at` descending.
    fn finalized_page(
        &self,
        filter: &HistoryFilter,
        offset: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<List>>> + Send;

    /// Items of several lists in one pass, ordered by
    /// `(list_id, order, created_at)` ascending.
    fn items_for_lists(
        &self,
        list_ids: &[ListId],
    ) -> impl Future<Output = Result<Vec<Item>>> + Send;

    /// True when any list currently carries exactly this name.
    fn name_in_use(&self, name: &str) -> impl Future<Output = Result<bool>> + Send;

    /// Insert a new active list together with all of its items as a single
    /// transaction.
    fn insert_list_with_items(
        &self,
        name: &str,
        created_at: DateTime<Utc>,
        items: &[ItemDraft],
    ) -> impl Future<Output = Result<List>> + Send;

    /// Cheap connectivity probe.
    fn ping(&self) -> impl Future<Output = Result<()>> + Send;
}

/// Storage for operator preferences.
pub trait PreferenceStore: Send + Sync {
    /// Current theme, creating the default row when none exists.
    fn load_theme(&self, now: DateTime<Utc>) -> impl Future<Output = Result<Theme>> + Send;

    /// Persist a new theme and bump the row's update timestamp.
    fn save_theme(
        &self,
        theme: Theme,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Theme>> + Send;
}
