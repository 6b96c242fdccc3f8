//! List lifecycle: creation, rename, deletion and the finalize transition.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{List, ListId, ListSummary, ListTotals};
use crate::error::{Error, Result};
use crate::port::outbound::store::ListStore;

use super::require_name;

pub(crate) fn list_not_found(id: ListId) -> Error {
    Error::not_found(format!("Lista {id} não encontrada"))
}

/// Manages list creation, rename, deletion and the finalize/unfinalize
/// transition.
pub struct Lifecycle<S> {
    store: S,
}

impl<S: ListStore> Lifecycle<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All lists, newest first, with item counts.
    pub async fn all(&self) -> Result<Vec<ListSummary>> {
        let lists = self.store.all_lists().await?;
        Ok(lists
            .into_iter()
            .map(|(list, count)| ListSummary::new(list, count))
            .collect())
    }

    pub async fn create(&self, name: &str, now: DateTime<Utc>) -> Result<List> {
        let name = require_name(name, "Nome é obrigatório")?;
        let list = self.store.insert_list(name, now).await?;
        info!(list_id = %list.id, "list created");
        Ok(list)
    }

    pub async fn rename(&self, id: ListId, name: &str) -> Result<List> {
        self.store
            .find_list(id)
            .await?
            .ok_or_else(|| list_not_found(id))?;
        let name = require_name(name, "Nome é obrigatório")?;
        self.store
            .rename_list(id, name)
            .await?
            .ok_or_else(|| list_not_found(id))
    }

    pub async fn delete(&self, id: ListId) -> Result<()> {
        if !self.store.delete_list(id).await? {
            return Err(list_not_found(id));
        }
        info!(list_id = %id, "list deleted");
        Ok(())
    }

    /// Archive or reactivate a list.
    ///
    /// Re-finalizing an already finalized list keeps its original
    /// `finalized_at`; unfinalizing always rewrites the cleared state, even
    /// when the list was not finalized to begin with.
    pub async fn finalize(
        &self,
        id: ListId,
        desired: bool,
        now: DateTime<Utc>,
    ) -> Result<ListSummary> {
        let list = self
            .store
            .find_list(id)
            .await?
            .ok_or_else(|| list_not_found(id))?;

        let updated = if desired {
            if list.finalized {
                list
            } else {
                let updated = self
                    .store
                    .set_finalized(id, Some(now))
                    .await?
                    .ok_or_else(|| list_not_found(id))?;
                info!(list_id = %id, "list finalized");
                updated
            }
        } else {
            self.store
                .set_finalized(id, None)
                .await?
                .ok_or_else(|| list_not_found(id))?
        };

        let (item_count, _) = self.store.count_items(id).await?;
        Ok(ListSummary::new(updated, item_count))
    }

    /// Purchased/total counters for one list.
    pub async fn totals(&self, id: ListId) -> Result<ListTotals> {
        self.store
            .find_list(id)
            .await?
            .ok_or_else(|| list_not_found(id))?;
        let (items, purchased) = self.store.count_items(id).await?;
        Ok(ListTotals {
            id,
            items,
            purchased,
        })
    }
}
