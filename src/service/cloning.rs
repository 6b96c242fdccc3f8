//! Restoring and duplicating finalized lists.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{ItemDraft, List, ListId};
use crate::error::{Error, Result};
use crate::port::outbound::store::ListStore;

use super::require_name;

/// Suffix appended when restoring a finalized list into the active set.
pub const RESTORE_SUFFIX: &str = "(restaurada)";
/// Suffix appended when duplicating a finalized list.
pub const DUPLICATE_SUFFIX: &str = "(cópia)";

/// Copies finalized lists back into the active set.
pub struct Cloning<S> {
    store: S,
}

impl<S: ListStore> Cloning<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restore a finalized list: the copy starts with every item unpurchased.
    pub async fn restore(
        &self,
        source: ListId,
        forced_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<List> {
        self.clone_list(source, true, RESTORE_SUFFIX, forced_name, now)
            .await
    }

    /// Duplicate a finalized list: the copy keeps the purchased flags.
    pub async fn duplicate(
        &self,
        source: ListId,
        forced_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<List> {
        self.clone_list(source, false, DUPLICATE_SUFFIX, forced_name, now)
            .await
    }

    /// Copy a finalized list into a new active list.
    ///
    /// The new list and all of its items commit as one transaction; names,
    /// quantities and order values are preserved verbatim.
    async fn clone_list(
        &self,
        source_id: ListId,
        reset_purchased: bool,
        suffix: &str,
        forced_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<List> {
        let source = self
            .store
            .find_list(source_id)
            .await?
            .filter(|list| list.finalized)
            .ok_or_else(|| {
                Error::not_found(format!("Lista finalizada {source_id} não encontrada"))
            })?;

        let name = self
            .resolve_name(forced_name, &source.name, suffix)
            .await?;

        let items = self.store.list_items(source_id).await?;
        let drafts: Vec<ItemDraft> = items
            .iter()
            .map(|item| ItemDraft {
                name: item.name.clone(),
                quantity: item.quantity,
                purchased: !reset_purchased && item.purchased,
                position: item.position,
            })
            .collect();

        let list = self.store.insert_list_with_items(&name, now, &drafts).await?;
        info!(
            source = %source_id,
            new = %list.id,
            items = drafts.len(),
            "list cloned"
        );
        Ok(list)
    }

    /// Pick a free name: the base as-is when unused, then `base {suffix}`,
    /// then `base {suffix} 2`, `base {suffix} 3`, … until one is free.
    async fn resolve_name(
        &self,
        forced: Option<&str>,
        source_name: &str,
        suffix: &str,
    ) -> Result<String> {
        let base = match forced {
            Some(raw) => require_name(raw, "Nome é obrigatório")?,
            None => source_name,
        };

        if !self.store.name_in_use(base).await? {
            return Ok(base.to_owned());
        }
        let candidate = format!("{base} {suffix}");
        if !self.store.name_in_use(&candidate).await? {
            return Ok(candidate);
        }
        let mut counter = 2u32;
        loop {
            let candidate = format!("{base} {suffix} {counter}");
            if !self.store.name_in_use(&candidate).await? {
                return Ok(candidate);
            }
            counter += 1;
        }
    }
}
