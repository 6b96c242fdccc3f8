//! Item ordering within a list: append, partial update, delete and the
//! reorder reconciliation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{Item, ItemDraft, ItemId, ItemPatch, ListId};
use crate::error::{Error, Result};
use crate::port::outbound::store::ListStore;

use super::lifecycle::list_not_found;
use super::require_name;

fn item_not_found(id: ItemId) -> Error {
    Error::not_found(format!("Item {id} não encontrado"))
}

/// Maintains the dense display order of items inside a list.
pub struct Ordering<S> {
    store: S,
}

impl<S: ListStore> Ordering<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Items of a list in display order.
    pub async fn items(&self, list_id: ListId) -> Result<Vec<Item>> {
        self.require_list(list_id).await?;
        self.store.list_items(list_id).await
    }

    /// Append an item at the end of the list.
    ///
    /// The new item takes `max(order) + 1`, or 0 for an empty list.
    pub async fn append(
        &self,
        list_id: ListId,
        name: &str,
        quantity: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<Item> {
        self.require_list(list_id).await?;
        let name = require_name(name, "Nome do item é obrigatório")?;
        let quantity = quantity.unwrap_or(1);
        if quantity < 0 {
            return Err(Error::validation("Quantidade não pode ser negativa"));
        }

        let position = match self.store.max_position(list_id).await? {
            Some(max) => max + 1,
            None => 0,
        };
        let draft = ItemDraft {
            name: name.to_owned(),
            quantity,
            purchased: false,
            position,
        };
        self.store.insert_item(list_id, &draft, now).await
    }

    /// Apply a partial update to one item of the list. Only fields present
    /// in the patch change.
    pub async fn update(
        &self,
        list_id: ListId,
        item_id: ItemId,
        patch: ItemPatch,
    ) -> Result<Item> {
        let current = self
            .store
            .find_item(list_id, item_id)
            .await?
            .ok_or_else(|| item_not_found(item_id))?;

        let mut patch = patch;
        if let Some(name) = patch.name.as_deref() {
            patch.name = Some(require_name(name, "Nome do item é obrigatório")?.to_owned());
        }
        if let Some(quantity) = patch.quantity {
            if quantity < 0 {
                return Err(Error::validation("Quantidade não pode ser negativa"));
            }
        }
        if patch.is_empty() {
            return Ok(current);
        }

        self.store
            .update_item(list_id, item_id, &patch)
            .await?
            .ok_or_else(|| item_not_found(item_id))
    }

    pub async fn delete(&self, list_id: ListId, item_id: ItemId) -> Result<()> {
        if !self.store.delete_item(list_id, item_id).await? {
            return Err(item_not_found(item_id));
        }
        Ok(())
    }

    /// Rewrite the display order of a list.
    ///
    /// Ids in `ordered` take positions `0..n` in the given sequence; items
    /// not mentioned keep their relative `(order, created_at)` order and are
    /// pushed after them, so the final positions are exactly `0..total`.
    /// All position writes commit in one transaction.
    pub async fn reorder(&self, list_id: ListId, ordered: &[ItemId]) -> Result<()> {
        self.require_list(list_id).await?;
        if ordered.is_empty() {
            return Err(Error::validation("Informe uma lista de IDs em 'ordem'"));
        }

        let items = self.store.list_items(list_id).await?;
        let known: HashSet<ItemId> = items.iter().map(|item| item.id).collect();
        let mut seen = HashSet::new();
        for id in ordered {
            if !known.contains(id) {
                return Err(Error::validation(format!(
                    "Item {id} não pertence à lista"
                )));
            }
            if !seen.insert(*id) {
                return Err(Error::validation(format!(
                    "Item {id} repetido na ordenação"
                )));
            }
        }

        let mut assignments: Vec<(ItemId, i32)> = ordered
            .iter()
            .enumerate()
            .map(|(position, id)| (*id, position as i32))
            .collect();

        let mut remaining: Vec<&Item> =
            items.iter().filter(|item| !seen.contains(&item.id)).collect();
        remaining.sort_by(|a, b| {
            (a.position, a.created_at).cmp(&(b.position, b.created_at))
        });
        let offset = ordered.len() as i32;
        assignments.extend(
            remaining
                .iter()
                .enumerate()
                .map(|(index, item)| (item.id, offset + index as i32)),
        );

        debug!(
            list_id = %list_id,
            moved = ordered.len(),
            total = assignments.len(),
            "reordering items"
        );
        self.store.apply_positions(list_id, &assignments).await
    }

    async fn require_list(&self, list_id: ListId) -> Result<()> {
        self.store
            .find_list(list_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| list_not_found(list_id))
    }
}
