//! History browsing over finalized lists.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::history::{
    HistoryEntry, HistoryFilter, HistoryPage, HistoryRequest, ItemPreview, PageMeta, TimeWindow,
};
use crate::domain::{Item, ListId};
use crate::error::{Error, Result};
use crate::port::outbound::store::ListStore;

/// Number of items shown inline with each history entry.
pub const PREVIEW_ITEMS: usize = 3;

const DEFAULT_LIMIT: i64 = 9;
const MAX_LIMIT: i64 = 50;

/// Queries the archive of finalized lists.
pub struct History<S> {
    store: S,
}

impl<S: ListStore> History<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// One page of finalized lists matching the request.
    ///
    /// `now` anchors the rolling period windows and is captured once by the
    /// caller for the whole operation.
    pub async fn page(&self, request: &HistoryRequest, now: DateTime<Utc>) -> Result<HistoryPage> {
        let page = request.page.unwrap_or(1);
        if page < 1 {
            return Err(Error::validation("page deve ser maior ou igual a 1"));
        }
        let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(Error::validation(format!(
                "limit deve estar entre 1 e {MAX_LIMIT}"
            )));
        }

        let window = TimeWindow::resolve(
            request.period.as_deref(),
            request.period_start.as_deref(),
            request.period_end.as_deref(),
            now,
        )?;
        let search = request
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_owned);
        let filter = HistoryFilter { search, window };

        let total = self.store.count_finalized(&filter).await?;
        let offset = (page - 1) * limit;
        let lists = self.store.finalized_page(&filter, offset, limit).await?;

        // One items pass for the whole page; previews are capped afterwards.
        let ids: Vec<ListId> = lists.iter().map(|list| list.id).collect();
        let mut items_by_list: HashMap<ListId, Vec<Item>> = HashMap::new();
        if !ids.is_empty() {
            for item in self.store.items_for_lists(&ids).await? {
                items_by_list.entry(item.list_id).or_default().push(item);
            }
        }

        let returned = lists.len() as i64;
        let data = lists
            .into_iter()
            .map(|list| {
                let items = items_by_list.remove(&list.id).unwrap_or_default();
                HistoryEntry {
                    id: list.id,
                    name: list.name,
                    created_at: list.created_at,
                    finalized: list.finalized,
                    finalized_at: list.finalized_at,
                    itens_count: items.len() as i64,
                    preview_itens: items
                        .iter()
                        .take(PREVIEW_ITEMS)
                        .map(ItemPreview::from)
                        .collect(),
                }
            })
            .collect();

        Ok(HistoryPage {
            data,
            meta: PageMeta {
                total,
                page,
                limit,
                has_more: offset + returned < total,
            },
        })
    }
}
