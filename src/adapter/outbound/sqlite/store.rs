//! SQLite list store implementation.
//!
//! Implements the persistence ports on top of Diesel and the pooled
//! connection from [`database::connection`](super::database::connection).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use diesel::dsl::{count, exists, max};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sql_types::Integer;
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    ConfigRow, ItemChanges, ItemRow, ListRow, NewConfigRow, NewItemRow, NewListRow,
};
use crate::adapter::outbound::sqlite::database::schema::{config, items, lists};
use crate::domain::history::HistoryFilter;
use crate::domain::preferences::Theme;
use crate::domain::{Item, ItemDraft, ItemId, ItemPatch, List, ListId};
use crate::error::{Error, Result};
use crate::port::outbound::store::{ListStore, PreferenceStore};

diesel::define_sql_function! {
    fn last_insert_rowid() -> Integer;
}

type SqliteConn = PooledConnection<ConnectionManager<SqliteConnection>>;

fn to_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::Parse(e.to_string()))
}

fn list_from_row(row: ListRow) -> Result<List> {
    Ok(List {
        id: ListId::new(row.id),
        name: row.name,
        created_at: parse_timestamp(&row.created_at)?,
        finalized: row.finalized,
        finalized_at: row
            .finalized_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?,
    })
}

fn item_from_row(row: ItemRow) -> Result<Item> {
    Ok(Item {
        id: ItemId::new(row.id),
        list_id: ListId::new(row.list_id),
        name: row.name,
        quantity: row.quantity,
        purchased: row.purchased,
        position: row.position,
        created_at: parse_timestamp(&row.created_at)?,
    })
}

/// Apply the finalized-only base filter plus the optional search and window
/// filters. Generic over the select clause so the same filters back both the
/// count and the page query.
fn apply_history_filter<ST>(
    mut query: lists::BoxedQuery<'static, Sqlite, ST>,
    filter: &HistoryFilter,
) -> lists::BoxedQuery<'static, Sqlite, ST> {
    query = query.filter(lists::finalized.eq(true));
    if let Some(term) = &filter.search {
        query = query.filter(lists::name.like(format!("%{term}%")));
    }
    if let Some(start) = filter.window.start {
        query = query.filter(lists::finalized_at.ge(to_timestamp(&start)));
    }
    if let Some(end) = filter.window.end {
        query = query.filter(lists::finalized_at.le(to_timestamp(&end)));
    }
    query
}

/// SQLite-backed list store.
///
/// Implements the [`ListStore`] trait for persistent storage of lists and
/// their items.
#[derive(Clone)]
pub struct SqliteListStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteListStore {
    /// Create a new SQLite list store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<SqliteConn> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }
}

impl ListStore for SqliteListStore {
    async fn all_lists(&self) -> Result<Vec<(List, i64)>> {
        let mut conn = self.conn()?;

        let rows: Vec<ListRow> = lists::table
            .order(lists::created_at.desc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        let counts: Vec<(i32, i64)> = items::table
            .group_by(items::list_id)
            .select((items::list_id, count(items::id)))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        let counts: HashMap<i32, i64> = counts.into_iter().collect();

        rows.into_iter()
            .map(|row| {
                let item_count = counts.get(&row.id).copied().unwrap_or(0);
                Ok((list_from_row(row)?, item_count))
            })
            .collect()
    }

    async fn insert_list(&self, name: &str, created_at: DateTime<Utc>) -> Result<List> {
        let mut conn = self.conn()?;

        let row = NewListRow {
            name: name.to_owned(),
            created_at: to_timestamp(&created_at),
            finalized: false,
            finalized_at: None,
        };
        diesel::insert_into(lists::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        let id: i32 = diesel::select(last_insert_rowid())
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(List {
            id: ListId::new(id),
            name: name.to_owned(),
            created_at,
            finalized: false,
            finalized_at: None,
        })
    }

    async fn find_list(&self, id: ListId) -> Result<Option<List>> {
        let mut conn = self.conn()?;

        let row: Option<ListRow> = lists::table
            .find(id.value())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(list_from_row).transpose()
    }

    async fn rename_list(&self, id: ListId, name: &str) -> Result<Option<List>> {
        let mut conn = self.conn()?;

        let updated = diesel::update(lists::table.find(id.value()))
            .set(lists::name.eq(name))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        if updated == 0 {
            return Ok(None);
        }

        let row: ListRow = lists::table
            .find(id.value())
            .first(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        list_from_row(row).map(Some)
    }

    async fn delete_list(&self, id: ListId) -> Result<bool> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(lists::table.find(id.value()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }

    async fn set_finalized(
        &self,
        id: ListId,
        finalized_at: Option<DateTime<Utc>>,
    ) -> Result<Option<List>> {
        let mut conn = self.conn()?;

        let stamp = finalized_at.as_ref().map(to_timestamp);
        let updated = diesel::update(lists::table.find(id.value()))
            .set((
                lists::finalized.eq(finalized_at.is_some()),
                lists::finalized_at.eq(stamp),
            ))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        if updated == 0 {
            return Ok(None);
        }

        let row: ListRow = lists::table
            .find(id.value())
            .first(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        list_from_row(row).map(Some)
    }

    async fn list_items(&self, list_id: ListId) -> Result<Vec<Item>> {
        let mut conn = self.conn()?;

        let rows: Vec<ItemRow> = items::table
            .filter(items::list_id.eq(list_id.value()))
            .order((items::position.asc(), items::created_at.asc()))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(item_from_row).collect()
    }

    async fn insert_item(
        &self,
        list_id: ListId,
        draft: &ItemDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Item> {
        let mut conn = self.conn()?;

        let row = NewItemRow {
            list_id: list_id.value(),
            name: draft.name.clone(),
            quantity: draft.quantity,
            purchased: draft.purchased,
            position: draft.position,
            created_at: to_timestamp(&created_at),
        };
        diesel::insert_into(items::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        let id: i32 = diesel::select(last_insert_rowid())
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Item {
            id: ItemId::new(id),
            list_id,
            name: draft.name.clone(),
            quantity: draft.quantity,
            purchased: draft.purchased,
            position: draft.position,
            created_at,
        })
    }

    async fn find_item(&self, list_id: ListId, item_id: ItemId) -> Result<Option<Item>> {
        let mut conn = self.conn()?;

        let row: Option<ItemRow> = items::table
            .filter(items::id.eq(item_id.value()))
            .filter(items::list_id.eq(list_id.value()))
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(item_from_row).transpose()
    }

    async fn update_item(
        &self,
        list_id: ListId,
        item_id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<Item>> {
        let mut conn = self.conn()?;

        let changes = ItemChanges::from(patch);
        let updated = diesel::update(
            items::table
                .filter(items::id.eq(item_id.value()))
                .filter(items::list_id.eq(list_id.value())),
        )
        .set(&changes)
        .execute(&mut conn)
        .map_err(|e| Error::Database(e.to_string()))?;
        if updated == 0 {
            return Ok(None);
        }

        let row: ItemRow = items::table
            .filter(items::id.eq(item_id.value()))
            .first(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        item_from_row(row).map(Some)
    }

    async fn delete_item(&self, list_id: ListId, item_id: ItemId) -> Result<bool> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            items::table
                .filter(items::id.eq(item_id.value()))
                .filter(items::list_id.eq(list_id.value())),
        )
        .execute(&mut conn)
        .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }

    async fn max_position(&self, list_id: ListId) -> Result<Option<i32>> {
        let mut conn = self.conn()?;

        items::table
            .filter(items::list_id.eq(list_id.value()))
            .select(max(items::position))
            .first(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    async fn apply_positions(
        &self,
        list_id: ListId,
        assignments: &[(ItemId, i32)],
    ) -> Result<()> {
        let mut conn = self.conn()?;

        conn.transaction::<_, Error, _>(|conn| {
            for (item_id, position) in assignments {
                diesel::update(
                    items::table
                        .filter(items::id.eq(item_id.value()))
                        .filter(items::list_id.eq(list_id.value())),
                )
                .set(items::position.eq(position))
                .execute(conn)?;
            }
            Ok(())
        })
    }

    async fn count_items(&self, list_id: ListId) -> Result<(i64, i64)> {
        let mut conn = self.conn()?;

        let total: i64 = items::table
            .filter(items::list_id.eq(list_id.value()))
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        let purchased: i64 = items::table
            .filter(items::list_id.eq(list_id.value()))
            .filter(items::purchased.eq(true))
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok((total, purchased))
    }

    async fn count_finalized(&self, filter: &HistoryFilter) -> Result<i64> {
        let mut conn = self.conn()?;

        apply_history_filter(lists::table.count().into_boxed(), filter)
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    async fn finalized_page(
        &self,
        filter: &HistoryFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<List>> {
        let mut conn = self.conn()?;

        let rows: Vec<ListRow> = apply_history_filter(lists::table.into_boxed(), filter)
            .order((
                lists::finalized_at.is_null().asc(),
                lists::finalized_at.desc(),
                lists::created_at.desc(),
            ))
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(list_from_row).collect()
    }

    async fn items_for_lists(&self, list_ids: &[ListId]) -> Result<Vec<Item>> {
        let mut conn = self.conn()?;

        let ids: Vec<i32> = list_ids.iter().map(|id| id.value()).collect();
        let rows: Vec<ItemRow> = items::table
            .filter(items::list_id.eq_any(ids))
            .order((
                items::list_id.asc(),
                items::position.asc(),
                items::created_at.asc(),
            ))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(item_from_row).collect()
    }

    async fn name_in_use(&self, name: &str) -> Result<bool> {
        let mut conn = self.conn()?;

        diesel::select(exists(lists::table.filter(lists::name.eq(name))))
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    async fn insert_list_with_items(
        &self,
        name: &str,
        created_at: DateTime<Utc>,
        drafts: &[ItemDraft],
    ) -> Result<List> {
        let mut conn = self.conn()?;

        let stamp = to_timestamp(&created_at);
        let row = conn.transaction::<ListRow, Error, _>(|conn| {
            diesel::insert_into(lists::table)
                .values(&NewListRow {
                    name: name.to_owned(),
                    created_at: stamp.clone(),
                    finalized: false,
                    finalized_at: None,
                })
                .execute(conn)?;
            let list_id: i32 = diesel::select(last_insert_rowid()).get_result(conn)?;

            let item_rows: Vec<NewItemRow> = drafts
                .iter()
                .map(|draft| NewItemRow {
                    list_id,
                    name: draft.name.clone(),
                    quantity: draft.quantity,
                    purchased: draft.purchased,
                    position: draft.position,
                    created_at: stamp.clone(),
                })
                .collect();
            diesel::insert_into(items::table)
                .values(&item_rows)
                .execute(conn)?;

            lists::table.find(list_id).first(conn).map_err(Into::into)
        })?;

        list_from_row(row)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn()?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }
}

/// SQLite-backed preference store over the single-row `config` table.
#[derive(Clone)]
pub struct SqlitePreferenceStore {
    pool: DbPool,
}

impl SqlitePreferenceStore {
    /// Create a new SQLite preference store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<SqliteConn> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    async fn load_theme(&self, now: DateTime<Utc>) -> Result<Theme> {
        let mut conn = self.conn()?;

        let row: Option<ConfigRow> = config::table
            .order(config::id.asc())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        match row {
            Some(row) => Theme::parse(&row.theme)
                .map_err(|_| Error::Parse(format!("unknown stored theme '{}'", row.theme))),
            None => {
                let stamp = to_timestamp(&now);
                diesel::insert_into(config::table)
                    .values(&NewConfigRow {
                        theme: Theme::default().as_str().to_owned(),
                        created_at: stamp.clone(),
                        updated_at: stamp,
                    })
                    .execute(&mut conn)
                    .map_err(|e| Error::Database(e.to_string()))?;
                Ok(Theme::default())
            }
        }
    }

    async fn save_theme(&self, theme: Theme, now: DateTime<Utc>) -> Result<Theme> {
        let mut conn = self.conn()?;

        let stamp = to_timestamp(&now);
        conn.transaction::<_, Error, _>(|conn| {
            let existing: Option<i32> = config::table
                .select(config::id)
                .order(config::id.asc())
                .first(conn)
                .optional()?;
            match existing {
                Some(id) => {
                    diesel::update(config::table.find(id))
                        .set((
                            config::theme.eq(theme.as_str()),
                            config::updated_at.eq(&stamp),
                        ))
                        .execute(conn)?;
                }
                None => {
                    diesel::insert_into(config::table)
                        .values(&NewConfigRow {
                            theme: theme.as_str().to_owned(),
                            created_at: stamp.clone(),
                            updated_at: stamp.clone(),
                        })
                        .execute(conn)?;
                }
            }
            Ok(())
        })?;

        Ok(theme)
    }
}
