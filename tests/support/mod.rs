#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use feira::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use feira::adapter::outbound::sqlite::store::{SqliteListStore, SqlitePreferenceStore};
use feira::domain::{ItemDraft, ListId};
use feira::port::outbound::store::ListStore;

/// Temporary SQLite database for integration tests.
pub struct TempDb {
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        path.push(format!("feira-{name}-{nanos}.db"));

        let pool = create_pool(&path.display().to_string(), 5).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");

        // WAL mode improves concurrent writer behavior in tests.
        {
            let mut conn = pool.get().expect("get sqlite connection");
            diesel::sql_query("PRAGMA journal_mode=WAL")
                .execute(&mut conn)
                .expect("enable WAL mode");
        }

        Self { path, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn store(&self) -> SqliteListStore {
        SqliteListStore::new(self.pool.clone())
    }

    pub fn preference_store(&self) -> SqlitePreferenceStore {
        SqlitePreferenceStore::new(self.pool.clone())
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        let _ = std::fs::remove_file(self.path.with_extension("db-wal"));
        let _ = std::fs::remove_file(self.path.with_extension("db-shm"));
    }
}

/// `(name, quantity, purchased)` shorthand for seeded items.
pub type SeedItem<'a> = (&'a str, i32, bool);

/// Insert a list with items through the store, optionally finalized at the
/// given instant. Item positions follow the slice order.
pub async fn seed_list(
    store: &SqliteListStore,
    name: &str,
    finalized_at: Option<DateTime<Utc>>,
    items: &[SeedItem<'_>],
) -> ListId {
    let created_at = finalized_at.unwrap_or_else(Utc::now) - chrono::Duration::hours(1);
    let list = store
        .insert_list(name, created_at)
        .await
        .expect("insert list");

    for (position, (item_name, quantity, purchased)) in items.iter().enumerate() {
        let draft = ItemDraft {
            name: (*item_name).to_owned(),
            quantity: *quantity,
            purchased: *purchased,
            position: position as i32,
        };
        store
            .insert_item(list.id, &draft, created_at)
            .await
            .expect("insert item");
    }

    if let Some(ts) = finalized_at {
        store
            .set_finalized(list.id, Some(ts))
            .await
            .expect("finalize list");
    }

    list.id
}
