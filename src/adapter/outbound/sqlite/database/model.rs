//! Database row types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{config, items, lists};
use crate::domain::ItemPatch;

/// Database row for a list (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = lists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListRow {
    pub id: i32,
    pub name: String,
    pub created_at: String,
    pub finalized: bool,
    pub finalized_at: Option<String>,
}

/// Database row for a list (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = lists)]
pub struct NewListRow {
    pub name: String,
    pub created_at: String,
    pub finalized: bool,
    pub finalized_at: Option<String>,
}

/// Database row for an item (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ItemRow {
    pub id: i32,
    pub list_id: i32,
    pub name: String,
    pub quantity: i32,
    pub purchased: bool,
    pub position: i32,
    pub created_at: String,
}

/// Database row for an item (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = items)]
pub struct NewItemRow {
    pub list_id: i32,
    pub name: String,
    pub quantity: i32,
    pub purchased: bool,
    pub position: i32,
    pub created_at: String,
}

/// Changeset for a partial item update. `None` fields are skipped.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = items)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub purchased: Option<bool>,
}

impl From<&ItemPatch> for ItemChanges {
    fn from(patch: &ItemPatch) -> Self {
        Self {
            name: patch.name.clone(),
            quantity: patch.quantity,
            purchased: patch.purchased,
        }
    }
}

/// Database row for the preferences table (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = config)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ConfigRow {
    pub id: i32,
    pub theme: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database row for the preferences table (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = config)]
pub struct NewConfigRow {
    pub theme: String,
    pub created_at: String,
    pub updated_at: String,
}
