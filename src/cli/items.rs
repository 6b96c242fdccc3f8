//! Handlers for item commands.

use chrono::Utc;
use tabled::{Table, Tabled};

use crate::adapter::outbound::sqlite::store::SqliteListStore;
use crate::cli::output;
use crate::domain::{Item, ItemId, ItemPatch, ListId};
use crate::error::Result;
use crate::service::ordering::Ordering;

#[derive(Tabled)]
struct ItemLine {
    #[tabled(rename = "ID")]
    id: ItemId,
    #[tabled(rename = "#")]
    position: i32,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: i32,
    #[tabled(rename = "Purchased")]
    purchased: &'static str,
}

impl From<&Item> for ItemLine {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            position: item.position,
            name: item.name.clone(),
            quantity: item.quantity,
            purchased: if item.purchased { "yes" } else { "no" },
        }
    }
}

/// Show a list's items in display order.
pub async fn show(store: SqliteListStore, id: ListId, json: bool) -> Result<()> {
    let items = Ordering::new(store).items(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }
    if items.is_empty() {
        output::note("List is empty.");
        return Ok(());
    }
    let table = Table::new(items.iter().map(ItemLine::from)).to_string();
    println!("{table}");
    Ok(())
}

/// Append an item.
pub async fn add(
    store: SqliteListStore,
    id: ListId,
    name: &str,
    quantity: Option<i32>,
    json: bool,
) -> Result<()> {
    let item = Ordering::new(store).append(id, name, quantity, Utc::now()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }
    output::ok(&format!(
        "added '{}' (x{}) at position {}",
        item.name, item.quantity, item.position
    ));
    Ok(())
}

/// Partial item update.
pub async fn update(
    store: SqliteListStore,
    id: ListId,
    item_id: ItemId,
    name: Option<String>,
    quantity: Option<i32>,
    purchased: Option<bool>,
    json: bool,
) -> Result<()> {
    let patch = ItemPatch {
        name,
        quantity,
        purchased,
    };
    let item = Ordering::new(store).update(id, item_id, patch).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }
    output::ok(&format!("updated item {}", item.id));
    Ok(())
}

/// Remove an item.
pub async fn remove(store: SqliteListStore, id: ListId, item_id: ItemId, json: bool) -> Result<()> {
    Ordering::new(store).delete(id, item_id).await?;

    if json {
        println!("{}", serde_json::json!({ "ok": true }));
        return Ok(());
    }
    output::ok(&format!("removed item {item_id}"));
    Ok(())
}

/// Rewrite the display order.
pub async fn reorder(
    store: SqliteListStore,
    id: ListId,
    order: &[ItemId],
    json: bool,
) -> Result<()> {
    Ordering::new(store).reorder(id, order).await?;

    if json {
        println!("{}", serde_json::json!({ "ok": true }));
        return Ok(());
    }
    output::ok(&format!("reordered {} item(s)", order.len()));
    Ok(())
}
