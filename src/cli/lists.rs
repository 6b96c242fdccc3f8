//! Handlers for list lifecycle commands.

use chrono::{DateTime, Utc};
use tabled::{Table, Tabled};

use crate::adapter::outbound::sqlite::store::SqliteListStore;
use crate::cli::output;
use crate::domain::{ListId, ListSummary};
use crate::error::Result;
use crate::service::lifecycle::Lifecycle;

#[derive(Tabled)]
struct ListLine {
    #[tabled(rename = "ID")]
    id: ListId,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Items")]
    items: i64,
}

fn short_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

impl From<&ListSummary> for ListLine {
    fn from(summary: &ListSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name.clone(),
            created: short_date(&summary.created_at),
            status: if summary.finalized {
                "finalized".to_owned()
            } else {
                "active".to_owned()
            },
            items: summary.item_count,
        }
    }
}

/// Show all lists.
pub async fn all(store: SqliteListStore, json: bool) -> Result<()> {
    let lists = Lifecycle::new(store).all().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lists)?);
        return Ok(());
    }
    if lists.is_empty() {
        output::note("No lists yet.");
        println!(
            "Create one with {}",
            output::highlight("feira create <name>")
        );
        return Ok(());
    }

    let table = Table::new(lists.iter().map(ListLine::from)).to_string();
    println!("{table}");
    Ok(())
}

/// Create a new list.
pub async fn create(store: SqliteListStore, name: &str, json: bool) -> Result<()> {
    let list = Lifecycle::new(store).create(name, Utc::now()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }
    output::ok(&format!("created list '{}' (id {})", list.name, list.id));
    Ok(())
}

/// Rename a list.
pub async fn rename(store: SqliteListStore, id: ListId, name: &str, json: bool) -> Result<()> {
    let list = Lifecycle::new(store).rename(id, name).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }
    output::ok(&format!("renamed list {} to '{}'", list.id, list.name));
    Ok(())
}

/// Delete a list after confirmation.
pub async fn delete(store: SqliteListStore, id: ListId, yes: bool, json: bool) -> Result<()> {
    if !yes && !json {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Delete list {id} and all of its items?"))
            .default(false)
            .interact()?;
        if !confirmed {
            output::note("aborted");
            return Ok(());
        }
    }

    Lifecycle::new(store).delete(id).await?;

    if json {
        println!("{}", serde_json::json!({ "ok": true }));
        return Ok(());
    }
    output::ok(&format!("deleted list {id}"));
    Ok(())
}

/// Finalize or reactivate a list.
pub async fn finalize(store: SqliteListStore, id: ListId, desired: bool, json: bool) -> Result<()> {
    let summary = Lifecycle::new(store).finalize(id, desired, Utc::now()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    if summary.finalized {
        output::ok(&format!("finalized list '{}'", summary.name));
    } else {
        output::ok(&format!("reactivated list '{}'", summary.name));
    }
    Ok(())
}

/// Purchased/total counters.
pub async fn summary(store: SqliteListStore, id: ListId, json: bool) -> Result<()> {
    let totals = Lifecycle::new(store).totals(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }
    output::key_value("List", totals.id);
    output::key_value("Items", totals.items);
    output::key_value("Purchased", totals.purchased);
    Ok(())
}
