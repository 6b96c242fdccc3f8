//! Handlers for history browsing, restore and duplicate.

use chrono::Utc;
use tabled::{Table, Tabled};

use crate::adapter::outbound::sqlite::store::SqliteListStore;
use crate::cli::output;
use crate::cli::HistoryArgs;
use crate::domain::history::{HistoryEntry, HistoryRequest};
use crate::domain::ListId;
use crate::error::Result;
use crate::service::cloning::Cloning;
use crate::service::history::History;

#[derive(Tabled)]
struct HistoryLine {
    #[tabled(rename = "ID")]
    id: ListId,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Finalized")]
    finalized_at: String,
    #[tabled(rename = "Items")]
    items: i64,
    #[tabled(rename = "Preview")]
    preview: String,
}

impl From<&HistoryEntry> for HistoryLine {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            finalized_at: entry
                .finalized_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            items: entry.itens_count,
            preview: entry
                .preview_itens
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Browse finalized lists.
pub async fn browse(store: SqliteListStore, args: &HistoryArgs, json: bool) -> Result<()> {
    let request = HistoryRequest {
        search: args.search.clone(),
        period: args.period.clone(),
        period_start: args.period_start.clone(),
        period_end: args.period_end.clone(),
        page: args.page,
        limit: args.limit,
    };
    let page = History::new(store).page(&request, Utc::now()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }
    if page.data.is_empty() {
        output::note("No finalized lists in this period.");
        return Ok(());
    }
    let table = Table::new(page.data.iter().map(HistoryLine::from)).to_string();
    println!("{table}");
    println!(
        "page {}/{} · {} list(s) total{}",
        page.meta.page,
        (page.meta.total + page.meta.limit - 1) / page.meta.limit,
        page.meta.total,
        if page.meta.has_more { " · more available" } else { "" }
    );
    Ok(())
}

/// Restore a finalized list into a fresh active list.
pub async fn restore(
    store: SqliteListStore,
    id: ListId,
    name: Option<&str>,
    json: bool,
) -> Result<()> {
    let list = Cloning::new(store).restore(id, name, Utc::now()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }
    output::ok(&format!("restored as '{}' (id {})", list.name, list.id));
    Ok(())
}

/// Duplicate a finalized list, keeping purchased marks.
pub async fn duplicate(
    store: SqliteListStore,
    id: ListId,
    name: Option<&str>,
    json: bool,
) -> Result<()> {
    let list = Cloning::new(store).duplicate(id, name, Utc::now()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }
    output::ok(&format!("duplicated as '{}' (id {})", list.name, list.id));
    Ok(())
}
