//! Handlers for the `status` and `theme` commands.

use chrono::Utc;

use crate::adapter::outbound::sqlite::store::{SqliteListStore, SqlitePreferenceStore};
use crate::cli::output;
use crate::domain::history::HistoryFilter;
use crate::error::Result;
use crate::port::outbound::store::ListStore;
use crate::service::preferences::Preferences;
use crate::service::status::{self, Status};

/// Show service health, version and storage overview.
pub async fn show(store: SqliteListStore, json: bool) -> Result<()> {
    let health = Status::new(store.clone()).health(Utc::now()).await;
    let version = status::version();

    let lists = store.all_lists().await.unwrap_or_default();
    let finalized = store
        .count_finalized(&HistoryFilter::default())
        .await
        .unwrap_or(0);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "health": health,
                "version": version,
                "lists": lists.len(),
                "finalized": finalized,
            })
        );
        return Ok(());
    }

    println!();
    println!("feira v{}", version.version);
    println!("{}", "━".repeat(56));
    if health.database {
        output::ok("database reachable");
    } else {
        output::error("database unreachable");
    }
    output::key_value("Lists", lists.len());
    output::key_value("Finalized", finalized);
    output::key_value("Docs", version.docs);
    println!();
    Ok(())
}

/// Show or change the persisted theme.
pub async fn theme(
    store: SqlitePreferenceStore,
    requested: Option<&str>,
    json: bool,
) -> Result<()> {
    let preferences = Preferences::new(store);
    let theme = match requested {
        Some(raw) => preferences.set(raw, Utc::now()).await?,
        None => preferences.current(Utc::now()).await?,
    };

    if json {
        println!("{}", serde_json::json!({ "tema": theme }));
        return Ok(());
    }
    output::key_value("Theme", theme);
    Ok(())
}
