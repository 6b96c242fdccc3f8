//! Command-line interface definitions.

pub mod export;
pub mod history;
pub mod items;
pub mod lists;
pub mod output;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::store::{SqliteListStore, SqlitePreferenceStore};
use crate::config::Config;
use crate::domain::{ItemId, ListId};
use crate::error::Result;

/// Feira - shopping-list management backend.
#[derive(Parser, Debug)]
#[command(name = "feira")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "feira.toml", global = true)]
    pub config: PathBuf,

    /// Emit machine-readable JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all shopping lists
    Lists,

    /// Create a new list
    Create {
        /// Name of the new list
        name: String,
    },

    /// Rename a list
    Rename {
        id: ListId,
        /// New name
        name: String,
    },

    /// Delete a list and all of its items
    Delete {
        id: ListId,
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show the items of a list in display order
    Items { id: ListId },

    /// Append an item to a list
    Add {
        id: ListId,
        /// Item name
        name: String,
        /// Quantity (defaults to 1)
        #[arg(short, long)]
        quantity: Option<i32>,
    },

    /// Update an item; only the given flags change
    Update {
        id: ListId,
        item: ItemId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        quantity: Option<i32>,
        #[arg(long)]
        purchased: Option<bool>,
    },

    /// Remove an item from a list
    Remove { id: ListId, item: ItemId },

    /// Rewrite the display order of a list; unmentioned items keep their
    /// relative order after the given ones
    Reorder {
        id: ListId,
        /// Item ids in the desired order
        #[arg(required = true)]
        items: Vec<ItemId>,
    },

    /// Mark a list as finalized (archive it)
    Finalize {
        id: ListId,
        /// Reactivate instead: clears the finalized state
        #[arg(long)]
        undo: bool,
    },

    /// Purchased/total counters for a list
    Summary { id: ListId },

    /// Browse the history of finalized lists
    History(HistoryArgs),

    /// Restore a finalized list into a new active list (items reset to
    /// unpurchased)
    Restore {
        id: ListId,
        /// Name for the new list (collisions get a suffix)
        #[arg(long)]
        name: Option<String>,
    },

    /// Duplicate a finalized list, keeping purchased marks
    Duplicate {
        id: ListId,
        /// Name for the new list (collisions get a suffix)
        #[arg(long)]
        name: Option<String>,
    },

    /// Export a list as txt or csv
    Export {
        id: ListId,
        /// Output format: txt or csv
        #[arg(long, default_value = "txt")]
        format: String,
        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change the UI theme (claro/escuro)
    Theme {
        /// New theme; omit to show the current one
        theme: Option<String>,
    },

    /// Service health, version and storage overview
    Status,
}

/// Arguments for the `history` subcommand.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Name substring to search for
    #[arg(long)]
    pub search: Option<String>,

    /// Period: 7d, 30d (alias mes) or custom
    #[arg(long)]
    pub period: Option<String>,

    /// Window start for --period custom (RFC 3339 or YYYY-MM-DD)
    #[arg(long = "from")]
    pub period_start: Option<String>,

    /// Window end for --period custom (RFC 3339 or YYYY-MM-DD)
    #[arg(long = "to")]
    pub period_end: Option<String>,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<i64>,

    /// Page size, 1 to 50
    #[arg(long)]
    pub limit: Option<i64>,
}

/// Open the store and dispatch the parsed command.
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let pool = create_pool(&config.database.url, config.database.max_connections)?;
    run_migrations(&pool)?;
    let store = SqliteListStore::new(pool.clone());
    let json = cli.json;

    match cli.command {
        Commands::Lists => lists::all(store, json).await,
        Commands::Create { name } => lists::create(store, &name, json).await,
        Commands::Rename { id, name } => lists::rename(store, id, &name, json).await,
        Commands::Delete { id, yes } => lists::delete(store, id, yes, json).await,
        Commands::Items { id } => items::show(store, id, json).await,
        Commands::Add { id, name, quantity } => {
            items::add(store, id, &name, quantity, json).await
        }
        Commands::Update {
            id,
            item,
            name,
            quantity,
            purchased,
        } => items::update(store, id, item, name, quantity, purchased, json).await,
        Commands::Remove { id, item } => items::remove(store, id, item, json).await,
        Commands::Reorder { id, items: order } => items::reorder(store, id, &order, json).await,
        Commands::Finalize { id, undo } => lists::finalize(store, id, !undo, json).await,
        Commands::Summary { id } => lists::summary(store, id, json).await,
        Commands::History(args) => history::browse(store, &args, json).await,
        Commands::Restore { id, name } => {
            history::restore(store, id, name.as_deref(), json).await
        }
        Commands::Duplicate { id, name } => {
            history::duplicate(store, id, name.as_deref(), json).await
        }
        Commands::Export { id, format, output } => {
            export::render(store, id, &format, output.as_deref(), json).await
        }
        Commands::Theme { theme } => {
            status::theme(SqlitePreferenceStore::new(pool), theme.as_deref(), json).await
        }
        Commands::Status => status::show(store, json).await,
    }
}
