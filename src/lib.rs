//! Feira - shopping-list management backend.
//!
//! This crate provides the storage, services and operator CLI for managing
//! shopping lists: active lists with ordered items, a browsable history of
//! finalized lists, and restore/duplicate operations that copy a finalized
//! list back into the active set.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - plain data types: lists, items, history queries, themes
//! - **`port`** - trait boundaries the services depend on
//!   - `ListStore` - persistence for lists and items
//!   - `PreferenceStore` - persistence for operator preferences
//! - **`adapter`** - SQLite implementation of the ports (Diesel ORM)
//! - **`service`** - one component per operation area:
//!   - `Lifecycle` - create/rename/delete and the finalize transition
//!   - `Ordering` - append, partial update and reorder reconciliation
//!   - `History` - search/period filters, pagination, bounded previews
//!   - `Cloning` - restore and duplicate with name-collision resolution
//!   - `Export` - txt/csv rendering
//! - **`cli`** - clap command tree dispatching into the services
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with env overrides
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use feira::adapter::outbound::sqlite::database::connection::create_pool;
//! use feira::adapter::outbound::sqlite::store::SqliteListStore;
//! use feira::service::lifecycle::Lifecycle;
//!
//! # async fn demo() -> feira::error::Result<()> {
//! let pool = create_pool("feira.db", 5)?;
//! let lifecycle = Lifecycle::new(SqliteListStore::new(pool));
//! let list = lifecycle.create("Compras da semana", chrono::Utc::now()).await?;
//! println!("created list {}", list.id);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;
