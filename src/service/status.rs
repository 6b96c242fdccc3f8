//! Health and version reporting.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::port::outbound::store::ListStore;

/// Health probe outcome.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub database: bool,
    pub timestamp: DateTime<Utc>,
}

/// Build metadata reported alongside the health probe.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub author: &'static str,
    pub docs: &'static str,
    pub privacy: &'static str,
}

/// Reports service health and build metadata.
pub struct Status<S> {
    store: S,
}

impl<S: ListStore> Status<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Probe database reachability.
    pub async fn health(&self, now: DateTime<Utc>) -> Health {
        let database = self.store.ping().await.is_ok();
        Health {
            status: if database { "ok" } else { "degraded" },
            database,
            timestamp: now,
        }
    }
}

/// Static build metadata.
#[must_use]
pub fn version() -> VersionInfo {
    VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        author: env!("CARGO_PKG_AUTHORS"),
        docs: "https://github.com/usealtoal/feira#readme",
        privacy: "https://github.com/usealtoal/feira/blob/main/PRIVACY.md",
    }
}
