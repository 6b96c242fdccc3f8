//! Theme preference stored in the single-row config table.

use chrono::{DateTime, Utc};

use crate::domain::preferences::Theme;
use crate::error::Result;
use crate::port::outbound::store::PreferenceStore;

/// Reads and updates the persisted operator preferences.
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current theme, materializing the default row on first read.
    pub async fn current(&self, now: DateTime<Utc>) -> Result<Theme> {
        self.store.load_theme(now).await
    }

    /// Validate and persist a new theme.
    pub async fn set(&self, raw: &str, now: DateTime<Utc>) -> Result<Theme> {
        let theme = Theme::parse(raw)?;
        self.store.save_theme(theme, now).await
    }
}
