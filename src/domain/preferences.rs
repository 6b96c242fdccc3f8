//! Operator preferences persisted in the single-row config table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// UI theme. Stored and serialized under its Portuguese wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "claro")]
    Claro,
    #[serde(rename = "escuro")]
    Escuro,
}

impl Theme {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Claro => "claro",
            Theme::Escuro => "escuro",
        }
    }

    /// Parse a caller-supplied theme name.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim() {
            "claro" => Ok(Theme::Claro),
            "escuro" => Ok(Theme::Escuro),
            other => Err(Error::validation(format!("Tema inválido: '{other}'"))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
