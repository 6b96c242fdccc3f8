//! Application services, one per operation area.

pub mod cloning;
pub mod export;
pub mod history;
pub mod lifecycle;
pub mod ordering;
pub mod preferences;
pub mod status;

use crate::error::{Error, Result};

/// Trim a caller-supplied name and reject it when empty.
pub(crate) fn require_name<'a>(raw: &'a str, message: &str) -> Result<&'a str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Error::validation(message.to_owned()));
    }
    Ok(name)
}
