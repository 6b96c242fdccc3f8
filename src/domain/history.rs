//! History query types: period filters, pagination and item previews.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use super::id::{ItemId, ListId};
use super::item::Item;
use crate::error::{Error, Result};

/// Inclusive bounds on `finalized_at` derived from the requested period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Resolve raw period parameters against a fixed `now`.
    ///
    /// `7d` and `30d` (alias `mes`) are rolling windows ending at `now`;
    /// `custom` requires both bounds. An absent or empty period defaults to
    /// the 30-day window.
    pub fn resolve(
        period: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let period = period.filter(|p| !p.trim().is_empty()).unwrap_or("30d");
        match period {
            "7d" => Ok(Self {
                start: Some(now - Duration::days(7)),
                end: None,
            }),
            "30d" | "mes" => Ok(Self {
                start: Some(now - Duration::days(30)),
                end: None,
            }),
            "custom" => {
                let (Some(start), Some(end)) = (start, end) else {
                    return Err(Error::validation(
                        "Período custom exige period_start e period_end",
                    ));
                };
                let start = parse_timestamp(start)?;
                let end = parse_timestamp(end)?;
                if end < start {
                    return Err(Error::validation(
                        "period_end não pode ser anterior a period_start",
                    ));
                }
                Ok(Self {
                    start: Some(start),
                    end: Some(end),
                })
            }
            other => Err(Error::validation(format!("Período inválido: '{other}'"))),
        }
    }
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (taken as
/// midnight UTC).
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| Error::validation(format!("Data inválida: '{raw}'")))
}

/// Raw history query parameters as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct HistoryRequest {
    pub search: Option<String>,
    pub period: Option<String>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Storage-level filter: finalized lists only, with an optional name
/// substring and a `finalized_at` window.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub search: Option<String>,
    pub window: TimeWindow,
}

/// Item summary shown inline with a history entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPreview {
    pub id: ItemId,
    pub name: String,
    pub quantity: i32,
    pub purchased: bool,
}

impl From<&Item> for ItemPreview {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            purchased: item.purchased,
        }
    }
}

/// Bounded projection of a finalized list for history browsing.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: ListId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub finalized: bool,
    pub finalized_at: Option<DateTime<Utc>>,
    pub itens_count: i64,
    pub preview_itens: Vec<ItemPreview>,
}

/// Pagination envelope metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_more: bool,
}

/// One page of history results.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    pub data: Vec<HistoryEntry>,
    pub meta: PageMeta,
}
