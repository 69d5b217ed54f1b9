//! Local journal: an offline event log kept on this machine only.
//!
//! The journal is an independent dataset with its own entry shape. It is
//! never synced to an evman-server; persistence is a single JSON file
//! (see `store`).

pub mod store;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity/category of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Info,
    Warning,
    Error,
    Success,
    Debug,
}

impl EntryKind {
    pub const ALL: [EntryKind; 5] = [
        EntryKind::Info,
        EntryKind::Warning,
        EntryKind::Error,
        EntryKind::Success,
        EntryKind::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Info => "info",
            EntryKind::Warning => "warning",
            EntryKind::Error => "error",
            EntryKind::Success => "success",
            EntryKind::Debug => "debug",
        }
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(EntryKind::Info),
            "warning" => Ok(EntryKind::Warning),
            "error" => Ok(EntryKind::Error),
            "success" => Ok(EntryKind::Success),
            "debug" => Ok(EntryKind::Debug),
            other => Err(format!(
                "Unknown kind '{}'. Expected info, warning, error, success or debug",
                other
            )),
        }
    }
}

/// A single journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Moment the entry was logged; the date/time shown in listings is
    /// derived from this at render time.
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    pub fn new(name: String, description: Option<String>, kind: EntryKind) -> Self {
        Entry {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// Time window filter measured against entry timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl RangeFilter {
    /// Whether `timestamp` falls inside the window ending at `now`.
    pub fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            RangeFilter::All => true,
            RangeFilter::Today => timestamp.date_naive() == now.date_naive(),
            RangeFilter::Week => timestamp >= now - Duration::days(7),
            RangeFilter::Month => timestamp >= now - Duration::days(30),
        }
    }
}

impl std::str::FromStr for RangeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(RangeFilter::All),
            "today" => Ok(RangeFilter::Today),
            "week" => Ok(RangeFilter::Week),
            "month" => Ok(RangeFilter::Month),
            other => Err(format!(
                "Unknown range '{}'. Expected all, today, week or month",
                other
            )),
        }
    }
}

/// Apply search, kind, and range filters, combined by logical AND.
pub fn filter_entries<'a>(
    entries: &'a [Entry],
    search: Option<&str>,
    kind: Option<EntryKind>,
    range: RangeFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|e| matches_search(e, search))
        .filter(|e| kind.is_none_or(|k| e.kind == k))
        .filter(|e| range.contains(e.timestamp, now))
        .collect()
}

/// Case-insensitive substring match over name and description.
fn matches_search(entry: &Entry, search: Option<&str>) -> bool {
    let Some(term) = search else { return true };
    let term = term.to_lowercase();

    entry.name.to_lowercase().contains(&term)
        || entry
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&term))
}
