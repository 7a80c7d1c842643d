use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use super::direction::ConversionDirection;

/// Maximum number of conversions kept in the history list
pub const HISTORY_CAPACITY: usize = 5;
/// Number of characters kept in history previews
pub const PREVIEW_CHARS: usize = 50;
/// Suffix appended to previews cut at [`PREVIEW_CHARS`]
pub const ELLIPSIS: &str = "...";

/// Truncate text to the first [`PREVIEW_CHARS`] characters, appending
/// [`ELLIPSIS`] only when something was cut off.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let mut out: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        out.push_str(ELLIPSIS);
    }
    out
}

/// One finished conversion. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionHistoryItem {
    id: Uuid,
    original: String,
    converted: String,
    direction: ConversionDirection,
    timestamp: DateTime<Utc>,
}

impl ConversionHistoryItem {
    pub fn new(
        original: &str,
        converted: &str,
        direction: ConversionDirection,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: time_ordered_id(&timestamp),
            original: preview(original),
            converted: preview(converted),
            direction,
            timestamp,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn converted(&self) -> &str {
        &self.converted
    }

    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

fn time_ordered_id(timestamp: &DateTime<Utc>) -> Uuid {
    let seconds = u64::try_from(timestamp.timestamp()).unwrap_or(0);
    Uuid::new_v7(Timestamp::from_unix(NoContext, seconds, timestamp.timestamp_subsec_nanos()))
}

/// Bounded most-recent-first list of conversions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryList {
    items: Vec<ConversionHistoryItem>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front, evicting the oldest entries beyond [`HISTORY_CAPACITY`]
    pub fn prepend(&mut self, item: ConversionHistoryItem) {
        self.items.insert(0, item);
        self.items.truncate(HISTORY_CAPACITY);
    }

    pub fn items(&self) -> &[ConversionHistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionHistoryItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a HistoryList {
    type Item = &'a ConversionHistoryItem;
    type IntoIter = std::slice::Iter<'a, ConversionHistoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
