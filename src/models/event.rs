use crate::utils::date::derive_display_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged relationship event.
///
/// Serialized with camelCase keys (`monthOnly`, `displayDate`) so exported
/// files stay interchangeable with older exports of the same journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub description: String,
    pub score: i32, // bounded to [-8, 8] by the CLI and the import gate
    pub date: NaiveDate,
    #[serde(default)]
    pub month_only: bool,
    /// Render-ready date text, cached. Always re-derived on create/edit,
    /// never edited on its own.
    #[serde(default)]
    pub display_date: String,
}

/// User-authored fields of an event, before an id is assigned.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub description: String,
    pub score: i32,
    pub date: NaiveDate,
    pub month_only: bool,
}

impl Event {
    /// Recompute the cached `display_date` from `date` + `month_only`.
    pub fn refresh_display_date(&mut self) {
        self.display_date = derive_display_date(&self.date, self.month_only);
    }
}
