//! Resolved time entries and the dataset a report is built from.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One provider time entry joined against the project, client and user master lists.
///
/// Ids and names are blank when the provider left them out or no master
/// record matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub description: String,
    pub user_id: String,
    pub user_name: String,
    pub client_id: String,
    pub client_name: String,
    pub project_id: String,
    pub project_name: String,
    pub task_name: String,
    pub start: DateTime<Utc>,
    pub duration_hours: f64,
}

impl TimeEntry {
    /// Calendar day of the entry as printed in reports.
    pub fn formatted_date(&self) -> String {
        self.start.format("%d.%m.%Y").to_string()
    }
}

/// Ordered entries for one date range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDataset {
    entries: Vec<TimeEntry>,
}

impl ReportDataset {
    pub fn new(entries: Vec<TimeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.duration_hours).sum()
    }

    /// Keeps entries for which `predicate` holds, preserving order.
    pub fn retain_where<F>(&self, predicate: F) -> Self
    where
        F: Fn(&TimeEntry) -> bool,
    {
        self.entries.iter().filter(|e| predicate(e)).cloned().collect()
    }

    /// Stable sort by start timestamp, the order rows appear in a report.
    pub fn sorted_by_start(mut self) -> Self {
        self.entries.sort_by_key(|e| e.start);
        self
    }
}

impl FromIterator<TimeEntry> for ReportDataset {
    fn from_iter<I: IntoIterator<Item = TimeEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ReportDataset {
    type Item = TimeEntry;
    type IntoIter = std::vec::IntoIter<TimeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReportDataset {
    type Item = &'a TimeEntry;
    type IntoIter = std::slice::Iter<'a, TimeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rounds fractional hours to two decimals.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
