use crate::libs::entry::{round_hours, ReportDataset};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Hours booked in one ISO calendar week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekHours {
    pub year: i32,
    pub week: u32,
    pub hours: f64,
}

impl WeekHours {
    /// German calendar-week label, e.g. `KW 03 (2024)`.
    pub fn label(&self) -> String {
        format!("KW {:02} ({})", self.week, self.year)
    }
}

/// Sums entry hours per ISO week, earliest week first.
///
/// The ISO year is used, so 30.12.2024 counts towards `KW 01 (2025)`.
pub fn weekly_hours(dataset: &ReportDataset) -> Vec<WeekHours> {
    let mut weeks: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for entry in dataset {
        let iso = entry.start.iso_week();
        *weeks.entry((iso.year(), iso.week())).or_default() += entry.duration_hours;
    }

    weeks
        .into_iter()
        .map(|((year, week), hours)| WeekHours {
            year,
            week,
            hours: round_hours(hours),
        })
        .collect()
}

pub trait SummaryTotals {
    fn total_hours(&self) -> f64;
}

impl SummaryTotals for [WeekHours] {
    fn total_hours(&self) -> f64 {
        round_hours(self.iter().map(|w| w.hours).sum())
    }
}
