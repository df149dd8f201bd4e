//! Date input normalization and report ranges.
//!
//! Users type dates the way they write them on paper (`05.01.2024`) or the way
//! a machine prints them (`2024-01-05`). Both are turned into UTC day
//! boundaries here, and the canonical `YYYY-MM-DDTHH:MM:SSZ` form is what the
//! provider receives as `start`/`end` query parameters.
//!
//! ## Accepted inputs
//!
//! - `DD.MM.YYYY` and `YYYY-MM-DD`
//! - `DD-MM-YYYY`
//! - `DD.MM` and `DD-MM` (current year)
//!
//! ```rust
//! use clockrep::libs::dates::{normalize, to_canonical};
//!
//! let start = normalize("05.01.2024", false)?;
//! assert_eq!(to_canonical(&start), "2024-01-05T00:00:00Z");
//! # Ok::<(), clockrep::libs::error::ReportError>(())
//! ```

use crate::libs::error::ReportError;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

const FULL_FORMATS: [&str; 3] = ["%d.%m.%Y", "%Y-%m-%d", "%d-%m-%Y"];

/// Parses `input` and returns midnight of that day, or 23:59:59 when `end_of_day` is set.
pub fn normalize(input: &str, end_of_day: bool) -> Result<DateTime<Utc>, ReportError> {
    normalize_on(input, end_of_day, Utc::now().date_naive())
}

/// Same as [`normalize`], with `today` supplying the year for short inputs.
pub fn normalize_on(input: &str, end_of_day: bool, today: NaiveDate) -> Result<DateTime<Utc>, ReportError> {
    let day = parse_day(input, today)?;
    Ok(day_boundary(day, end_of_day))
}

pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate, ReportError> {
    let trimmed = input.trim();

    for format in FULL_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    parse_short_day(trimmed, today).ok_or_else(|| ReportError::InvalidDateFormat(input.to_string()))
}

// "05.01", "05.01." and "05-01" without a year
fn parse_short_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.strip_suffix('.').unwrap_or(input);
    let separator = if input.contains('.') { '.' } else { '-' };
    let mut parts = input.split(separator);

    let day = parts.next()?;
    let month = parts.next()?;
    if parts.next().is_some() || !is_short_number(day) || !is_short_number(month) {
        return None;
    }

    NaiveDate::from_ymd_opt(today.year(), month.parse().ok()?, day.parse().ok()?)
}

fn is_short_number(part: &str) -> bool {
    (1..=2).contains(&part.len()) && part.chars().all(|c| c.is_ascii_digit())
}

pub fn day_boundary(day: NaiveDate, end_of_day: bool) -> DateTime<Utc> {
    let midnight = day.and_time(NaiveTime::MIN);
    let instant = if end_of_day { midnight + Duration::seconds(86_399) } else { midnight };
    instant.and_utc()
}

/// Wire form expected by the provider, e.g. `2024-01-05T23:59:59Z`.
pub fn to_canonical(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Inclusive report period, from midnight of the first day to the last second of the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    pub fn parse(start: &str, end: &str) -> Result<Self, ReportError> {
        let today = Utc::now().date_naive();
        Self::from_dates(parse_day(start, today)?, parse_day(end, today)?)
    }

    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if end < start {
            return Err(ReportError::InvalidDateRange {
                start: start.format("%d.%m.%Y").to_string(),
                end: end.format("%d.%m.%Y").to_string(),
            });
        }
        Ok(Self {
            start: day_boundary(start, false),
            end: day_boundary(end, true),
        })
    }

    /// First to last day of the month containing `today`.
    pub fn month_of(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        let next_month = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };
        let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(first);

        Self {
            start: day_boundary(first, false),
            end: day_boundary(last, true),
        }
    }

    pub fn current_month() -> Self {
        Self::month_of(Utc::now().date_naive())
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    pub fn as_canonical(&self) -> (String, String) {
        (to_canonical(&self.start), to_canonical(&self.end))
    }

    /// Month span shown in the report title line.
    pub fn title(&self) -> String {
        let (start, end) = (self.start_date(), self.end_date());

        if (start.year(), start.month()) == (end.year(), end.month()) {
            start.format("%B %Y").to_string()
        } else if start.year() == end.year() {
            format!("{} – {}", start.format("%B"), end.format("%B %Y"))
        } else {
            format!("{} – {}", start.format("%B %Y"), end.format("%B %Y"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn short_forms_take_year_from_today() {
        let today = ymd(2025, 6, 30);
        assert_eq!(parse_day("05.01", today).unwrap(), ymd(2025, 1, 5));
        assert_eq!(parse_day("05.01.", today).unwrap(), ymd(2025, 1, 5));
        assert_eq!(parse_day("5-1", today).unwrap(), ymd(2025, 1, 5));
    }

    #[test]
    fn rejects_nonexistent_days() {
        let today = ymd(2025, 6, 30);
        assert!(parse_day("31.02.2024", today).is_err());
        assert!(parse_day("31.02", today).is_err());
        assert!(parse_day("2024/01/05", today).is_err());
        assert!(parse_day("", today).is_err());
    }

    #[test]
    fn month_of_december_ends_on_the_31st() {
        let range = DateRange::month_of(ymd(2024, 12, 15));
        assert_eq!(range.start_date(), ymd(2024, 12, 1));
        assert_eq!(range.end_date(), ymd(2024, 12, 31));
    }

    #[test]
    fn month_of_february_in_leap_year() {
        let range = DateRange::month_of(ymd(2024, 2, 10));
        assert_eq!(range.end_date(), ymd(2024, 2, 29));
    }
}
