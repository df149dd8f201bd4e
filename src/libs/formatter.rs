//! Number formatting for report output.
//!
//! Hours are always printed with two decimals. The separator is configurable
//! because the reports go to customers who expect `1,50` rather than `1.50`.
//!
//! ```rust
//! use clockrep::libs::formatter::format_hours;
//!
//! assert_eq!(format_hours(1.5, ','), "1,50");
//! assert_eq!(format_hours(12.0, '.'), "12.00");
//! ```

use chrono::Duration;

pub fn format_hours(hours: f64, decimal_separator: char) -> String {
    let formatted = format!("{:.2}", hours);
    if decimal_separator == '.' {
        formatted
    } else {
        formatted.replace('.', &decimal_separator.to_string())
    }
}

/// Fractional hours in a duration, unrounded.
pub fn duration_hours(duration: &Duration) -> f64 {
    duration.num_seconds() as f64 / 3600.0
}
