//! Date helper functions

use chrono::{Duration, NaiveDate};

/// Format a date the way post dates are shown (like "january 05, 2024")
pub fn publish_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string().to_lowercase()
}

/// The date `days` days before `date`, saturating at the earliest representable date
pub fn days_before(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_signed(Duration::days(i64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}
