//! Publish date back-fill

use chrono::NaiveDate;
use rand::Rng;

use super::Entry;
use crate::helpers::{days_before, publish_date};

/// Pick a formatted date between `window_days` days ago and `today`, inclusive
pub fn random_publish_date<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    window_days: u32,
) -> String {
    let delta = rng.gen_range(0..=window_days);
    publish_date(days_before(today, delta))
}

/// Assign a random date to every entry with content but no date
///
/// Returns the number of entries that received a date.
pub fn backfill_dates<R: Rng + ?Sized>(
    entries: &mut [Entry],
    rng: &mut R,
    today: NaiveDate,
    window_days: u32,
) -> usize {
    let mut filled = 0;

    for entry in entries.iter_mut() {
        if let Some(content) = entry.content.as_mut() {
            if content.date.is_none() {
                content.date = Some(random_publish_date(rng, today, window_days));
                tracing::debug!("Assigned date {:?} to {:?}", content.date, entry.h1);
                filled += 1;
            }
        }
    }

    filled
}
