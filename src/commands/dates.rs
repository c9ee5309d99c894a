//! Back-fill publish dates in the keywords file

use anyhow::Result;
use chrono::Local;

use crate::content::dates::backfill_dates;
use crate::content::ContentLoader;
use crate::Site;

/// Give every undated entry a random recent date and rewrite the file
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(site);
    let mut entries = loader.load_entries()?;

    let today = Local::now().date_naive();
    let mut rng = rand::thread_rng();
    let filled = backfill_dates(
        &mut entries,
        &mut rng,
        today,
        site.config.date_window_days,
    );

    loader.save_entries(&entries)?;
    tracing::info!("Assigned dates to {} of {} entries", filled, entries.len());

    Ok(())
}
