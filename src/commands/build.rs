//! Run the publishing stages in sequence

use anyhow::Result;

use crate::Site;

/// Back-fill dates, generate pages, then write the sitemap
pub fn run(site: &Site) -> Result<()> {
    super::dates::run(site)?;
    super::generate::run(site)?;
    super::sitemap::run(site)?;
    Ok(())
}
