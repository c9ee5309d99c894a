//! Write the sitemap

use anyhow::Result;

use crate::content::ContentLoader;
use crate::generator::sitemap::write_sitemap;
use crate::Site;

/// Write `sitemap.xml` for every content-bearing entry
pub fn run(site: &Site) -> Result<()> {
    let entries = ContentLoader::new(site).load_entries()?;
    let path = write_sitemap(site, &entries)?;
    println!("{} has been created successfully.", path.display());
    Ok(())
}
