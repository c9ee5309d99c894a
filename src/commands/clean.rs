//! Remove generated output

use anyhow::Result;
use std::fs;
use walkdir::WalkDir;

use crate::generator::sitemap::sitemap_path;
use crate::Site;

/// Delete the generated blog pages and the sitemap
///
/// Other files in the public directory are left alone.
pub fn run(site: &Site) -> Result<()> {
    if site.blog_dir.exists() {
        let pages = WalkDir::new(&site.blog_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
            .count();
        fs::remove_dir_all(&site.blog_dir)?;
        tracing::info!("Deleted: {:?} ({} pages)", site.blog_dir, pages);
    }

    let sitemap = sitemap_path(site);
    if sitemap.exists() {
        fs::remove_file(&sitemap)?;
        tracing::info!("Deleted: {:?}", sitemap);
    }

    Ok(())
}
