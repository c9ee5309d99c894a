//! Generator module - writes blog pages and the sitemap

mod similar;
pub mod sitemap;

pub use similar::{SimilarPost, SimilarPosts, SIMILAR_POST_COUNT};

use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use std::path::PathBuf;

use crate::content::{ContentError, ContentLoader, Entry};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Static page generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a generator using the site's configured template
    pub fn new(site: &Site) -> Result<Self> {
        let template = ContentLoader::new(site).load_template()?;
        Ok(Self::with_template(site, template))
    }

    /// Create a generator from an already loaded template
    pub fn with_template(site: &Site, template: impl Into<String>) -> Self {
        Self {
            site: site.clone(),
            renderer: TemplateRenderer::new(template),
        }
    }

    /// Output path of an entry's page
    pub fn page_path(&self, slug: &str) -> PathBuf {
        self.site.blog_dir.join(format!("{}.html", slug))
    }

    /// Render and write one page per content-bearing entry
    ///
    /// Returns the paths written, in entry order.
    pub fn generate_pages<R: Rng + ?Sized>(
        &self,
        entries: &[Entry],
        rng: &mut R,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            if !entry.has_content() {
                tracing::debug!("Skipping entry {} ({:?}): no content", index, entry.h1);
                continue;
            }

            let slug = page_slug(index, entry)?;
            let similar = SimilarPosts::sample(&self.site.config, entries, index, rng);
            let html = self.renderer.render(entry, &similar);

            let output_path = self.page_path(&slug);
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)
                .with_context(|| format!("Failed to write {:?}", output_path))?;
            tracing::info!("Saved: {:?}", output_path);

            written.push(output_path);
        }

        Ok(written)
    }
}

/// Slug of a content-bearing entry, rejecting titles that cannot name a file
pub fn page_slug(index: usize, entry: &Entry) -> Result<String, ContentError> {
    if entry.h1.trim().is_empty() {
        return Err(ContentError::MissingTitle { index });
    }

    let slug = entry.slug();
    if slug.is_empty() {
        return Err(ContentError::EmptySlug {
            index,
            title: entry.h1.clone(),
        });
    }

    Ok(slug)
}
