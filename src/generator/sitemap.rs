//! sitemap.xml generation

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::page_slug;
use crate::config::SiteConfig;
use crate::content::Entry;
use crate::helpers::escape_xml;
use crate::Site;

const SITEMAP_FILE: &str = "sitemap.xml";

const URLSET_OPEN: &str = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml" xmlns:image="http://www.google.com/schemas/sitemap-image/1.1" xmlns:video="http://www.google.com/schemas/sitemap-video/1.1">"#;

/// Build the sitemap: static URLs first, then one URL per post
pub fn build_sitemap(config: &SiteConfig, entries: &[Entry]) -> Result<String> {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(URLSET_OPEN);
    xml.push('\n');

    for url in &config.sitemap.static_urls {
        push_url(
            &mut xml,
            &config.full_url(&url.path),
            &url.priority,
            &url.changefreq,
        );
    }

    for (index, entry) in entries.iter().enumerate() {
        if !entry.has_content() {
            continue;
        }
        let slug = page_slug(index, entry)?;
        push_url(
            &mut xml,
            &config.full_url(&config.post_path(&slug)),
            &config.sitemap.priority,
            &config.sitemap.changefreq,
        );
    }

    xml.push_str("</urlset>\n");
    Ok(xml)
}

/// Write `<public_dir>/sitemap.xml`
pub fn write_sitemap(site: &Site, entries: &[Entry]) -> Result<PathBuf> {
    let xml = build_sitemap(&site.config, entries)?;

    fs::create_dir_all(&site.public_dir)
        .with_context(|| format!("Failed to create {:?}", site.public_dir))?;
    let output_path = site.public_dir.join(SITEMAP_FILE);
    fs::write(&output_path, xml)
        .with_context(|| format!("Failed to write {:?}", output_path))?;
    tracing::info!("Generated {}", SITEMAP_FILE);

    Ok(output_path)
}

/// Path of the generated sitemap
pub fn sitemap_path(site: &Site) -> PathBuf {
    site.public_dir.join(SITEMAP_FILE)
}

fn push_url(xml: &mut String, loc: &str, priority: &str, changefreq: &str) {
    xml.push_str("    <url>\n");
    xml.push_str(&format!("        <loc>{}</loc>\n", escape_xml(loc)));
    xml.push_str(&format!("        <priority>{}</priority>\n", priority));
    xml.push_str(&format!("        <changefreq>{}</changefreq>\n", changefreq));
    xml.push_str("    </url>\n");
}
