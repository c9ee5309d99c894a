//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // URL
    pub url: String,

    // Input files
    pub csv_file: String,
    pub keywords_file: String,
    pub template: String,

    // Output
    pub public_dir: String,
    pub blog_dir: String,

    // Date back-fill
    pub date_window_days: u32,

    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://nemlys.com".to_string(),

            csv_file: "keywords.csv".to_string(),
            keywords_file: "keywords.json".to_string(),
            template: "blog_template.html".to_string(),

            public_dir: "public".to_string(),
            blog_dir: "blog".to_string(),

            date_window_days: 60,

            sitemap: SitemapConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }

    /// Site-relative URL path of a blog post (e.g. `/blog/my-post`)
    pub fn post_path(&self, slug: &str) -> String {
        format!("/{}/{}", self.blog_dir.trim_matches('/'), slug)
    }

    /// Absolute URL of a site path (e.g. `https://example.com/blog/my-post`)
    pub fn full_url(&self, path: &str) -> String {
        let base = self.url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// Sitemap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Priority of every generated blog post URL
    pub priority: String,
    /// Change frequency of every generated blog post URL
    pub changefreq: String,
    /// Fixed URLs listed before the blog posts
    pub static_urls: Vec<StaticUrl>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            priority: "0.9".to_string(),
            changefreq: "monthly".to_string(),
            static_urls: vec![
                StaticUrl::new("/", "1.0"),
                StaticUrl::new("/policy", "1.0"),
                StaticUrl::new("/terms", "1.0"),
                StaticUrl::new("/delete_account", "0.5"),
            ],
        }
    }
}

/// A fixed sitemap entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticUrl {
    pub path: String,
    pub priority: String,
    #[serde(default = "default_changefreq")]
    pub changefreq: String,
}

impl StaticUrl {
    fn new(path: &str, priority: &str) -> Self {
        Self {
            path: path.to_string(),
            priority: priority.to_string(),
            changefreq: default_changefreq(),
        }
    }
}

fn default_changefreq() -> String {
    "monthly".to_string()
}
