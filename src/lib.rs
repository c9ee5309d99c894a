//! blog-pages: offline page generator for a keyword-driven blog
//!
//! Keyword research lives in a spreadsheet. This crate turns it into a JSON
//! record set, back-fills publish dates, renders one static HTML page per
//! record from a template and writes a sitemap.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the optional site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A blog site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Keyword sheet (CSV)
    pub csv_path: PathBuf,
    /// Keyword entries (JSON)
    pub keywords_path: PathBuf,
    /// Page template (HTML)
    pub template_path: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Directory receiving the generated posts
    pub blog_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();

        let csv_path = base_dir.join(&config.csv_file);
        let keywords_path = base_dir.join(&config.keywords_file);
        let template_path = base_dir.join(&config.template);
        let public_dir = base_dir.join(&config.public_dir);
        let blog_dir = public_dir.join(config.blog_dir.trim_matches('/'));

        Self {
            config,
            base_dir,
            csv_path,
            keywords_path,
            template_path,
            public_dir,
            blog_dir,
        }
    }

    /// Back-fill missing publish dates
    pub fn backfill_dates(&self) -> Result<()> {
        commands::dates::run(self)
    }

    /// Generate one page per content-bearing entry
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Write the sitemap
    pub fn sitemap(&self) -> Result<()> {
        commands::sitemap::run(self)
    }

    /// Dates, pages and sitemap in sequence
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Remove generated output
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
