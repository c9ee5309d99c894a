//! Content loader - reads and writes the keywords file and the page template

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

use super::Entry;
use crate::Site;

/// Indentation of a freshly converted keywords file
pub const CONVERTED_INDENT: &[u8] = b"  ";

/// Indentation used when the keywords file is rewritten in place
pub const REWRITE_INDENT: &[u8] = b"    ";

/// Loads content from the paths configured for a site
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all entries from the keywords file
    pub fn load_entries(&self) -> Result<Vec<Entry>> {
        load_entries(&self.site.keywords_path)
    }

    /// Overwrite the keywords file with `entries`, 4-space indented
    pub fn save_entries(&self, entries: &[Entry]) -> Result<()> {
        save_entries_with_indent(&self.site.keywords_path, entries, REWRITE_INDENT)
    }

    /// Load the HTML page template
    pub fn load_template(&self) -> Result<String> {
        load_template(&self.site.template_path)
    }
}

/// Load a JSON array of entries
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let entries: Vec<Entry> =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?;
    tracing::debug!("Loaded {} entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Write entries as 2-space pretty-printed JSON, creating parent directories
pub fn save_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    save_entries_with_indent(path, entries, CONVERTED_INDENT)
}

/// Write entries as pretty-printed JSON with the given indentation
pub fn save_entries_with_indent(path: &Path, entries: &[Entry], indent: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
    }

    let mut json = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(indent));
    entries.serialize(&mut serializer)?;

    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!("Saved {} entries to {:?}", entries.len(), path);
    Ok(())
}

/// Load an HTML template
pub fn load_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read template {:?}", path))
}
