//! List keyword entries

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Site;

/// What to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Every entry
    All,
    /// Entries that get a page
    Pages,
    /// Entries still waiting for content
    Pending,
}

impl std::str::FromStr for ListKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" | "entries" => Ok(ListKind::All),
            "page" | "pages" => Ok(ListKind::Pages),
            "pending" => Ok(ListKind::Pending),
            _ => anyhow::bail!("Unknown type: {}. Available: all, pages, pending", s),
        }
    }
}

/// Format one listing line
pub fn describe(slug: &str, title: &str, date: Option<&str>, has_content: bool) -> String {
    if has_content {
        format!("  {} - {} [{}]", date.unwrap_or("undated"), title, slug)
    } else {
        format!("  (no content) {} [{}]", title, slug)
    }
}

/// Print entries of the given kind
pub fn run(site: &Site, kind: ListKind) -> Result<()> {
    let entries = ContentLoader::new(site).load_entries()?;

    let selected: Vec<_> = entries
        .iter()
        .filter(|e| match kind {
            ListKind::All => true,
            ListKind::Pages => e.has_content(),
            ListKind::Pending => !e.has_content(),
        })
        .collect();

    println!("Entries ({} of {}):", selected.len(), entries.len());
    for entry in selected {
        println!(
            "{}",
            describe(&entry.slug(), &entry.h1, entry.date(), entry.has_content())
        );
    }

    Ok(())
}
