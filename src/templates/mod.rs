//! Blog page template rendering
//!
//! A page is produced in two steps: paragraph blocks are spliced in after
//! each breakpoint's intro anchor, then every `$TOKEN` placeholder is
//! replaced. Insertion must run first because the anchors contain the
//! literal `$INTRO` token.

mod breakpoint;
mod placeholders;

pub use breakpoint::{anchor_for, insert_after_anchor, insert_paragraphs, Breakpoint};
pub use placeholders::{remaining_tokens, substitute, PlaceholderValues};

use crate::content::Entry;
use crate::generator::SimilarPosts;

/// Renders blog pages from a loaded HTML template
pub struct TemplateRenderer {
    template: String,
}

impl TemplateRenderer {
    /// Create a renderer for the given template source
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render one page
    pub fn render(&self, entry: &Entry, similar: &SimilarPosts) -> String {
        render(&self.template, entry, similar)
    }
}

/// Render `entry` into `template`
pub fn render(template: &str, entry: &Entry, similar: &SimilarPosts) -> String {
    let paragraphs = entry
        .content
        .as_ref()
        .map(|c| c.paragraphs.as_slice())
        .unwrap_or_default();

    let mut html = template.to_string();
    for breakpoint in Breakpoint::ALL {
        html = insert_paragraphs(&html, paragraphs, breakpoint);
    }

    substitute(&html, &PlaceholderValues::new(entry, similar))
}
