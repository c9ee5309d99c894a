//! Helper functions shared by the content stages and generators

mod date;
mod xml;

pub use date::*;
pub use xml::*;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^a-z0-9]+").expect("valid regex");
}

/// Convert text to a URL-friendly slug
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen and trims hyphens from both ends. Non-ASCII letters and
/// symbols are not transliterated.
///
/// # Examples
/// ```ignore
/// slugify("Best Questions to Ask!") // -> "best-questions-to-ask"
/// ```
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}
