//! `$TOKEN` placeholder substitution

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::content::Entry;
use crate::generator::SimilarPosts;

lazy_static! {
    /// Every token the blog template understands
    static ref PLACEHOLDER: Regex = Regex::new(
        r"\$(?:METADATA_DESCRIPTION|METADATA_TITLE|EXAMPLE_TOPIC|EXAMPLE_QUESTION|EXAMPLE_TITLE|SIMILAR_[1-3]_(?:LINK|DATE|TITLE)|TITLE|DATE|INTRO)"
    )
    .expect("valid regex");
}

/// Token → value table for one page
#[derive(Debug, Clone, Default)]
pub struct PlaceholderValues {
    values: IndexMap<String, String>,
}

impl PlaceholderValues {
    /// Collect the values of every token from an entry and its similar posts
    pub fn new(entry: &Entry, similar: &SimilarPosts) -> Self {
        let content = entry.content.as_ref();
        let example = entry.example_question.as_ref();

        let text = |value: Option<&String>| value.cloned().unwrap_or_default();

        let mut values = IndexMap::new();
        values.insert(
            "$METADATA_DESCRIPTION".to_string(),
            text(content.and_then(|c| c.metadata_description.as_ref())),
        );
        values.insert("$METADATA_TITLE".to_string(), entry.metadata_title.clone());
        values.insert("$TITLE".to_string(), entry.h1.clone());
        values.insert(
            "$DATE".to_string(),
            text(content.and_then(|c| c.date.as_ref())),
        );
        values.insert(
            "$INTRO".to_string(),
            text(content.and_then(|c| c.intro.as_ref())),
        );
        values.insert(
            "$EXAMPLE_TOPIC".to_string(),
            text(example.and_then(|e| e.topic.as_ref())),
        );
        values.insert(
            "$EXAMPLE_QUESTION".to_string(),
            text(example.and_then(|e| e.question.as_ref())),
        );
        values.insert(
            "$EXAMPLE_TITLE".to_string(),
            text(example.and_then(|e| e.title.as_ref())),
        );

        for (i, post) in similar.posts().iter().enumerate() {
            let n = i + 1;
            values.insert(format!("$SIMILAR_{}_LINK", n), post.link.clone());
            values.insert(format!("$SIMILAR_{}_DATE", n), post.date.clone());
            values.insert(format!("$SIMILAR_{}_TITLE", n), post.title.clone());
        }

        Self { values }
    }

    /// Value of a token such as `$TITLE`
    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Replace every known token in `text` in a single pass
///
/// Substituted values are not scanned again, so each token occurrence in the
/// input is replaced exactly once. Tokens without a value are left in place.
pub fn substitute(text: &str, values: &PlaceholderValues) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            values.get(token).unwrap_or(token).to_string()
        })
        .into_owned()
}

/// Tokens still present in `text`
pub fn remaining_tokens(text: &str) -> Vec<&str> {
    PLACEHOLDER.find_iter(text).map(|m| m.as_str()).collect()
}
