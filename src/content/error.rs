//! Content errors

use thiserror::Error;

/// Errors raised while converting or validating keyword entries
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Missing column in keyword sheet: {0}")]
    MissingColumn(String),

    #[error("Entry {index} has content but no h1 title")]
    MissingTitle { index: usize },

    #[error("Entry {index} title {title:?} produces an empty slug")]
    EmptySlug { index: usize, title: String },
}
