//! Content module - keyword entries, loading, sheet conversion and date back-fill

pub mod convert;
pub mod dates;
mod entry;
mod error;
pub mod loader;

pub use entry::{Content, Entry, ExampleQuestion, Paragraph};
pub use error::ContentError;
pub use loader::ContentLoader;
