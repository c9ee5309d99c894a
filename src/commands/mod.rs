//! CLI command implementations

pub mod build;
pub mod clean;
pub mod convert;
pub mod dates;
pub mod generate;
pub mod list;
pub mod sitemap;
