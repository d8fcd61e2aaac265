//! Content loaders for reading run data from files.
//!
//! Each loader has a `parse` function working on file contents and a `load`
//! function that reads a path first. Validation errors from rogue-core are
//! wrapped with the file they came from.

pub mod config;
pub mod factory;
pub mod item;
pub mod tables;
pub mod tags;

pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use item::ItemLoader;
pub use tables::TablesLoader;
pub use tags::TagLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
