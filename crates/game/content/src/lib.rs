//! Data-driven content definitions and loaders.
//!
//! This crate is the item data layer. It reads the content files of a daily
//! run and turns them into validated rogue-core types:
//! - Item catalog (RON)
//! - Tag vocabulary and synergy rules (TOML)
//! - Combat balance tables (TOML)
//! - Run configuration (TOML)
//!
//! Content is validated here, once, so combat resolution never sees malformed
//! data.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, ItemLoader, LoadResult, TablesLoader, TagLoader,
};
