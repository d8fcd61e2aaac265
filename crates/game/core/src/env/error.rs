//! Oracle access and catalog validation errors.

use crate::env::{Attribute, ItemId};
use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// Missing oracles are fatal: the engine cannot resolve combat without items
/// or balance tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// TablesOracle is not available in the environment.
    #[error("TablesOracle not available")]
    TablesNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}

/// Errors raised while building the tag vocabulary or the item catalog.
///
/// These are load-time errors: balance data is rejected before any combat
/// runs, so resolution never has to guess at malformed content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("tag name must not be empty")]
    EmptyTagName,

    #[error("tag '{0}' is declared more than once")]
    DuplicateTag(String),

    #[error("tag vocabulary declares {count} tags, limit is {max}")]
    TooManyTags { count: usize, max: usize },

    #[error("synergy rule for tag '{tag}' has threshold 0")]
    ZeroThreshold { tag: String },

    #[error("item {0} is defined more than once")]
    DuplicateItem(ItemId),

    #[error("item {item} references undeclared tag '{tag}'")]
    UnknownTag { item: ItemId, tag: String },

    #[error("item {item} lists tag '{tag}' more than once")]
    RepeatedTag { item: ItemId, tag: String },

    #[error("item {item} carries {count} tags, limit is {max}")]
    TooManyItemTags { item: ItemId, count: usize, max: usize },

    #[error("item {item} has negative {attribute} ({value})")]
    NegativeAttribute {
        item: ItemId,
        attribute: Attribute,
        value: i32,
    },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            EmptyTagName => "CATALOG_EMPTY_TAG_NAME",
            DuplicateTag(_) => "CATALOG_DUPLICATE_TAG",
            TooManyTags { .. } => "CATALOG_TOO_MANY_TAGS",
            ZeroThreshold { .. } => "CATALOG_ZERO_THRESHOLD",
            DuplicateItem(_) => "CATALOG_DUPLICATE_ITEM",
            UnknownTag { .. } => "CATALOG_UNKNOWN_TAG",
            RepeatedTag { .. } => "CATALOG_REPEATED_TAG",
            TooManyItemTags { .. } => "CATALOG_TOO_MANY_ITEM_TAGS",
            NegativeAttribute { .. } => "CATALOG_NEGATIVE_ATTRIBUTE",
        }
    }
}
