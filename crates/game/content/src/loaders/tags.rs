//! Tag vocabulary loader.

use std::path::Path;

use rogue_core::{TagDefinition, TagRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Tag vocabulary structure for TOML files.
///
/// Order of `[[tags]]` entries is the synergy resolution order.
///
/// ```toml
/// [[tags]]
/// name = "fire"
/// synergy = { threshold = 2, effect = { more = 50 } }
///
/// [[tags]]
/// name = "metal"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagFile {
    #[serde(default)]
    pub tags: Vec<TagDefinition>,
}

/// Loader for the tag vocabulary.
pub struct TagLoader;

impl TagLoader {
    pub fn parse(content: &str) -> LoadResult<TagRegistry> {
        let file: TagFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tags TOML: {}", e))?;
        TagRegistry::new(file.tags).map_err(|e| anyhow::anyhow!("Invalid tag vocabulary: {}", e))
    }

    /// Load and validate the tag vocabulary from a TOML file.
    pub fn load(path: &Path) -> LoadResult<TagRegistry> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }
}
