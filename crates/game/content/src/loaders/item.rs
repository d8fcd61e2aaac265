//! Item catalog loader.

use std::path::Path;

use rogue_core::{ItemCatalog, ItemSpec, TagRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
///
/// ```ron
/// (
///     items: [
///         (id: 1, name: "Fire Sword", tags: ["fire", "blade"], attributes: { base_damage: 10 }),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFile {
    pub items: Vec<ItemSpec>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Parse raw item specs without validating them.
    pub fn parse_specs(content: &str) -> LoadResult<Vec<ItemSpec>> {
        let file: ItemFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        Ok(file.items)
    }

    /// Parse and validate an item catalog against a tag vocabulary.
    pub fn parse(content: &str, tags: &TagRegistry) -> LoadResult<ItemCatalog> {
        let specs = Self::parse_specs(content)?;
        ItemCatalog::build(tags, specs)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog: {}", e))
    }

    /// Load and validate an item catalog from a RON file.
    pub fn load(path: &Path, tags: &TagRegistry) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, tags)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogue_core::{Attribute, ItemId, ItemOracle, TagDefinition};

    fn tags() -> TagRegistry {
        TagRegistry::new(vec![TagDefinition::new("fire"), TagDefinition::new("blade")]).unwrap()
    }

    #[test]
    fn parses_catalog() {
        let catalog = ItemLoader::parse(
            r#"(
                items: [
                    (id: 1, name: "Fire Sword", tags: ["fire", "blade"], attributes: { base_damage: 10, weight: 3 }),
                    (id: 2, name: "Buckler", attributes: { armor: 4 }),
                ],
            )"#,
            &tags(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let sword = catalog.definition(ItemId(1)).unwrap();
        assert_eq!(sword.attribute(Attribute::BaseDamage), 10);
        assert_eq!(sword.attribute(Attribute::Weight), 3);
        assert_eq!(sword.tags.len(), 2);
        assert!(catalog.definition(ItemId(2)).unwrap().tags.is_empty());
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = ItemLoader::parse(
            r#"(items: [(id: 1, name: "Frost Brand", tags: ["ice"])])"#,
            &tags(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("undeclared tag 'ice'"));
    }

    #[test]
    fn negative_attribute_is_rejected() {
        let err = ItemLoader::parse(
            r#"(items: [(id: 1, name: "Hex", attributes: { base_damage: -3 })])"#,
            &tags(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("negative base_damage"));
    }

    #[test]
    fn malformed_ron_is_rejected() {
        assert!(ItemLoader::parse_specs("(items: [").is_err());
    }
}
