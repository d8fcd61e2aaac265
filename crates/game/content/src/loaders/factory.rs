//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use rogue_core::{GameConfig, ItemCatalog, RuleTables, TagRegistry};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, TablesLoader, TagLoader};

/// Everything a run needs, loaded and validated.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub tables: RuleTables,
    pub items: ItemCatalog,
}

/// Content factory that loads all run content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional, defaults when missing)
/// ├── tables.toml   (optional, defaults when missing)
/// ├── tags.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load run configuration from `config.toml`, or defaults.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load tag vocabulary from `tags.toml`.
    pub fn load_tags(&self) -> LoadResult<TagRegistry> {
        TagLoader::load(&self.data_dir.join("tags.toml"))
    }

    /// Load balance tables from `tables.toml` and pair them with `tags`.
    pub fn load_tables(&self, tags: TagRegistry) -> LoadResult<RuleTables> {
        let path = self.data_dir.join("tables.toml");
        let combat = if path.exists() {
            TablesLoader::load(&path)?
        } else {
            Default::default()
        };
        Ok(RuleTables::new(combat, tags))
    }

    /// Load item catalog from `items.ron`, validated against `tags`.
    pub fn load_items(&self, tags: &TagRegistry) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"), tags)
    }

    /// Load every content file.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let config = self.load_config()?;
        let tags = self.load_tags()?;
        let items = self.load_items(&tags)?;
        let tables = self.load_tables(tags)?;
        Ok(ContentBundle {
            config,
            tables,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogue_core::{CombatTables, ItemId, ItemOracle, TablesOracle};
    use std::fs;

    const TAGS: &str = r#"
        [[tags]]
        name = "fire"
        synergy = { threshold = 2, effect = { more = 50 } }
    "#;

    const ITEMS: &str = r#"(items: [
        (id: 1, name: "Torch", tags: ["fire"], attributes: { base_damage: 3 }),
    ])"#;

    #[test]
    fn optional_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tags.toml"), TAGS).unwrap();
        fs::write(dir.path().join("items.ron"), ITEMS).unwrap();

        let bundle = ContentFactory::new(dir.path()).load_all().unwrap();
        assert_eq!(bundle.config, GameConfig::default());
        assert_eq!(*bundle.tables.combat(), CombatTables::default());
        assert_eq!(bundle.tables.tags().len(), 1);
        assert!(bundle.items.definition(ItemId(1)).is_some());
    }

    #[test]
    fn config_overrides_are_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tags.toml"), TAGS).unwrap();
        fs::write(dir.path().join("items.ron"), ITEMS).unwrap();
        fs::write(dir.path().join("config.toml"), "max_turns = 12\n").unwrap();

        let bundle = ContentFactory::new(dir.path()).load_all().unwrap();
        assert_eq!(bundle.config.max_turns, 12);
        assert_eq!(
            bundle.config.status_duration,
            GameConfig::DEFAULT_STATUS_DURATION
        );
    }

    #[test]
    fn missing_items_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tags.toml"), TAGS).unwrap();

        let err = ContentFactory::new(dir.path()).load_all().unwrap_err();
        assert!(err.to_string().contains("items.ron"));
    }
}
