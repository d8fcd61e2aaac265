//! Combat balance tables loader.

use std::path::Path;

use rogue_core::CombatTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CombatTables`] from TOML files.
///
/// Missing keys fall back to the built-in defaults.
pub struct TablesLoader;

impl TablesLoader {
    pub fn parse(content: &str) -> LoadResult<CombatTables> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))
    }

    pub fn load(path: &Path) -> LoadResult<CombatTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_tables_keep_defaults() {
        let tables = TablesLoader::parse(
            r#"
            unarmed_damage = 2
            crit_multiplier = 200

            [status]
            shielded_less = 50
            "#,
        )
        .unwrap();

        assert_eq!(tables.unarmed_damage, 2);
        assert_eq!(tables.crit_multiplier, 200);
        assert_eq!(tables.armor_divisor, CombatTables::DEFAULT_ARMOR_DIVISOR);
        assert_eq!(tables.status.shielded_less, 50);
        assert_eq!(tables.status.vulnerable_more, 25);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(TablesLoader::parse("armor_divisor = \"two\"").is_err());
    }
}
