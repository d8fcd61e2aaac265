//! Runtime wrapper around static run content.
//!
//! The [`OracleManager`] owns the loaded catalog and tables and hands out
//! [`rogue_core::Env`] views on demand. The data is immutable at runtime;
//! dynamic state lives in [`crate::RunState`].
use std::path::Path;
use std::sync::Arc;

use rogue_content::{ContentBundle, ContentFactory};
use rogue_core::{CombatEnv, Env, GameConfig, ItemCatalog, PcgRng, RuleTables};

use crate::api::{Result, RuntimeError};

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemCatalog>,
    pub(crate) tables: Arc<RuleTables>,
    pub(crate) config: GameConfig,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    pub fn new(items: ItemCatalog, tables: RuleTables, config: GameConfig) -> Self {
        Self {
            items: Arc::new(items),
            tables: Arc::new(tables),
            config,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    pub fn from_bundle(bundle: ContentBundle) -> Self {
        Self::new(bundle.items, bundle.tables, bundle.config)
    }

    /// Loads and validates a content directory.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Content`] when a file is missing or invalid.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self> {
        let bundle = ContentFactory::new(data_dir.as_ref())
            .load_all()
            .map_err(|e| RuntimeError::Content(e.into()))?;
        tracing::info!(
            data_dir = %data_dir.as_ref().display(),
            items = bundle.items.len(),
            "loaded run content"
        );
        Ok(Self::from_bundle(bundle))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// Converts oracle manager into a CombatEnv for rogue-core.
    pub fn as_combat_env(&self) -> CombatEnv<'_> {
        Env::with_all(self.items.as_ref(), self.tables.as_ref(), &self.rng).as_combat_env()
    }
}
