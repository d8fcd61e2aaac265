//! Traits describing read-only combat data.
//!
//! Oracles expose item definitions, balance tables with the tag vocabulary,
//! and deterministic dice. The [`Env`] aggregate bundles them so the combat
//! engine can access everything it needs without hard coupling to concrete
//! implementations.
mod catalog;
mod error;
mod items;
mod rng;
mod tables;
mod tags;

pub use catalog::{ItemCatalog, ItemSpec};
pub use error::{CatalogError, OracleError};
pub use items::{Attribute, AttributeMap, ItemDefinition, ItemId, ItemOracle};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use tables::{CombatTables, RuleTables, StatusTables, TablesOracle};
pub use tags::{SynergyEffect, SynergyRule, TagDefinition, TagId, TagRegistry};

/// Aggregates read-only oracles required by combat resolution.
pub struct Env<'a, I, T, R>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    items: Option<&'a I>,
    tables: Option<&'a T>,
    rng: Option<&'a R>,
}

// Manual impls: derive would demand `I: Clone`, which trait objects never are.
impl<I, T, R> Clone for Env<'_, I, T, R>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T, R> Copy for Env<'_, I, T, R>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type CombatEnv<'a> = Env<'a, dyn ItemOracle + 'a, dyn TablesOracle + 'a, dyn RngOracle + 'a>;

impl<'a, I, T, R> Env<'a, I, T, R>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(items: Option<&'a I>, tables: Option<&'a T>, rng: Option<&'a R>) -> Self {
        Self { items, tables, rng }
    }

    pub fn with_all(items: &'a I, tables: &'a T, rng: &'a R) -> Self {
        Self::new(Some(items), Some(tables), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            tables: None,
            rng: None,
        }
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no items oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables oracle was provided.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, I, T, R> Env<'a, I, T, R>
where
    I: ItemOracle + 'a,
    T: TablesOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `CombatEnv`.
    pub fn as_combat_env(&self) -> CombatEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let tables: Option<&'a dyn TablesOracle> = self.tables.map(|tables| tables as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(items, tables, rng)
    }
}
