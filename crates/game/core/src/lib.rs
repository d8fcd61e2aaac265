//! Deterministic combat rules and data types shared by the daily-rogue crates.
//!
//! `rogue-core` defines the canonical combat resolution ([`combat::resolve`]),
//! the item/tag schema it reads, and the actor snapshots it consumes. Every API
//! here is pure: inputs are borrowed immutably and results are returned as new
//! values, so the orchestration layer owns all mutable state.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use combat::{
    CombatError, CombatResult, DamageBreakdown, FiredSynergy, InvalidState, Side, resolve,
};
pub use config::GameConfig;
pub use env::{
    Attribute, AttributeMap, CatalogError, CombatEnv, CombatTables, Env, ItemCatalog,
    ItemDefinition, ItemId, ItemOracle, ItemSpec, OracleError, PcgRng, RngOracle, RuleTables,
    StatusTables, SynergyEffect, SynergyRule, TablesOracle, TagDefinition, TagId, TagRegistry,
    compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ActorSnapshot, ActorState, EntityId, EquipError, StatusEffect, StatusEffectKind, StatusEffects,
    Turn,
};
