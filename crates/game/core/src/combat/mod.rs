//! Combat resolution system.
//!
//! This module provides pure functions for resolving an attack between two
//! actor snapshots. All combat logic is deterministic and side-effect free.
//!
//! # Architecture
//!
//! - **Pure Functions**: inputs are borrowed immutably, results are new values
//! - **Snapshot-based**: reads [`crate::ActorSnapshot`], never actor state
//! - **Data-driven**: balance numbers and synergy rules come from oracles
//!
//! # Core Functions
//!
//! - `resolve`: complete attack resolution (validation, synergies, crit, mitigation)
//! - `detect_synergies` / `apply_synergies`: tag synergy evaluation
//! - `base_damage`, `armor_reduction`, `roll_critical`: item attribute stages
//! - `mitigate`: status effect modifiers

pub mod damage;
pub mod mitigation;
pub mod synergy;

mod error;
mod resolve;
mod result;

pub use damage::{armor_reduction, base_damage, roll_critical};
pub use error::{CombatError, InvalidState, Side};
pub use mitigation::mitigate;
pub use resolve::resolve;
pub use result::{CombatResult, DamageBreakdown, FiredSynergy};
pub use synergy::{apply_synergies, detect_synergies};
