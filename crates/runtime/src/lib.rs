//! Run orchestration for the daily-rogue game.
//!
//! This crate wires loaded content, the daily seed and mutable run state into
//! the pure combat engine from `rogue-core`. Consumers build an
//! [`OracleManager`] from a content directory, start a [`RunState`] from the
//! day's [`DailySeed`] and drive attacks through an [`Encounter`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error types downstream clients interact with
//! - [`daily`] derives the shared seed of a calendar day
//! - [`encounter`] applies combat results to run state
//! - [`oracle`] adapts static content into combat oracles
//! - [`state`] holds actors, the turn counter and the combat log
pub mod api;
pub mod daily;
pub mod encounter;
pub mod oracle;
pub mod state;

pub use api::{Result, RuntimeError};
pub use daily::DailySeed;
pub use encounter::{Encounter, FightOutcome, FightReport};
pub use oracle::OracleManager;
pub use state::{CombatLogEntry, RunState};
