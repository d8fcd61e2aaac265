//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from combat resolution, equipment changes and content
//! loading so callers can bubble them up with consistent context.
use rogue_core::{CombatError, EntityId, EquipError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("actor {0} is not part of this run")]
    UnknownActor(EntityId),

    #[error("actor {0} is already part of this run")]
    DuplicateActor(EntityId),

    #[error("actor {0} is defeated and cannot act")]
    ActorDefeated(EntityId),

    #[error("actor {0} cannot attack itself")]
    SelfTarget(EntityId),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Equip(#[from] EquipError),

    #[error("failed to load run content")]
    Content(#[source] Box<dyn std::error::Error + Send + Sync>),
}
