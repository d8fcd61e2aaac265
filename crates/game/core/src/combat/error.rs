//! Combat resolution errors.

use crate::env::{Attribute, ItemId, OracleError, TagId};
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Which participant of a resolution an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Attacker,
    Defender,
}

/// Input values that violate the engine's non-negativity requirements.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidState {
    #[error("{side} {actor} has negative health ({hp})")]
    NegativeHealth { side: Side, actor: EntityId, hp: i32 },

    #[error("{side} item {item} has negative {attribute} ({value})")]
    NegativeAttribute {
        side: Side,
        item: ItemId,
        attribute: Attribute,
        value: i32,
    },
}

/// Errors returned by [`crate::combat::resolve`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("invalid combat input: {0}")]
    InvalidState(#[from] InvalidState),

    /// An equipped item id has no definition.
    #[error("{side} equips {item}, which is not in the catalog")]
    ItemNotFound { side: Side, item: ItemId },

    /// An item carries a tag the vocabulary does not declare.
    #[error("{item} carries {tag}, which is not declared")]
    UnknownTag { item: ItemId, tag: TagId },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidState(_) => ErrorSeverity::Validation,
            Self::ItemNotFound { .. } | Self::UnknownTag { .. } => ErrorSeverity::Internal,
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState(InvalidState::NegativeHealth { .. }) => "COMBAT_NEGATIVE_HEALTH",
            Self::InvalidState(InvalidState::NegativeAttribute { .. }) => {
                "COMBAT_NEGATIVE_ATTRIBUTE"
            }
            Self::ItemNotFound { .. } => "COMBAT_ITEM_NOT_FOUND",
            Self::UnknownTag { .. } => "COMBAT_UNKNOWN_TAG",
            Self::Oracle(err) => err.error_code(),
        }
    }
}
