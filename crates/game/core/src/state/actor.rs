use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::ItemId;
use crate::state::{EntityId, StatusEffects, Turn};

/// Mutable actor record owned by the orchestration layer.
///
/// # Invariants
///
/// - `0 <= hp <= max_hp` after every mutation made through these methods
/// - `equipped` keeps insertion order; synergy counting does not depend on it
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub equipped: ArrayVec<ItemId, { GameConfig::MAX_EQUIPPED }>,
    pub status: StatusEffects,
}

/// Errors from equipment changes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("all {max} equipment slots are in use")]
    SlotsFull { max: usize },

    #[error("{0} is not equipped")]
    NotEquipped(ItemId),
}

impl ActorState {
    pub fn new(id: EntityId, name: impl Into<String>, max_hp: i32) -> Self {
        let max_hp = max_hp.max(0);
        Self {
            id,
            name: name.into(),
            hp: max_hp,
            max_hp,
            equipped: ArrayVec::new(),
            status: StatusEffects::empty(),
        }
    }

    /// Equips an item in the next free slot.
    ///
    /// # Errors
    ///
    /// Returns [`EquipError::SlotsFull`] when every slot is taken.
    pub fn equip(&mut self, item: ItemId) -> Result<(), EquipError> {
        self.equipped.try_push(item).map_err(|_| EquipError::SlotsFull {
            max: GameConfig::MAX_EQUIPPED,
        })
    }

    /// Removes the first equipped copy of `item`.
    ///
    /// # Errors
    ///
    /// Returns [`EquipError::NotEquipped`] when the item is not equipped.
    pub fn unequip(&mut self, item: ItemId) -> Result<(), EquipError> {
        let index = self
            .equipped
            .iter()
            .position(|equipped| *equipped == item)
            .ok_or(EquipError::NotEquipped(item))?;
        self.equipped.remove(index);
        Ok(())
    }

    /// Applies a health delta, clamped to `[0, max_hp]`.
    pub fn apply_hp_delta(&mut self, delta: i32) {
        self.hp = self.hp.saturating_add(delta).clamp(0, self.max_hp);
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Freezes the actor for a combat call at `turn`.
    ///
    /// Only status effects active at `turn` are carried over.
    pub fn snapshot(&self, turn: Turn) -> ActorSnapshot {
        ActorSnapshot {
            id: self.id,
            hp: self.hp,
            equipped: self.equipped.clone(),
            status: self.status.active_at(turn),
        }
    }
}

/// Immutable view of an actor passed into combat resolution.
///
/// `hp` is signed so that corrupted state can be represented and rejected by
/// the engine instead of wrapping silently.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSnapshot {
    pub id: EntityId,
    pub hp: i32,
    pub equipped: ArrayVec<ItemId, { GameConfig::MAX_EQUIPPED }>,
    pub status: StatusEffects,
}

impl ActorSnapshot {
    /// Snapshot with no equipment and no status effects.
    pub fn bare(id: EntityId, hp: i32) -> Self {
        Self {
            id,
            hp,
            equipped: ArrayVec::new(),
            status: StatusEffects::empty(),
        }
    }

    /// Builder helper for tests and scripted encounters.
    ///
    /// Items beyond [`GameConfig::MAX_EQUIPPED`] are ignored.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        for item in items {
            if self.equipped.try_push(item).is_err() {
                break;
            }
        }
        self
    }
}
