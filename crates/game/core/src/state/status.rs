//! Status effect system for actors.
//!
//! Effects store `expires_at: Turn` and are active while
//! `current_turn < expires_at`. The orchestration layer calls
//! [`StatusEffects::remove_expired`] as turns advance; combat only ever sees
//! the effects that were active when the snapshot was taken.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::Turn;

/// Active status effects on an actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { GameConfig::MAX_STATUS_EFFECTS }>,
}

/// A single status effect with expiration turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    pub expires_at: Turn,
}

/// Types of status effects.
///
/// Declaration order is the order mitigation applies them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusEffectKind {
    // ========================================================================
    // Defensive (read from the defender)
    // ========================================================================
    /// Incoming damage reduced by a percentage.
    Shielded,

    /// Incoming damage reduced by a flat amount.
    Fortified,

    /// Incoming damage increased by a percentage.
    Vulnerable,

    // ========================================================================
    // Offensive (read from the attacker)
    // ========================================================================
    /// Outgoing damage reduced by a percentage.
    Weakened,

    /// Outgoing damage increased by a percentage.
    Enraged,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks presence regardless of expiry.
    ///
    /// Snapshots are already filtered to active effects, so combat uses this.
    pub fn contains(&self, kind: StatusEffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Adds a status effect, extending an existing one to the later expiry.
    ///
    /// Returns false when the effect set is full and the effect was dropped.
    pub fn add(&mut self, kind: StatusEffectKind, expires_at: Turn) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.expires_at = existing.expires_at.max(expires_at);
            return true;
        }

        self.effects.try_push(StatusEffect { kind, expires_at }).is_ok()
    }

    /// Removes all effects expired at the current turn.
    pub fn remove_expired(&mut self, current_turn: Turn) {
        self.effects.retain(|e| e.expires_at > current_turn);
    }

    /// Copy of this set containing only effects active at `current_turn`.
    pub fn active_at(&self, current_turn: Turn) -> Self {
        let mut active = self.clone();
        active.remove_expired(current_turn);
        active
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
