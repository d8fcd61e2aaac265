//! Combat result types.

use crate::env::{SynergyEffect, TagId};

/// A synergy that fired during one resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FiredSynergy {
    pub tag: TagId,
    pub name: String,
    /// Number of equipped slots carrying the tag.
    pub matched: u8,
    pub effect: SynergyEffect,
}

/// Damage value after each stage of the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageBreakdown {
    /// Sum of item base damage, or the unarmed value.
    pub base: u32,
    pub after_synergies: u32,
    pub after_critical: u32,
    /// Amount removed by defender armor.
    pub armor_reduction: u32,
    /// Final damage after status effects and the minimum floor.
    pub mitigated: u32,
}

/// Outcome of a single resolution. Owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResult {
    /// Damage dealt to the defender. Never negative.
    pub damage: u32,
    pub critical: bool,
    /// Fired synergies, in tag declaration order.
    pub synergies: Vec<FiredSynergy>,
    pub breakdown: DamageBreakdown,
    /// Health change for the attacker (lifesteal minus thorns).
    pub attacker_hp_delta: i32,
    /// Health change for the defender, never below `-defender.hp`.
    pub defender_hp_delta: i32,
    /// Attacker health with the delta applied. Snapshots carry no `max_hp`,
    /// so healing is not capped here.
    pub attacker_hp_after: i32,
    pub defender_hp_after: i32,
    pub attacker_defeated: bool,
    pub defender_defeated: bool,
}

impl CombatResult {
    /// Names of the fired synergies, in resolution order.
    pub fn synergy_names(&self) -> Vec<&str> {
        self.synergies.iter().map(|s| s.name.as_str()).collect()
    }
}
