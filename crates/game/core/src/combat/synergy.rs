//! Tag synergy detection and application.
//!
//! A synergy is evaluated per tag, never per item pair: the tag's rule fires
//! at most once per resolution no matter how many items share it. Tags are
//! visited in vocabulary declaration order, which fixes the order effects are
//! pushed onto the bonus stack and the order they are reported.

use crate::combat::FiredSynergy;
use crate::env::{ItemDefinition, SynergyEffect, TagRegistry};
use crate::stats::{Bonus, BonusStack};

/// Finds every synergy whose threshold the equipped items reach.
///
/// Each equipped slot counts once per tag, so two copies of the same item
/// count as two.
pub fn detect_synergies(items: &[&ItemDefinition], tags: &TagRegistry) -> Vec<FiredSynergy> {
    tags.iter()
        .filter_map(|(id, tag)| {
            let rule = tag.synergy?;
            let matched = items.iter().filter(|item| item.has_tag(id)).count();
            (matched >= rule.threshold as usize).then(|| FiredSynergy {
                tag: id,
                name: tag.name.clone(),
                matched: matched.min(u8::MAX as usize) as u8,
                effect: rule.effect,
            })
        })
        .collect()
}

/// Applies the damage effects of fired synergies to `base`.
pub fn apply_synergies(base: u32, synergies: &[FiredSynergy]) -> u32 {
    let mut stack = BonusStack::new();
    for synergy in synergies {
        match synergy.effect {
            SynergyEffect::More(percent) => stack.add(Bonus::more(percent)),
            SynergyEffect::Flat(amount) => stack.add(Bonus::flat(amount)),
            SynergyEffect::Pierce(_) => {}
        }
    }
    super::damage::to_damage(stack.apply(base as i64, 0, u32::MAX as i64))
}

/// Total armor pierce granted by fired synergies, capped at 100%.
pub fn armor_pierce(synergies: &[FiredSynergy]) -> u32 {
    synergies
        .iter()
        .filter_map(|s| match s.effect {
            SynergyEffect::Pierce(percent) => Some(percent as u32),
            _ => None,
        })
        .sum::<u32>()
        .min(100)
}
