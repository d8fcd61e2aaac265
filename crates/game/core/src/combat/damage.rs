//! Damage stages that read item attributes.

use crate::env::{Attribute, CombatTables, ItemDefinition, RngOracle, compute_seed};
use crate::state::ActorSnapshot;

/// Seed context for the critical-hit roll.
pub const CRIT_ROLL: u32 = 0;

/// Sum of an attribute over a set of items.
pub fn attribute_total(items: &[&ItemDefinition], attribute: Attribute) -> i64 {
    items.iter().map(|item| item.attribute(attribute) as i64).sum()
}

/// Base damage of an attack.
///
/// # Formula
///
/// ```text
/// weapon = sum(base_damage of equipped items)
/// base   = weapon if weapon > 0 else unarmed_damage
/// ```
pub fn base_damage(items: &[&ItemDefinition], tables: &CombatTables) -> u32 {
    match to_damage(attribute_total(items, Attribute::BaseDamage)) {
        0 => tables.unarmed_damage,
        weapon => weapon,
    }
}

/// Rolls for a critical hit.
///
/// ```text
/// chance = min(base_crit_chance + sum(crit_chance), max_crit_chance)
/// crit   = d100 <= chance
/// ```
///
/// A chance of 0 never crits since d100 starts at 1.
pub fn roll_critical(
    attacker: &ActorSnapshot,
    defender: &ActorSnapshot,
    items: &[&ItemDefinition],
    seed: u64,
    tables: &CombatTables,
    rng: &(impl RngOracle + ?Sized),
) -> bool {
    let bonus = to_damage(attribute_total(items, Attribute::CritChance));
    let chance = tables
        .base_crit_chance
        .saturating_add(bonus)
        .min(tables.max_crit_chance);
    if chance == 0 {
        return false;
    }

    let roll_seed = compute_seed(seed, defender.id.0 as u64, attacker.id.0, CRIT_ROLL);
    rng.roll_d100(roll_seed) <= chance
}

/// Applies the critical multiplier.
pub fn apply_critical(damage: u32, tables: &CombatTables) -> u32 {
    to_damage((damage as i64).saturating_mul(tables.crit_multiplier as i64) / 100)
}

/// Armor reduction for a hit.
///
/// ```text
/// effective = armor × (100 - pierce) / 100
/// reduction = min(effective / armor_divisor, damage)
/// ```
pub fn armor_reduction(
    damage: u32,
    defender_items: &[&ItemDefinition],
    pierce: u32,
    tables: &CombatTables,
) -> u32 {
    let armor = attribute_total(defender_items, Attribute::Armor);
    let effective = armor * (100 - pierce.min(100) as i64) / 100;
    let reduction = to_damage(effective / tables.armor_divisor.max(1) as i64);
    reduction.min(damage)
}

/// Health returned to the attacker from damage actually dealt.
pub fn lifesteal(dealt: u32, attacker_items: &[&ItemDefinition]) -> u32 {
    let percent = attribute_total(attacker_items, Attribute::Lifesteal);
    to_damage((dealt as i64).saturating_mul(percent) / 100)
}

/// Flat damage the defender's items reflect onto the attacker.
pub fn thorns(defender_items: &[&ItemDefinition]) -> u32 {
    to_damage(attribute_total(defender_items, Attribute::Thorns))
}

/// Clamps a pipeline value into the damage domain `[0, u32::MAX]`.
#[inline]
pub fn to_damage(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AttributeMap, ItemId, PcgRng};
    use crate::state::EntityId;
    use arrayvec::ArrayVec;

    fn item(id: u32, attributes: AttributeMap) -> ItemDefinition {
        ItemDefinition {
            id: ItemId(id),
            name: format!("item {id}"),
            tags: ArrayVec::new(),
            attributes,
        }
    }

    #[test]
    fn unarmed_when_no_weapon_damage() {
        let tables = CombatTables::new();
        assert_eq!(base_damage(&[], &tables), tables.unarmed_damage);

        let shield = item(1, AttributeMap::new().with(Attribute::Armor, 5));
        assert_eq!(base_damage(&[&shield], &tables), tables.unarmed_damage);
    }

    #[test]
    fn base_damage_sums_items() {
        let tables = CombatTables::new();
        let a = item(1, AttributeMap::new().with(Attribute::BaseDamage, 7));
        let b = item(2, AttributeMap::new().with(Attribute::BaseDamage, 5));
        assert_eq!(base_damage(&[&a, &b], &tables), 12);
    }

    #[test]
    fn armor_is_divided_and_pierced() {
        let tables = CombatTables::new();
        let plate = item(1, AttributeMap::new().with(Attribute::Armor, 10));
        // 10 / 2
        assert_eq!(armor_reduction(20, &[&plate], 0, &tables), 5);
        // 10 × 0.5 / 2 = 2
        assert_eq!(armor_reduction(20, &[&plate], 50, &tables), 2);
        assert_eq!(armor_reduction(20, &[&plate], 100, &tables), 0);
        // never more than the hit itself
        assert_eq!(armor_reduction(3, &[&plate], 0, &tables), 3);
    }

    #[test]
    fn zero_divisor_treated_as_one() {
        let tables = CombatTables {
            armor_divisor: 0,
            ..CombatTables::new()
        };
        let plate = item(1, AttributeMap::new().with(Attribute::Armor, 4));
        assert_eq!(armor_reduction(20, &[&plate], 0, &tables), 4);
    }

    #[test]
    fn critical_is_deterministic_per_seed() {
        let tables = CombatTables::new();
        let attacker = ActorSnapshot::bare(EntityId(0), 10);
        let defender = ActorSnapshot::bare(EntityId(1), 10);
        for seed in 0..200 {
            let a = roll_critical(&attacker, &defender, &[], seed, &tables, &PcgRng);
            let b = roll_critical(&attacker, &defender, &[], seed, &tables, &PcgRng);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn zero_chance_never_crits() {
        let tables = CombatTables {
            base_crit_chance: 0,
            ..CombatTables::new()
        };
        let attacker = ActorSnapshot::bare(EntityId(0), 10);
        let defender = ActorSnapshot::bare(EntityId(1), 10);
        assert!((0..500).all(|seed| !roll_critical(
            &attacker, &defender, &[], seed, &tables, &PcgRng
        )));
    }

    #[test]
    fn capped_chance_always_crits_at_hundred() {
        let tables = CombatTables {
            base_crit_chance: 100,
            max_crit_chance: 100,
            ..CombatTables::new()
        };
        let attacker = ActorSnapshot::bare(EntityId(0), 10);
        let defender = ActorSnapshot::bare(EntityId(1), 10);
        assert!((0..500).all(|seed| roll_critical(
            &attacker, &defender, &[], seed, &tables, &PcgRng
        )));
        assert_eq!(apply_critical(20, &tables), 30);
    }

    #[test]
    fn lifesteal_and_thorns() {
        let fang = item(1, AttributeMap::new().with(Attribute::Lifesteal, 25));
        let spikes = item(2, AttributeMap::new().with(Attribute::Thorns, 3));
        assert_eq!(lifesteal(20, &[&fang]), 5);
        assert_eq!(thorns(&[&spikes, &spikes]), 6);
    }

    #[test]
    fn huge_values_saturate_instead_of_overflowing() {
        let leech = item(1, AttributeMap::new().with(Attribute::Lifesteal, i32::MAX));
        assert_eq!(
            lifesteal(i32::MAX as u32, &[&leech, &leech, &leech]),
            u32::MAX
        );

        let tables = CombatTables {
            crit_multiplier: u32::MAX,
            ..CombatTables::new()
        };
        assert_eq!(apply_critical(u32::MAX, &tables), u32::MAX);
        assert_eq!(apply_critical(0, &tables), 0);
    }
}
