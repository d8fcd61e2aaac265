//! Single-shot combat resolution.

use crate::combat::damage::{
    apply_critical, armor_reduction, base_damage, lifesteal, roll_critical, thorns,
};
use crate::combat::mitigation::mitigate;
use crate::combat::synergy::{apply_synergies, armor_pierce, detect_synergies};
use crate::combat::{CombatError, CombatResult, DamageBreakdown, InvalidState, Side};
use crate::env::{Env, ItemDefinition, ItemOracle, RngOracle, TablesOracle, TagRegistry};
use crate::state::ActorSnapshot;

/// Resolve one attack from `attacker` against `defender`.
///
/// This is the only entry point the orchestration layer needs. It borrows its
/// inputs immutably and returns a fresh [`CombatResult`].
///
/// # Pipeline
///
/// ```text
/// base      = sum(item base_damage) or unarmed_damage
/// synergy   = base with fired synergies (Flat, then More) in tag order
/// critical  = synergy × crit_multiplier   (only when `seed` is Some and the roll hits)
/// armored   = critical - min(armor × (100 - pierce) / 100 / armor_divisor, critical)
/// damage    = max(armored with status modifiers, minimum_damage)
/// ```
///
/// Without a seed no dice are rolled, so the result is a pure function of
/// the snapshots and the environment. With a seed it is a pure function of
/// those plus the seed.
///
/// # Errors
///
/// - [`CombatError::InvalidState`] when either health is negative or an
///   equipped item has a negative attribute
/// - [`CombatError::ItemNotFound`] / [`CombatError::UnknownTag`] when the
///   snapshot and the catalog disagree
/// - [`CombatError::Oracle`] when a required oracle is missing (the rng
///   oracle is only required when a seed is given)
pub fn resolve<I, T, R>(
    attacker: &ActorSnapshot,
    defender: &ActorSnapshot,
    seed: Option<u64>,
    env: &Env<'_, I, T, R>,
) -> Result<CombatResult, CombatError>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    check_health(attacker, Side::Attacker)?;
    check_health(defender, Side::Defender)?;

    let items = env.items()?;
    let tables = env.tables()?;
    let params = tables.combat();

    let attacker_items = equipped(attacker, Side::Attacker, items, tables.tags())?;
    let defender_items = equipped(defender, Side::Defender, items, tables.tags())?;

    // 1. Base and synergies
    let base = base_damage(&attacker_items, params);
    let synergies = detect_synergies(&attacker_items, tables.tags());
    let after_synergies = apply_synergies(base, &synergies);

    // 2. Critical
    let critical = match seed {
        Some(seed) => roll_critical(attacker, defender, &attacker_items, seed, params, env.rng()?),
        None => false,
    };
    let after_critical = if critical {
        apply_critical(after_synergies, params)
    } else {
        after_synergies
    };

    // 3. Armor, then status effects
    let armor = armor_reduction(
        after_critical,
        &defender_items,
        armor_pierce(&synergies),
        params,
    );
    let damage = mitigate(
        after_critical - armor,
        &attacker.status,
        &defender.status,
        &params.status,
        params.minimum_damage,
    );

    // 4. Health deltas
    let dealt = damage.min(defender.hp as u32);
    let defender_hp_delta = -(dealt as i32);
    let healed = lifesteal(dealt, &attacker_items) as i64;
    let reflected = thorns(&defender_items) as i64;
    let attacker_hp_delta =
        (healed - reflected).clamp(-(attacker.hp as i64), i32::MAX as i64) as i32;
    let attacker_hp_after = attacker.hp.saturating_add(attacker_hp_delta);
    let defender_hp_after = defender.hp + defender_hp_delta;

    Ok(CombatResult {
        damage,
        critical,
        synergies,
        breakdown: DamageBreakdown {
            base,
            after_synergies,
            after_critical,
            armor_reduction: armor,
            mitigated: damage,
        },
        attacker_hp_delta,
        defender_hp_delta,
        attacker_hp_after,
        defender_hp_after,
        attacker_defeated: attacker_hp_after <= 0,
        defender_defeated: defender_hp_after <= 0,
    })
}

fn check_health(actor: &ActorSnapshot, side: Side) -> Result<(), InvalidState> {
    if actor.hp < 0 {
        return Err(InvalidState::NegativeHealth {
            side,
            actor: actor.id,
            hp: actor.hp,
        });
    }
    Ok(())
}

/// Looks up every equipped item and re-checks what the catalog promised.
fn equipped<'a, I>(
    actor: &ActorSnapshot,
    side: Side,
    items: &'a I,
    tags: &TagRegistry,
) -> Result<Vec<&'a ItemDefinition>, CombatError>
where
    I: ItemOracle + ?Sized,
{
    actor
        .equipped
        .iter()
        .map(|id| {
            let item = items
                .definition(*id)
                .ok_or(CombatError::ItemNotFound { side, item: *id })?;

            if let Some(tag) = item.tags.iter().find(|tag| !tags.contains(**tag)) {
                return Err(CombatError::UnknownTag {
                    item: item.id,
                    tag: *tag,
                });
            }

            if let Some((attribute, value)) = item.attributes.first_negative() {
                return Err(InvalidState::NegativeAttribute {
                    side,
                    item: item.id,
                    attribute,
                    value,
                }
                .into());
            }

            Ok(item)
        })
        .collect()
}
