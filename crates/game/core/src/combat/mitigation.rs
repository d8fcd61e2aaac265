//! Status effect modifiers on outgoing and incoming damage.

use strum::IntoEnumIterator;

use crate::env::StatusTables;
use crate::state::{StatusEffectKind, StatusEffects};
use crate::stats::{Bonus, BonusStack};

/// Collects status modifiers in [`StatusEffectKind`] declaration order.
///
/// Defensive kinds are read from the defender, offensive kinds from the
/// attacker.
pub fn status_modifiers(
    attacker: &StatusEffects,
    defender: &StatusEffects,
    tables: &StatusTables,
) -> BonusStack {
    let mut stack = BonusStack::new();
    for kind in StatusEffectKind::iter() {
        let bonus = match kind {
            StatusEffectKind::Shielded if defender.contains(kind) => {
                Bonus::less(tables.shielded_less)
            }
            StatusEffectKind::Fortified if defender.contains(kind) => {
                Bonus::flat(tables.fortified_flat.saturating_neg())
            }
            StatusEffectKind::Vulnerable if defender.contains(kind) => {
                Bonus::more(tables.vulnerable_more)
            }
            StatusEffectKind::Weakened if attacker.contains(kind) => {
                Bonus::less(tables.weakened_less)
            }
            StatusEffectKind::Enraged if attacker.contains(kind) => {
                Bonus::more(tables.enraged_more)
            }
            _ => continue,
        };
        stack.add(bonus);
    }
    stack
}

/// Applies status modifiers and the damage floor.
pub fn mitigate(
    damage: u32,
    attacker: &StatusEffects,
    defender: &StatusEffects,
    tables: &StatusTables,
    minimum: u32,
) -> u32 {
    let stack = status_modifiers(attacker, defender, tables);
    super::damage::to_damage(stack.apply(damage as i64, minimum as i64, u32::MAX as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Turn;

    fn with(kinds: &[StatusEffectKind]) -> StatusEffects {
        let mut effects = StatusEffects::empty();
        for kind in kinds {
            effects.add(*kind, Turn(10));
        }
        effects
    }

    #[test]
    fn no_effects_no_change() {
        let none = StatusEffects::empty();
        assert_eq!(mitigate(40, &none, &none, &StatusTables::new(), 0), 40);
    }

    #[test]
    fn shielded_defender_takes_less() {
        let none = StatusEffects::empty();
        let shielded = with(&[StatusEffectKind::Shielded]);
        assert_eq!(mitigate(40, &none, &shielded, &StatusTables::new(), 0), 30);
    }

    #[test]
    fn attacker_defensive_status_is_ignored() {
        let shielded = with(&[StatusEffectKind::Shielded]);
        let none = StatusEffects::empty();
        assert_eq!(mitigate(40, &shielded, &none, &StatusTables::new(), 0), 40);
    }

    #[test]
    fn fortified_reduces_flat_before_multipliers() {
        let none = StatusEffects::empty();
        let defender = with(&[StatusEffectKind::Fortified, StatusEffectKind::Vulnerable]);
        // (20 - 3) × 1.25 = 21
        assert_eq!(mitigate(20, &none, &defender, &StatusTables::new(), 0), 21);
    }

    #[test]
    fn weakened_attacker_against_fortified_floors_at_minimum() {
        let attacker = with(&[StatusEffectKind::Weakened]);
        let defender = with(&[StatusEffectKind::Fortified]);
        assert_eq!(mitigate(2, &attacker, &defender, &StatusTables::new(), 1), 1);
        assert_eq!(mitigate(2, &attacker, &defender, &StatusTables::new(), 0), 0);
    }

    #[test]
    fn enraged_attacker_deals_more() {
        let attacker = with(&[StatusEffectKind::Enraged]);
        let none = StatusEffects::empty();
        assert_eq!(mitigate(40, &attacker, &none, &StatusTables::new(), 0), 50);
    }
}
