//! Layered damage modifiers.
//!
//! Every damage stage (synergies, status effects) collects its modifiers into
//! a [`BonusStack`] and applies them in a fixed order:
//! Flat → %Inc → More → Less → Clamp.
//!
//! All math is integer percentage math on `i64`, so results are identical on
//! every platform and a single item cannot overflow the pipeline.

/// A single modifier applied to a damage value.
///
/// - **Flat**: Additive, applied first (e.g., +4 from a blade synergy)
/// - **Increased**: Percentages summed, then applied once (e.g., +20% and +15% = ×1.35)
/// - **More**: Sequential multipliers (50 = ×1.5)
/// - **Less**: Sequential reductions (25 = ×0.75)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bonus {
    Flat(i32),
    Increased(i32),
    More(i32),
    Less(i32),
}

impl Bonus {
    pub fn flat(value: i32) -> Self {
        Bonus::Flat(value)
    }

    pub fn increased(percent: i32) -> Self {
        Bonus::Increased(percent)
    }

    pub fn more(percent: i32) -> Self {
        Bonus::More(percent)
    }

    pub fn less(percent: i32) -> Self {
        Bonus::Less(percent)
    }
}

/// Ordered collection of modifiers for one damage stage.
///
/// # Example
/// ```
/// # use rogue_core::stats::{Bonus, BonusStack};
/// let mut stack = BonusStack::new();
/// stack.add(Bonus::flat(5));       // +5
/// stack.add(Bonus::increased(20)); // +20%
/// stack.add(Bonus::more(50));      // ×1.5
/// stack.add(Bonus::less(10));      // ×0.9
///
/// // (10 + 5) × 1.2 = 18 → ×1.5 = 27 → ×0.9 = 24
/// assert_eq!(stack.apply(10, 0, 100), 24);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusStack {
    bonuses: Vec<Bonus>,
}

impl BonusStack {
    pub fn new() -> Self {
        Self {
            bonuses: Vec::new(),
        }
    }

    pub fn add(&mut self, bonus: Bonus) {
        self.bonuses.push(bonus);
    }

    /// Applies every modifier to `base` and clamps the result to `[min, max]`.
    pub fn apply(&self, base: i64, min: i64, max: i64) -> i64 {
        let flat: i64 = self
            .bonuses
            .iter()
            .filter_map(|b| match b {
                Bonus::Flat(v) => Some(*v as i64),
                _ => None,
            })
            .sum();

        let increased: i64 = self
            .bonuses
            .iter()
            .filter_map(|b| match b {
                Bonus::Increased(p) => Some(*p as i64),
                _ => None,
            })
            .sum();

        let mut value = base.saturating_add(flat);
        if increased != 0 {
            value = scale(value, 100 + increased);
        }

        for bonus in &self.bonuses {
            if let Bonus::More(p) = bonus {
                value = scale(value, 100 + *p as i64);
            }
        }

        for bonus in &self.bonuses {
            if let Bonus::Less(p) = bonus {
                value = scale(value, 100 - *p as i64);
            }
        }

        value.clamp(min, max)
    }
}

/// `value × percent / 100`, truncating toward zero.
#[inline]
fn scale(value: i64, percent: i64) -> i64 {
    value.saturating_mul(percent) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_is_identity() {
        assert_eq!(BonusStack::new().apply(17, 0, i64::MAX), 17);
    }

    #[test]
    fn increased_percentages_are_summed() {
        let mut stack = BonusStack::new();
        stack.add(Bonus::increased(20));
        stack.add(Bonus::increased(30));
        // 100 × 1.5, not 100 × 1.2 × 1.3
        assert_eq!(stack.apply(100, 0, i64::MAX), 150);
    }

    #[test]
    fn more_multipliers_compound() {
        let mut stack = BonusStack::new();
        stack.add(Bonus::more(50));
        stack.add(Bonus::more(50));
        assert_eq!(stack.apply(20, 0, i64::MAX), 45);
    }

    #[test]
    fn flat_applies_before_multipliers() {
        let mut stack = BonusStack::new();
        stack.add(Bonus::more(100));
        stack.add(Bonus::flat(5));
        assert_eq!(stack.apply(5, 0, i64::MAX), 20);
    }

    #[test]
    fn clamp_floors_negative_results() {
        let mut stack = BonusStack::new();
        stack.add(Bonus::flat(-50));
        assert_eq!(stack.apply(10, 0, i64::MAX), 0);
    }

    #[test]
    fn full_reduction_reaches_zero() {
        let mut stack = BonusStack::new();
        stack.add(Bonus::less(100));
        assert_eq!(stack.apply(999, 0, i64::MAX), 0);
    }
}
