use crate::env::TagRegistry;

/// Oracle providing combat balance numbers and the tag vocabulary.
///
/// This oracle defines how damage is computed. It does NOT define item data
/// (use ItemOracle for that).
pub trait TablesOracle: Send + Sync {
    fn combat(&self) -> &CombatTables;
    fn tags(&self) -> &TagRegistry;
}

/// Balance parameters for damage resolution.
///
/// All percentages are integers (150 = ×1.5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatTables {
    /// Damage dealt when equipped items contribute no base damage.
    pub unarmed_damage: u32,
    /// Floor applied to the final damage.
    pub minimum_damage: u32,
    /// Defender armor is divided by this before being subtracted.
    pub armor_divisor: u32,
    /// Critical chance before item bonuses, in percent.
    pub base_crit_chance: u32,
    /// Cap on the total critical chance, in percent.
    pub max_crit_chance: u32,
    /// Critical damage multiplier, in percent.
    pub crit_multiplier: u32,
    pub status: StatusTables,
}

impl CombatTables {
    pub const DEFAULT_UNARMED_DAMAGE: u32 = 1;
    pub const DEFAULT_ARMOR_DIVISOR: u32 = 2;
    pub const DEFAULT_BASE_CRIT_CHANCE: u32 = 5;
    pub const DEFAULT_MAX_CRIT_CHANCE: u32 = 75;
    pub const DEFAULT_CRIT_MULTIPLIER: u32 = 150;

    pub const fn new() -> Self {
        Self {
            unarmed_damage: Self::DEFAULT_UNARMED_DAMAGE,
            minimum_damage: 0,
            armor_divisor: Self::DEFAULT_ARMOR_DIVISOR,
            base_crit_chance: Self::DEFAULT_BASE_CRIT_CHANCE,
            max_crit_chance: Self::DEFAULT_MAX_CRIT_CHANCE,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            status: StatusTables::new(),
        }
    }
}

impl Default for CombatTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Magnitudes of status effects that touch damage, in percent or flat points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusTables {
    /// Defender takes this percentage less damage.
    pub shielded_less: i32,
    /// Defender subtracts this much flat damage.
    pub fortified_flat: i32,
    /// Defender takes this percentage more damage.
    pub vulnerable_more: i32,
    /// Attacker deals this percentage less damage.
    pub weakened_less: i32,
    /// Attacker deals this percentage more damage.
    pub enraged_more: i32,
}

impl StatusTables {
    pub const fn new() -> Self {
        Self {
            shielded_less: 25,
            fortified_flat: 3,
            vulnerable_more: 25,
            weakened_less: 25,
            enraged_more: 25,
        }
    }
}

impl Default for StatusTables {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory [`TablesOracle`] holding loaded balance data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTables {
    combat: CombatTables,
    tags: TagRegistry,
}

impl RuleTables {
    pub fn new(combat: CombatTables, tags: TagRegistry) -> Self {
        Self { combat, tags }
    }
}

impl TablesOracle for RuleTables {
    fn combat(&self) -> &CombatTables {
        &self.combat
    }

    fn tags(&self) -> &TagRegistry {
        &self.tags
    }
}
