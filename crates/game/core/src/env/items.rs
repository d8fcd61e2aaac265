use core::fmt;

use arrayvec::ArrayVec;
use strum::{EnumCount, IntoEnumIterator};

use crate::config::GameConfig;
use crate::env::TagId;

/// Read-only access to item definitions.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<&ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<&ItemDefinition>;
}

/// Stable identifier of an item definition in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Numeric attributes an item can carry.
///
/// Declaration order is the storage order inside [`AttributeMap`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumCount,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attribute {
    /// Damage the item adds to its wielder's attack.
    BaseDamage,
    /// Carry weight. Not used by combat resolution.
    Weight,
    /// Damage reduction the item grants its wearer.
    Armor,
    /// Added percentage chance of a critical hit.
    CritChance,
    /// Percentage of dealt damage returned to the attacker as health.
    Lifesteal,
    /// Flat damage reflected onto an attacker.
    Thorns,
}

/// Dense attribute table, one slot per [`Attribute`]. Absent attributes are 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeMap {
    values: [i32; Attribute::COUNT],
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        self.values[attribute as usize]
    }

    pub fn set(&mut self, attribute: Attribute, value: i32) {
        self.values[attribute as usize] = value;
    }

    /// Builder form of [`AttributeMap::set`].
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        self.set(attribute, value);
        self
    }

    /// Iterates `(attribute, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::iter().map(move |attribute| (attribute, self.get(attribute)))
    }

    /// First attribute holding a negative value, if any.
    pub fn first_negative(&self) -> Option<(Attribute, i32)> {
        self.iter().find(|(_, value)| *value < 0)
    }
}

impl FromIterator<(Attribute, i32)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (Attribute, i32)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (attribute, value) in iter {
            map.set(attribute, value);
        }
        map
    }
}

/// A validated, immutable item definition.
///
/// Tags are stored as [`TagId`]s resolved against the vocabulary at load time,
/// in the order the data file listed them. Definitions are only created by
/// [`crate::ItemCatalog::build`], which guarantees every tag is declared and
/// appears once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub tags: ArrayVec<TagId, { GameConfig::MAX_ITEM_TAGS }>,
    pub attributes: AttributeMap,
}

impl ItemDefinition {
    pub fn has_tag(&self, tag: TagId) -> bool {
        self.tags.contains(&tag)
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }
}
