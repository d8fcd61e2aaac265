//! Tag vocabulary and synergy rules.
//!
//! The registry is the ordered list of every tag the content declares. Its
//! order is significant: synergies are evaluated by walking the registry
//! front to back, which makes resolution order a property of the data rather
//! than of hash iteration or equipment order.

use core::fmt;

use crate::config::GameConfig;
use crate::env::CatalogError;

/// Index of a tag in the [`TagRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TagId(pub u16);

impl TagId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag#{}", self.0)
    }
}

/// Effect applied when a synergy fires.
///
/// Percentages are integers (50 = +50%), matching the bonus stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SynergyEffect {
    /// Multiply damage by `(100 + percent) / 100`.
    More(i32),
    /// Add flat damage before multipliers.
    Flat(i32),
    /// Ignore this percentage of the defender's armor.
    Pierce(u8),
}

/// Synergy attached to a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynergyRule {
    /// Number of equipped items that must carry the tag.
    pub threshold: u8,
    pub effect: SynergyEffect,
}

impl SynergyRule {
    pub const fn new(threshold: u8, effect: SynergyEffect) -> Self {
        Self { threshold, effect }
    }

    /// The common case: two items sharing the tag.
    pub const fn pair(effect: SynergyEffect) -> Self {
        Self::new(2, effect)
    }
}

/// One declared tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub synergy: Option<SynergyRule>,
}

impl TagDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            synergy: None,
        }
    }

    #[must_use]
    pub fn with_synergy(mut self, rule: SynergyRule) -> Self {
        self.synergy = Some(rule);
        self
    }
}

/// Ordered, validated tag vocabulary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<TagDefinition>,
}

impl TagRegistry {
    /// Validates and freezes a vocabulary.
    ///
    /// # Errors
    ///
    /// Rejects empty or duplicate names, zero thresholds, and vocabularies
    /// larger than [`GameConfig::MAX_TAGS`].
    pub fn new(tags: Vec<TagDefinition>) -> Result<Self, CatalogError> {
        if tags.len() > GameConfig::MAX_TAGS {
            return Err(CatalogError::TooManyTags {
                count: tags.len(),
                max: GameConfig::MAX_TAGS,
            });
        }

        for (index, tag) in tags.iter().enumerate() {
            if tag.name.trim().is_empty() {
                return Err(CatalogError::EmptyTagName);
            }
            if tags[..index].iter().any(|earlier| earlier.name == tag.name) {
                return Err(CatalogError::DuplicateTag(tag.name.clone()));
            }
            if matches!(tag.synergy, Some(rule) if rule.threshold == 0) {
                return Err(CatalogError::ZeroThreshold {
                    tag: tag.name.clone(),
                });
            }
        }

        Ok(Self { tags })
    }

    /// Resolves a tag name to its id.
    pub fn lookup(&self, name: &str) -> Option<TagId> {
        self.tags
            .iter()
            .position(|tag| tag.name == name)
            .map(|index| TagId(index as u16))
    }

    pub fn get(&self, id: TagId) -> Option<&TagDefinition> {
        self.tags.get(id.index())
    }

    pub fn name(&self, id: TagId) -> Option<&str> {
        self.get(id).map(|tag| tag.name.as_str())
    }

    /// Iterates tags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TagId, &TagDefinition)> + '_ {
        self.tags
            .iter()
            .enumerate()
            .map(|(index, tag)| (TagId(index as u16), tag))
    }

    pub fn contains(&self, id: TagId) -> bool {
        id.index() < self.tags.len()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
