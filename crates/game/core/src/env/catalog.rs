//! Validated item catalog.
//!
//! Content files describe items with [`ItemSpec`]: tag names and a sparse
//! attribute map. [`ItemCatalog::build`] checks every spec against the tag
//! vocabulary and turns it into an [`ItemDefinition`]. Anything that would
//! make combat ambiguous is rejected here, at load time.

use std::collections::{BTreeMap, HashMap};

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::{
    Attribute, AttributeMap, CatalogError, ItemDefinition, ItemId, ItemOracle, TagRegistry,
};

/// Item as written in a content file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: BTreeMap<Attribute, i32>,
}

impl ItemSpec {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            tags: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, attribute: Attribute, value: i32) -> Self {
        self.attributes.insert(attribute, value);
        self
    }

    fn into_definition(self, registry: &TagRegistry) -> Result<ItemDefinition, CatalogError> {
        let id = self.id;

        if self.tags.len() > GameConfig::MAX_ITEM_TAGS {
            return Err(CatalogError::TooManyItemTags {
                item: id,
                count: self.tags.len(),
                max: GameConfig::MAX_ITEM_TAGS,
            });
        }

        let mut tags = ArrayVec::new();
        for name in self.tags {
            let tag = registry.lookup(&name).ok_or_else(|| CatalogError::UnknownTag {
                item: id,
                tag: name.clone(),
            })?;
            if tags.contains(&tag) {
                return Err(CatalogError::RepeatedTag { item: id, tag: name });
            }
            tags.push(tag);
        }

        let attributes: AttributeMap = self.attributes.into_iter().collect();
        if let Some((attribute, value)) = attributes.first_negative() {
            return Err(CatalogError::NegativeAttribute {
                item: id,
                attribute,
                value,
            });
        }

        Ok(ItemDefinition {
            id,
            name: self.name,
            tags,
            attributes,
        })
    }
}

/// Item definitions keyed by id, validated against a tag vocabulary.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemCatalog {
    /// Validates `specs` against `registry` and builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, in spec order.
    pub fn build(registry: &TagRegistry, specs: Vec<ItemSpec>) -> Result<Self, CatalogError> {
        let mut definitions = HashMap::with_capacity(specs.len());
        for spec in specs {
            let definition = spec.into_definition(registry)?;
            if definitions.contains_key(&definition.id) {
                return Err(CatalogError::DuplicateItem(definition.id));
            }
            definitions.insert(definition.id, definition);
        }
        Ok(Self { definitions })
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.definitions.get(&id)
    }

    fn all_definitions(&self) -> Vec<&ItemDefinition> {
        let mut all: Vec<_> = self.definitions.values().collect();
        all.sort_by_key(|definition| definition.id);
        all
    }
}
