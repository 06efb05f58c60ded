use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque semantic label drawn from the fixed tag vocabulary
/// (e.g. `"cheese_blue"`, `"vegetable_mushrooms"`, `"finish_sweet"`).
///
/// Tags are attributes on items, never entities with their own lifecycle.
pub type Tag = String;

/// Distinguishes the two pools an item can originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Ingredient,
    Preparation,
}

/// A tagged ingredient or preparation, as supplied by the pool providers.
///
/// Names are unique case-insensitively within a pool; the providers are
/// expected to deduplicate before handing pools to the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub tags: Vec<Tag>,
}

impl Item {
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    /// Builds a preparation item from its four ordered tag layers:
    /// base category, elaboration method, pizza role, flavor character.
    ///
    /// The layers are flattened into `tags` in that order; for selection
    /// purposes a preparation is indexed exactly like an ingredient.
    pub fn preparation(
        name: impl Into<String>,
        base: impl Into<Tag>,
        elaboration: impl Into<Tag>,
        role: impl Into<Tag>,
        character: impl Into<Tag>,
    ) -> Self {
        Self {
            name: name.into(),
            tags: vec![
                base.into(),
                elaboration.into(),
                role.into(),
                character.into(),
            ],
        }
    }

    /// The case-insensitive identity of this item within a pool.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A reference to a pool item included in a generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub name: String,
}

impl ItemRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An assembled recipe, handed to the caller and immutable from then on.
///
/// Invariant: no two refs across `ingredients` and `preparations` share a
/// case-insensitive name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub name: String,
    pub archetype_used: String,
    pub ingredients: Vec<ItemRef>,
    pub preparations: Vec<ItemRef>,
}

impl GeneratedRecipe {
    /// All component names in selection order, ingredients first.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .iter()
            .chain(self.preparations.iter())
            .map(|r| r.name.as_str())
    }
}
