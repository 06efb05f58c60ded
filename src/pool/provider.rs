use crate::error::{PoolError, StoreError};
use crate::model::{GeneratedRecipe, Item};
use serde::{Deserialize, Serialize};
use std::fs;

/// Supplies the tagged ingredient pool for a generation session.
///
/// Implementations are expected to hand back pools already deduplicated by
/// case-insensitive name; the generator does not re-check this.
pub trait IngredientProvider {
    fn get_all(&self) -> Vec<Item>;
}

/// Supplies the tagged preparation pool for a generation session.
pub trait PreparationProvider {
    fn get_all(&self) -> Vec<Item>;
}

/// The persistence boundary for assembled recipes.
///
/// The generator never writes storage itself; the caller hands each
/// `GeneratedRecipe` to a store after generation.
pub trait RecipeStore {
    fn create(&mut self, recipe: &GeneratedRecipe) -> Result<(), StoreError>;
}

/// An in-memory pool backing both provider traits, matching the JSON shape
/// the seed data uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticPool {
    pub ingredients: Vec<Item>,
    pub preparations: Vec<Item>,
}

impl StaticPool {
    pub fn new(ingredients: Vec<Item>, preparations: Vec<Item>) -> Self {
        Self {
            ingredients,
            preparations,
        }
    }

    /// Loads a pool from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, PoolError> {
        let content = fs::read_to_string(path).map_err(|e| PoolError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| PoolError::Parse(e.to_string()))
    }
}

impl IngredientProvider for StaticPool {
    fn get_all(&self) -> Vec<Item> {
        self.ingredients.clone()
    }
}

impl PreparationProvider for StaticPool {
    fn get_all(&self) -> Vec<Item> {
        self.preparations.clone()
    }
}
