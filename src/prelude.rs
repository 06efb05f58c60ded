//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! pizzaiolo crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use pizzaiolo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a tagged pool and build the generator
//! let pool = StaticPool::from_file("path/to/pool.json")?;
//! let mut generator = Generator::from_providers(&pool, &pool)
//!     .with_suggested(["Fior di latte"])
//!     .build()?;
//!
//! // Generate a batch and inspect it
//! for recipe in generator.generate_batch(5) {
//!     println!("{} ({})", recipe.name, recipe.archetype_used);
//! }
//! # Ok(())
//! # }
//! ```

// Core generation
pub use crate::generator::{Generator, GeneratorBuilder, VarietyTracker};

// Data model
pub use crate::model::{GeneratedRecipe, Item, ItemKind, ItemRef, Tag};

// Pools and external boundaries
pub use crate::pool::{
    IngredientProvider, PreparationProvider, RecipeStore, StaticPool, TagIndex,
};

// Archetypes
pub use crate::catalog::{Archetype, ArchetypeCatalog, DEFAULT_ARCHETYPE};
pub use crate::detect::{ArchetypeDetector, DEFAULT_DETECTED_ARCHETYPE};

// Naming
pub use crate::naming::{NameSynthesizer, TemplateRegistry};

// Error types
pub use crate::error::{GenerationError, PoolError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
