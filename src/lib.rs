//! # Pizzaiolo - Constraint-Guided Recipe Generation Engine
//!
//! **Pizzaiolo** assembles gourmet pizza recipes from tagged pools of
//! ingredients and preparations. Each recipe is shaped by a flavor
//! **archetype**: an ordered list of tag-groups, each an OR-set of
//! acceptable tags for one slot of the recipe. Selection is soft constraint
//! satisfaction: slots without pool coverage are skipped rather than failing
//! the batch, forced inclusions always make it in, and a per-batch variety
//! tracker biases picks away from overused items.
//!
//! ## Core Workflow
//!
//! The engine is storage-agnostic. Pools arrive through the provider traits
//! (or plain `Vec<Item>`), recipes leave through the caller. The primary
//! workflow is:
//!
//! 1.  **Load Your Pools**: Fetch tagged ingredients and preparations from
//!     your own storage, or implement [`pool::IngredientProvider`] /
//!     [`pool::PreparationProvider`] on your adapter.
//! 2.  **Build**: Use [`generator::Generator::builder`] to configure forced
//!     inclusions, the share ceiling, a custom catalog, or a deterministic
//!     seed. `build` fails only when both pools are empty.
//! 3.  **Generate**: Call `generate_batch` (archetypes drawn by catalog
//!     weight) or `generate_for` (pinned archetype). Each recipe gets a
//!     unique synthesized name.
//! 4.  **Persist**: Hand the recipes to your [`pool::RecipeStore`]; the
//!     engine never touches storage itself.
//!
//! The companion [`detect::ArchetypeDetector`] classifies pre-existing
//! recipes into archetypes for legacy backfills, and
//! [`naming::NameSynthesizer`] is exposed standalone for bulk rename tooling.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pizzaiolo::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let ingredients = vec![
//!         Item::new("Pomodoro San Marzano", vec!["base_tomato".to_string()]),
//!         Item::new("Fior di latte", vec!["cheese_fresh".to_string()]),
//!         Item::new("Basilico fresco", vec!["herb_fresh_delicate".to_string()]),
//!         Item::new("Tonno", vec!["seafood_fish".to_string()]),
//!         Item::new("Limone grattugiato", vec!["herb_citrus".to_string()]),
//!         Item::new("Rucola", vec!["vegetable_leafy".to_string()]),
//!     ];
//!     let preparations = vec![Item::preparation(
//!         "Cipolla caramellata",
//!         "vegetable_onions",
//!         "prep_caramelized",
//!         "pizza_topping",
//!         "flavor_sweet",
//!     )];
//!
//!     let mut generator = Generator::builder(ingredients, preparations)
//!         .with_suggested(["Fior di latte"])
//!         .build()?;
//!
//!     let mut tracker = VarietyTracker::new();
//!     let recipe = generator.generate_for("mare", 1, &mut tracker);
//!     println!("{} ({})", recipe.name, recipe.archetype_used);
//!
//!     // Classify a legacy record
//!     let detector = ArchetypeDetector::new();
//!     let archetype = detector.detect(
//!         &["Tonno".to_string(), "Limone grattugiato".to_string()],
//!         "Pizza al tonno",
//!     );
//!     assert_eq!(archetype, "mare");
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod detect;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod pool;
pub mod prelude;
