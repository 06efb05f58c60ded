use crate::catalog::ArchetypeCatalog;
use crate::error::GenerationError;
use crate::model::{GeneratedRecipe, Item, ItemKind, ItemRef};
use crate::naming::NameSynthesizer;
use crate::pool::{IngredientProvider, PreparationProvider, TagIndex};
use ahash::AHashSet;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod selection;
mod variety;

use selection::SelectionEngine;
pub use variety::VarietyTracker;

/// How many leading components feed the name synthesizer.
const LEADING_NAMES: usize = 3;

/// The recipe generator: owns the pool indices, the catalog, the RNG and the
/// set of names already handed out.
///
/// A `Generator` is created through [`Generator::builder`]. It is purely
/// synchronous; a batch is generated as a sequential loop so that every
/// selection observes the variety-tracker updates of the previous ones.
pub struct Generator {
    ingredients: TagIndex,
    preparations: TagIndex,
    catalog: ArchetypeCatalog,
    synthesizer: NameSynthesizer,
    suggested: Vec<String>,
    share_ceiling: f64,
    used_names: AHashSet<String>,
    rng: StdRng,
}

/// Builder for [`Generator`], mirroring the crate's compile-then-run split:
/// all configuration happens here, `build` validates the pools once.
pub struct GeneratorBuilder {
    ingredients: Vec<Item>,
    preparations: Vec<Item>,
    catalog: ArchetypeCatalog,
    suggested: Vec<String>,
    share_ceiling: f64,
    existing_names: Vec<String>,
    seed: Option<u64>,
}

impl GeneratorBuilder {
    pub fn new(ingredients: Vec<Item>, preparations: Vec<Item>) -> Self {
        Self {
            ingredients,
            preparations,
            catalog: ArchetypeCatalog::standard(),
            suggested: Vec::new(),
            share_ceiling: 0.5,
            existing_names: Vec::new(),
            seed: None,
        }
    }

    /// Replaces the standard archetype catalog.
    pub fn with_catalog(mut self, catalog: ArchetypeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Ingredient names the caller insists on including in every recipe.
    /// Names that do not resolve in either pool are skipped with a log entry.
    pub fn with_suggested<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggested = names.into_iter().map(Into::into).collect();
        self
    }

    /// The maximum share of a batch any single name may reach (default 0.5).
    pub fn with_share_ceiling(mut self, ceiling: f64) -> Self {
        self.share_ceiling = ceiling.clamp(0.0, 1.0);
        self
    }

    /// Recipe names already in use, so synthesized names stay unique across
    /// what the caller has persisted before.
    pub fn with_existing_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Seeds the RNG for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the pools and builds the generator. Two empty pools are the
    /// one fatal setup error: the caller must seed data first.
    pub fn build(self) -> Result<Generator, GenerationError> {
        if self.ingredients.is_empty() && self.preparations.is_empty() {
            return Err(GenerationError::EmptyPools);
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Generator {
            ingredients: TagIndex::build(self.ingredients),
            preparations: TagIndex::build(self.preparations),
            catalog: self.catalog,
            synthesizer: NameSynthesizer::new(),
            suggested: self.suggested,
            share_ceiling: self.share_ceiling,
            used_names: self.existing_names.into_iter().collect(),
            rng,
        })
    }
}

impl Generator {
    pub fn builder(ingredients: Vec<Item>, preparations: Vec<Item>) -> GeneratorBuilder {
        GeneratorBuilder::new(ingredients, preparations)
    }

    /// Convenience constructor drawing both pools from their providers.
    pub fn from_providers(
        ingredients: &dyn IngredientProvider,
        preparations: &dyn PreparationProvider,
    ) -> GeneratorBuilder {
        GeneratorBuilder::new(ingredients.get_all(), preparations.get_all())
    }

    /// Generates a batch with a fresh variety tracker scoped to this call.
    /// The archetype of each recipe is drawn by catalog weight.
    pub fn generate_batch(&mut self, count: usize) -> Vec<GeneratedRecipe> {
        let mut tracker = VarietyTracker::new();
        self.generate_batch_with(count, &mut tracker)
    }

    /// Generates a batch against a caller-owned tracker, so variety state can
    /// span several calls of one session.
    pub fn generate_batch_with(
        &mut self,
        count: usize,
        tracker: &mut VarietyTracker,
    ) -> Vec<GeneratedRecipe> {
        (0..count)
            .map(|_| {
                let archetype_id = self.catalog.draw(&mut self.rng).id.clone();
                self.generate_for(&archetype_id, count, tracker)
            })
            .collect()
    }

    /// Generates one recipe for a pinned archetype. Unknown ids resolve to
    /// the catalog's default archetype. `batch_size` scales the share
    /// ceiling; pass the total size of the batch this recipe belongs to.
    pub fn generate_for(
        &mut self,
        archetype_id: &str,
        batch_size: usize,
        tracker: &mut VarietyTracker,
    ) -> GeneratedRecipe {
        let archetype = self.catalog.resolve(archetype_id).clone();
        let fallback = self.catalog.default_archetype().clone();

        let engine =
            SelectionEngine::new(&self.ingredients, &self.preparations, self.share_ceiling);
        let outcome = engine.select(
            &archetype,
            &fallback,
            &self.suggested,
            tracker,
            batch_size,
            &mut self.rng,
        );

        if !outcome.unfilled_groups.is_empty() {
            tracing::debug!(
                archetype = %outcome.archetype_used,
                unfilled = outcome.unfilled_groups.len(),
                "recipe assembled with partially covered tag-groups"
            );
        }

        let mut ingredients: Vec<ItemRef> = Vec::new();
        let mut preparations: Vec<ItemRef> = Vec::new();
        for selected in outcome.selections {
            match selected.kind {
                ItemKind::Ingredient => ingredients.push(ItemRef::new(selected.item.name)),
                ItemKind::Preparation => preparations.push(ItemRef::new(selected.item.name)),
            }
        }

        let leading: Vec<String> = ingredients
            .iter()
            .chain(preparations.iter())
            .take(LEADING_NAMES)
            .map(|r| r.name.clone())
            .collect();
        let name = self
            .synthesizer
            .synthesize(&leading, &self.used_names, &mut self.rng);
        self.used_names.insert(name.clone());

        GeneratedRecipe {
            name,
            archetype_used: outcome.archetype_used,
            ingredients,
            preparations,
        }
    }

    /// The names this generator has produced or been told about so far.
    pub fn used_names(&self) -> impl Iterator<Item = &str> {
        self.used_names.iter().map(String::as_str)
    }

    pub fn catalog(&self) -> &ArchetypeCatalog {
        &self.catalog
    }
}
