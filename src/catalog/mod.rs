use crate::model::Tag;
use ahash::AHashMap;
use rand::Rng;

/// The id of the catalog's designated fallback archetype, used whenever
/// detection or selection cannot proceed with the requested one.
pub const DEFAULT_ARCHETYPE: &str = "fusion";

/// A named flavor-profile template.
///
/// Each inner vec of `tag_groups` is an OR-set of acceptable tags for one
/// slot of the recipe; one item is drawn per group when the group has pool
/// coverage. `weight` steers how often `generate_batch` draws the archetype.
#[derive(Debug, Clone)]
pub struct Archetype {
    pub id: String,
    pub tag_groups: Vec<Vec<Tag>>,
    pub weight: u32,
}

impl Archetype {
    pub fn new(id: &str, weight: u32, groups: &[&[&str]]) -> Self {
        Self {
            id: id.to_string(),
            tag_groups: groups
                .iter()
                .map(|g| g.iter().map(|t| t.to_string()).collect())
                .collect(),
            weight,
        }
    }
}

/// The static archetype table. Pure data: lookup by id, a designated default,
/// and a weighted draw for batch generation.
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    archetypes: Vec<Archetype>,
    by_id: AHashMap<String, usize>,
}

impl ArchetypeCatalog {
    /// Builds a catalog from explicit archetypes. The default archetype is
    /// appended automatically if the given set does not define it.
    pub fn new(mut archetypes: Vec<Archetype>) -> Self {
        if !archetypes.iter().any(|a| a.id == DEFAULT_ARCHETYPE) {
            archetypes.push(Self::fallback_archetype());
        }
        let by_id = archetypes
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();
        Self { archetypes, by_id }
    }

    /// The hand-authored standard table. Weights mirror the production
    /// distribution: the classics dominate, seafood and vegan stay rare.
    pub fn standard() -> Self {
        Self::new(vec![
            Archetype::new(
                "classica",
                28,
                &[
                    &["base_tomato"],
                    &["cheese_fresh"],
                    &["herb_fresh_delicate", "spice_dried"],
                ],
            ),
            Archetype::new(
                "tradizionale",
                21,
                &[
                    &["base_tomato"],
                    &["cheese_fresh", "cheese_smoked"],
                    &["meat_mild_salumi", "meat_cured_delicate", "meat_cooked"],
                    &["vegetable_mushrooms", "vegetable_grilled", "finish_savory"],
                ],
            ),
            Archetype::new(
                "terra_bosco",
                7,
                &[
                    &["vegetable_mushrooms", "premium_truffle"],
                    &["cheese_aged", "cheese_soft"],
                    &["meat_cooked", "meat_fatty"],
                    &["herb_fresh_aromatic"],
                ],
            ),
            Archetype::new(
                "fresca_estiva",
                7,
                &[
                    &["vegetable_tomato_fresh", "vegetable_leafy"],
                    &["cheese_fresh", "cheese_creamy"],
                    &["herb_fresh_delicate", "herb_citrus"],
                    &["finish_savory", "finish_tangy"],
                ],
            ),
            Archetype::new(
                "piccante_decisa",
                4,
                &[
                    &["meat_spicy", "spice_hot"],
                    &["base_tomato"],
                    &["cheese_smoked", "cheese_aged"],
                    &["vegetable_onions", "vegetable_grilled"],
                ],
            ),
            // One seafood slot, one acid/citrus slot, one textural vegetable.
            Archetype::new(
                "mare",
                2,
                &[
                    &[
                        "seafood_fish",
                        "seafood_crustaceans",
                        "seafood_mollusks",
                        "seafood_preserved",
                    ],
                    &["herb_citrus", "finish_tangy"],
                    &["vegetable_leafy", "vegetable_tomato_fresh"],
                ],
            ),
            Archetype::new(
                "vegana",
                1,
                &[
                    &["base_tomato", "base_cream_vegetable"],
                    &["vegetable_grilled", "vegetable_mushrooms"],
                    &["vegetable_leafy", "vegetable_bitter"],
                    &["nut_crunchy", "nut_creamy"],
                    &["herb_fresh_delicate", "herb_fresh_aromatic"],
                ],
            ),
            Archetype::new(
                "dolce_salato",
                2,
                &[
                    &["fruit_sweet", "finish_sweet"],
                    &["cheese_blue", "cheese_aged"],
                    &["meat_cured_delicate", "nut_creamy"],
                ],
            ),
            Self::fallback_archetype(),
        ])
    }

    fn fallback_archetype() -> Archetype {
        Archetype::new(
            DEFAULT_ARCHETYPE,
            3,
            &[
                &[
                    "base_tomato",
                    "base_cream_vegetable",
                    "base_pesto",
                    "base_cream_cheese",
                ],
                &["cheese_fresh", "cheese_aged", "cheese_blue", "cheese_smoked"],
                &[
                    "meat_cured_delicate",
                    "meat_spicy",
                    "seafood_preserved",
                    "vegetable_grilled",
                    "vegetable_mushrooms",
                ],
                &["finish_sweet", "finish_tangy", "premium_truffle", "herb_citrus"],
            ],
        )
    }

    pub fn get(&self, id: &str) -> Option<&Archetype> {
        self.by_id.get(id).map(|&i| &self.archetypes[i])
    }

    /// The designated fallback archetype. Always present.
    pub fn default_archetype(&self) -> &Archetype {
        self.get(DEFAULT_ARCHETYPE)
            .unwrap_or(&self.archetypes[0])
    }

    /// Resolves an id, falling back to the default archetype for ids the
    /// catalog does not know.
    pub fn resolve(&self, id: &str) -> &Archetype {
        self.get(id).unwrap_or_else(|| self.default_archetype())
    }

    /// Draws an archetype by weight. Zero-weight entries are never drawn
    /// unless every entry is zero-weight, in which case the default wins.
    pub fn draw(&self, rng: &mut impl Rng) -> &Archetype {
        let total: u64 = self.archetypes.iter().map(|a| u64::from(a.weight)).sum();
        if total == 0 {
            return self.default_archetype();
        }
        let mut roll = rng.random_range(0..total);
        for archetype in &self.archetypes {
            let w = u64::from(archetype.weight);
            if roll < w {
                return archetype;
            }
            roll -= w;
        }
        self.default_archetype()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

impl Default for ArchetypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
