//! Reverse classification of already-assembled recipes into archetypes,
//! used when backfilling legacy records that predate tag-based generation.

/// The label an unmatched recipe resolves to. Detection never errors.
pub const DEFAULT_DETECTED_ARCHETYPE: &str = "tradizionale";

const MARE_KEYWORDS: &[&str] = &[
    "tonno",
    "alici",
    "acciughe",
    "salmone",
    "gamberi",
    "frutti di mare",
    "pesce",
    "vongole",
    "cozze",
];

const ANIMAL_KEYWORDS: &[&str] = &[
    "formaggio",
    "mozzarella",
    "prosciutto",
    "salame",
    "carne",
    "latte",
    "uovo",
];

const VEGAN_KEYWORDS: &[&str] = &["vegana", "vegan"];

const SPICY_KEYWORDS: &[&str] = &[
    "nduja",
    "peperoncino",
    "piccante",
    "calabrese",
    "diavola",
    "hot",
];

const EARTHY_KEYWORDS: &[&str] = &["porcini", "funghi", "tartufo", "salsiccia", "castagne"];

const FRESH_KEYWORDS: &[&str] = &[
    "rucola",
    "pomodorini",
    "pachino",
    "bufala",
    "basilico fresco",
    "verdure",
];

const CLASSIC_NAMES: &[&str] = &["margherita", "marinara"];

const TRADITIONAL_NAMES: &[&str] = &[
    "prosciutto",
    "funghi",
    "capricciosa",
    "quattro stagioni",
    "diavola",
    "quattro formaggi",
];

/// How many components a recipe may have and still count as a simple classic.
const CLASSIC_MAX_INGREDIENTS: usize = 4;

/// Minimum component count for the vegan heuristic to trigger without an
/// explicit vegan keyword in the title.
const VEGAN_MIN_INGREDIENTS: usize = 4;

/// Lowercased view of one recipe, shared by every rule predicate.
pub struct DetectionContext {
    ingredient_names: Vec<String>,
    recipe_name: String,
}

impl DetectionContext {
    pub fn new(ingredient_names: &[String], recipe_name: &str) -> Self {
        Self {
            ingredient_names: ingredient_names.iter().map(|n| n.to_lowercase()).collect(),
            recipe_name: recipe_name.to_lowercase(),
        }
    }

    fn any_ingredient_contains(&self, keywords: &[&str]) -> bool {
        self.ingredient_names
            .iter()
            .any(|name| keywords.iter().any(|kw| name.contains(kw)))
    }

    fn title_contains(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.recipe_name.contains(kw))
    }

    fn has_exact_ingredient(&self, name: &str) -> bool {
        self.ingredient_names.iter().any(|n| n == name)
    }

    fn ingredient_count(&self) -> usize {
        self.ingredient_names.len()
    }
}

/// One precedence step of the classifier: the first rule whose predicate
/// matches decides the archetype.
pub struct DetectionRule {
    pub archetype: &'static str,
    predicate: fn(&DetectionContext) -> bool,
}

impl DetectionRule {
    pub fn matches(&self, ctx: &DetectionContext) -> bool {
        (self.predicate)(ctx)
    }
}

/// Classifies an ingredient list (plus the recipe title) into the closest
/// archetype via a fixed, ordered rule table.
///
/// Deterministic and single-pass; ties are broken by rule order, and an
/// unmatched recipe always resolves to [`DEFAULT_DETECTED_ARCHETYPE`].
pub struct ArchetypeDetector {
    rules: Vec<DetectionRule>,
}

impl ArchetypeDetector {
    pub fn new() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn detect(&self, ingredient_names: &[String], recipe_name: &str) -> &'static str {
        let ctx = DetectionContext::new(ingredient_names, recipe_name);
        self.rules
            .iter()
            .find(|rule| rule.matches(&ctx))
            .map(|rule| rule.archetype)
            .unwrap_or(DEFAULT_DETECTED_ARCHETYPE)
    }

    /// The rule table in precedence order.
    pub fn rules(&self) -> &[DetectionRule] {
        &self.rules
    }
}

impl Default for ArchetypeDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn standard_rules() -> Vec<DetectionRule> {
    vec![
        DetectionRule {
            archetype: "mare",
            predicate: |ctx| {
                ctx.any_ingredient_contains(MARE_KEYWORDS) || ctx.title_contains(MARE_KEYWORDS)
            },
        },
        DetectionRule {
            archetype: "vegana",
            predicate: |ctx| {
                !ctx.any_ingredient_contains(ANIMAL_KEYWORDS)
                    && (ctx.title_contains(VEGAN_KEYWORDS)
                        || ctx.ingredient_count() >= VEGAN_MIN_INGREDIENTS)
            },
        },
        DetectionRule {
            archetype: "piccante_decisa",
            predicate: |ctx| {
                ctx.any_ingredient_contains(SPICY_KEYWORDS) || ctx.title_contains(SPICY_KEYWORDS)
            },
        },
        DetectionRule {
            archetype: "terra_bosco",
            predicate: |ctx| {
                ctx.any_ingredient_contains(EARTHY_KEYWORDS) || ctx.title_contains(EARTHY_KEYWORDS)
            },
        },
        DetectionRule {
            archetype: "fresca_estiva",
            predicate: |ctx| {
                ctx.any_ingredient_contains(FRESH_KEYWORDS) || ctx.title_contains(FRESH_KEYWORDS)
            },
        },
        DetectionRule {
            archetype: "classica",
            predicate: |ctx| {
                ctx.title_contains(CLASSIC_NAMES)
                    || (ctx.ingredient_count() <= CLASSIC_MAX_INGREDIENTS
                        && (ctx.has_exact_ingredient("mozzarella")
                            || ctx.has_exact_ingredient("pomodoro")))
            },
        },
        DetectionRule {
            archetype: "tradizionale",
            predicate: |ctx| {
                ctx.title_contains(TRADITIONAL_NAMES)
                    || ctx.any_ingredient_contains(&["prosciutto", "funghi champignon"])
            },
        },
    ]
}
