use ahash::AHashSet;
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;

mod templates;

pub use templates::{NameTemplate, TemplateRegistry};
use templates::CREATIVE_SUFFIXES;

/// Qualifiers stripped from an ingredient name before it becomes a name slot:
/// origin markers, freshness adjectives, certification labels.
const NOISE_QUALIFIERS: &[&str] = &[
    "Fresco",
    "Fresca",
    "San Marzano",
    "di Cetara",
    "di bufala",
    "del Cilento",
    "DOP",
    "IGP",
    "Bio",
    "Biologico",
    "Selezionato",
    "di Parma",
    "di Norcia",
    "Affumicato",
    "Affumicata",
    "Naturale",
];

/// Connectives that mark a compound name worth keeping (mostly) whole.
const CONNECTIVES: &[&str] = &[" di ", " al ", " alla ", " alle ", " con ", " e "];

/// Stand-in lead when a recipe somehow has no components at all.
const PLACEHOLDER_LEAD: &str = "Speciale";

/// How many short-form tokens a compound name keeps.
const MAX_COMPOUND_TOKENS: usize = 3;

/// Highest template arity the registry serves.
const MAX_SLOTS: usize = 3;

/// How many top candidates get the creative-suffix retry.
const SUFFIX_RETRY_CANDIDATES: usize = 3;

/// Builds a unique, human-readable recipe name from the leading components
/// of an assembled recipe.
///
/// Synthesis never fails: when the template bank and the suffix retries are
/// both exhausted, a numeric disambiguator is incremented until the name is
/// unique against `existing`.
#[derive(Debug, Clone, Default)]
pub struct NameSynthesizer {
    registry: TemplateRegistry,
}

impl NameSynthesizer {
    pub fn new() -> Self {
        Self {
            registry: TemplateRegistry::standard(),
        }
    }

    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Reduces a full ingredient name to its short form: noise qualifiers are
    /// stripped; compound names (containing a connective) keep at most the
    /// first three tokens, plain names keep only the first.
    pub fn short_form(name: &str) -> String {
        let mut stripped = name.trim().to_string();
        for qualifier in NOISE_QUALIFIERS {
            stripped = strip_qualifier(&stripped, qualifier);
        }

        let lower = stripped.to_lowercase();
        if CONNECTIVES.iter().any(|c| lower.contains(c)) {
            let words: Vec<&str> = stripped.split_whitespace().collect();
            if words.len() > MAX_COMPOUND_TOKENS {
                return words[..MAX_COMPOUND_TOKENS].join(" ");
            }
            return stripped;
        }

        stripped
            .split_whitespace()
            .next()
            .unwrap_or(PLACEHOLDER_LEAD)
            .to_string()
    }

    /// Synthesizes a name from up to three leading component names, unique
    /// against `existing`.
    pub fn synthesize(
        &self,
        leading: &[String],
        existing: &AHashSet<String>,
        rng: &mut impl Rng,
    ) -> String {
        let shorts: Vec<String> = leading
            .iter()
            .take(MAX_SLOTS)
            .map(|n| Self::short_form(n))
            .filter(|s| !s.is_empty())
            .collect();
        let slots: Vec<&str> = if shorts.is_empty() {
            vec![PLACEHOLDER_LEAD]
        } else {
            shorts.iter().map(String::as_str).collect()
        };

        let mut candidates: Vec<String> = self
            .registry
            .up_to_arity(slots.len())
            .map(|t| normalize(&t.render(&slots)))
            .collect();
        candidates.shuffle(rng);

        for candidate in &candidates {
            if !existing.contains(candidate) {
                return candidate.clone();
            }
        }

        // Every plain template is taken: retry the best candidates with a
        // creative suffix before resorting to numbers.
        let mut suffixes: Vec<&str> = CREATIVE_SUFFIXES.to_vec();
        suffixes.shuffle(rng);
        for base in candidates.iter().take(SUFFIX_RETRY_CANDIDATES) {
            for suffix in &suffixes {
                let candidate = normalize(&format!("{base} {suffix}"));
                if !existing.contains(&candidate) {
                    return candidate;
                }
            }
        }

        let base = candidates
            .first()
            .cloned()
            .unwrap_or_else(|| slots[0].to_string());
        let mut counter: u32 = rng.random_range(0..1000);
        loop {
            let candidate = format!("{base} #{counter}");
            if !existing.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Collapses runs of whitespace left behind by empty slots.
fn normalize(name: &str) -> String {
    name.split_whitespace().join(" ")
}

/// Removes every space-prefixed, case-insensitive occurrence of `qualifier`.
fn strip_qualifier(name: &str, qualifier: &str) -> String {
    let needle = format!(" {}", qualifier.to_ascii_lowercase());
    let mut out = name.to_string();
    while let Some(pos) = out.to_ascii_lowercase().find(&needle) {
        out.replace_range(pos..pos + needle.len(), "");
    }
    out
}
