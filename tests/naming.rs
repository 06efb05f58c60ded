//! Tests for short-form reduction, the template registry and name synthesis.
use ahash::AHashSet;
use pizzaiolo::naming::{NameSynthesizer, NameTemplate, TemplateRegistry};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_short_form_strips_noise_qualifiers() {
    assert_eq!(NameSynthesizer::short_form("Gorgonzola DOP"), "Gorgonzola");
    assert_eq!(
        NameSynthesizer::short_form("Mozzarella di bufala"),
        "Mozzarella"
    );
    assert_eq!(
        NameSynthesizer::short_form("Prosciutto crudo di Parma"),
        "Prosciutto"
    );
    assert_eq!(NameSynthesizer::short_form("Ricotta fresca"), "Ricotta");
}

#[test]
fn test_short_form_keeps_compound_names() {
    assert_eq!(NameSynthesizer::short_form("Fior di latte"), "Fior di latte");
    assert_eq!(
        NameSynthesizer::short_form("Crema di pistacchio"),
        "Crema di pistacchio"
    );
    // Compounds longer than three tokens are trimmed to three.
    assert_eq!(
        NameSynthesizer::short_form("Crema di zucca al rosmarino"),
        "Crema di zucca"
    );
}

#[test]
fn test_short_form_plain_names_keep_first_token() {
    assert_eq!(NameSynthesizer::short_form("Funghi porcini"), "Funghi");
    assert_eq!(NameSynthesizer::short_form("Rucola"), "Rucola");
}

#[test]
fn test_registry_arity_coverage() {
    let registry = TemplateRegistry::standard();
    assert!(registry.of_arity(1).count() >= 10);
    assert!(registry.of_arity(2).count() >= 10);
    assert!(registry.of_arity(3).count() >= 3);
    assert_eq!(
        registry.up_to_arity(3).count(),
        registry.len(),
        "every template must be reachable with three slots"
    );
}

#[test]
fn test_template_render() {
    let template = NameTemplate {
        arity: 2,
        pattern: "Pizza {a} e {b}",
    };
    assert_eq!(template.render(&["Tonno", "Rucola"]), "Pizza Tonno e Rucola");
}

#[test]
fn test_synthesize_uses_leading_names() {
    let synthesizer = NameSynthesizer::new();
    let mut rng = StdRng::seed_from_u64(8);
    let existing = AHashSet::new();

    let name = synthesizer.synthesize(
        &["Tonno".to_string(), "Rucola".to_string()],
        &existing,
        &mut rng,
    );
    assert!(
        name.contains("Tonno") || name.contains("Rucola"),
        "name '{}' should mention a leading ingredient",
        name
    );
}

#[test]
fn test_synthesize_never_repeats() {
    let synthesizer = NameSynthesizer::new();
    let mut rng = StdRng::seed_from_u64(21);
    let mut existing: AHashSet<String> = AHashSet::new();
    let leading = vec!["Tonno".to_string(), "Rucola".to_string()];

    // Far more rounds than the template bank holds, forcing the suffix and
    // numeric fallbacks to kick in.
    for _ in 0..500 {
        let name = synthesizer.synthesize(&leading, &existing, &mut rng);
        assert!(
            existing.insert(name.clone()),
            "synthesize returned '{}' twice",
            name
        );
    }
}

#[test]
fn test_synthesize_empty_leading_falls_back() {
    let synthesizer = NameSynthesizer::new();
    let mut rng = StdRng::seed_from_u64(4);
    let existing = AHashSet::new();

    let name = synthesizer.synthesize(&[], &existing, &mut rng);
    assert!(!name.is_empty());
}

#[test]
fn test_suffix_fallback_before_numbers() {
    // A one-template registry exhausts immediately; the suffix retry must
    // produce the next names without a numeric disambiguator.
    let registry = TemplateRegistry::new(vec![NameTemplate {
        arity: 1,
        pattern: "La {a}",
    }]);
    let synthesizer = NameSynthesizer::with_registry(registry);
    let mut rng = StdRng::seed_from_u64(15);
    let mut existing: AHashSet<String> = AHashSet::new();
    let leading = vec!["Rucola".to_string()];

    let first = synthesizer.synthesize(&leading, &existing, &mut rng);
    assert_eq!(first, "La Rucola");
    existing.insert(first);

    let second = synthesizer.synthesize(&leading, &existing, &mut rng);
    assert!(second.starts_with("La Rucola "));
    assert!(!second.contains('#'));
}

#[test]
fn test_numeric_fallback_terminates() {
    let registry = TemplateRegistry::new(vec![NameTemplate {
        arity: 1,
        pattern: "La {a}",
    }]);
    let synthesizer = NameSynthesizer::with_registry(registry);
    let mut rng = StdRng::seed_from_u64(64);
    let mut existing: AHashSet<String> = AHashSet::new();
    let leading = vec!["Rucola".to_string()];

    // 1 plain template + 8 suffix variants, then numbers only.
    for _ in 0..50 {
        let name = synthesizer.synthesize(&leading, &existing, &mut rng);
        assert!(existing.insert(name));
    }
    assert!(existing.iter().any(|n| n.contains('#')));
}
