//! Tests for the ordered archetype detection rules.
use pizzaiolo::detect::{ArchetypeDetector, DEFAULT_DETECTED_ARCHETYPE};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_detect_is_deterministic() {
    let detector = ArchetypeDetector::new();
    let ingredients = names(&["Tonno", "Limone grattugiato", "Rucola"]);

    let first = detector.detect(&ingredients, "Pizza del pescatore");
    let second = detector.detect(&ingredients, "Pizza del pescatore");
    assert_eq!(first, second);
}

#[test]
fn test_seafood_wins_first() {
    let detector = ArchetypeDetector::new();

    assert_eq!(
        detector.detect(&names(&["Tonno", "Cipolla rossa"]), "Tonno e cipolla"),
        "mare"
    );
    // Seafood outranks spice even when both match.
    assert_eq!(
        detector.detect(
            &names(&["Gamberi rossi", "Peperoncino fresco"]),
            "Gamberi piccanti"
        ),
        "mare"
    );
    // A seafood term in the title alone is enough.
    assert_eq!(
        detector.detect(&names(&["Mozzarella"]), "Frutti di mare"),
        "mare"
    );
}

#[test]
fn test_vegan_requires_no_animal_products() {
    let detector = ArchetypeDetector::new();

    assert_eq!(
        detector.detect(
            &names(&["Melanzane grigliate", "Zucchine", "Radicchio", "Pinoli"]),
            "Ortolana"
        ),
        "vegana"
    );
    // The vegan keyword in the title is enough even for short lists.
    assert_eq!(
        detector.detect(&names(&["Verdura mista"]), "La Vegana"),
        "vegana"
    );
    // "Fior di latte" carries an animal keyword and blocks the rule.
    assert_ne!(
        detector.detect(
            &names(&["Fior di latte", "Zucchine", "Radicchio", "Pinoli"]),
            "Ortolana"
        ),
        "vegana"
    );
}

#[test]
fn test_spicy_and_earthy_and_fresh() {
    let detector = ArchetypeDetector::new();

    assert_eq!(
        detector.detect(
            &names(&["Nduja calabrese", "Fior di latte"]),
            "La calabrese"
        ),
        "piccante_decisa"
    );
    assert_eq!(
        detector.detect(
            &names(&["Funghi porcini", "Fior di latte"]),
            "Bosco d'autunno"
        ),
        "terra_bosco"
    );
    assert_eq!(
        detector.detect(
            &names(&["Rucola", "Fior di latte", "Prosciutto cotto", "Olive", "Capperi"]),
            "Estate"
        ),
        "fresca_estiva"
    );
}

#[test]
fn test_classic_by_title_and_by_simplicity() {
    let detector = ArchetypeDetector::new();

    assert_eq!(
        detector.detect(&names(&["Pomodoro", "Mozzarella", "Basilico"]), "Margherita"),
        "classica"
    );
    // Few ingredients with an exact mozzarella/pomodoro entry reads classic.
    assert_eq!(
        detector.detect(&names(&["Pomodoro", "Origano", "Aglio"]), "La rossa"),
        "classica"
    );
}

#[test]
fn test_traditional_and_default() {
    let detector = ArchetypeDetector::new();

    assert_eq!(
        detector.detect(
            &names(&["Prosciutto cotto", "Mozzarella", "Carciofi", "Olive", "Uovo"]),
            "Capricciosa"
        ),
        "tradizionale"
    );
    // Nothing matches (the egg blocks the vegan rule): the default applies.
    assert_eq!(
        detector.detect(&names(&["Taleggio", "Pere", "Noci", "Uovo"]), "Inverno"),
        DEFAULT_DETECTED_ARCHETYPE
    );
}

#[test]
fn test_rule_table_order_is_visible() {
    let detector = ArchetypeDetector::new();
    let order: Vec<&str> = detector.rules().iter().map(|r| r.archetype).collect();

    assert_eq!(
        order,
        vec![
            "mare",
            "vegana",
            "piccante_decisa",
            "terra_bosco",
            "fresca_estiva",
            "classica",
            "tradizionale"
        ]
    );
}

#[test]
fn test_empty_input_resolves_to_default() {
    let detector = ArchetypeDetector::new();
    assert_eq!(detector.detect(&[], ""), DEFAULT_DETECTED_ARCHETYPE);
}
