//! Common test utilities for building tagged pools and inspecting recipes.
use pizzaiolo::prelude::*;

#[allow(dead_code)]
pub fn tags(labels: &[&str]) -> Vec<Tag> {
    labels.iter().map(|t| t.to_string()).collect()
}

#[allow(dead_code)]
pub fn item(name: &str, labels: &[&str]) -> Item {
    Item::new(name, tags(labels))
}

/// The seafood scenario pool: two seafood options, one citrus, one leafy.
#[allow(dead_code)]
pub fn mare_pool() -> Vec<Item> {
    vec![
        item("Tonno", &["seafood_fish"]),
        item("Gamberi rossi", &["seafood_crustaceans"]),
        item("Limone", &["herb_citrus"]),
        item("Rucola", &["vegetable_leafy"]),
    ]
}

/// A pool with full coverage of the `classica` archetype and eight uniquely
/// tagged cheeses, wide enough for the variety-bound tests.
#[allow(dead_code)]
pub fn classica_pool() -> Vec<Item> {
    vec![
        item("Pomodoro San Marzano", &["base_tomato"]),
        item("Passata di pomodoro", &["base_tomato"]),
        item("Fior di latte", &["cheese_fresh"]),
        item("Mozzarella di bufala", &["cheese_fresh"]),
        item("Burrata", &["cheese_fresh"]),
        item("Stracciatella", &["cheese_fresh"]),
        item("Ricotta fresca", &["cheese_fresh"]),
        item("Squacquerone", &["cheese_fresh"]),
        item("Crescenza", &["cheese_fresh"]),
        item("Robiola", &["cheese_fresh"]),
        item("Basilico fresco", &["herb_fresh_delicate"]),
        item("Origano", &["spice_dried"]),
    ]
}

/// A broad pool covering most archetypes, for mixed-archetype batches.
#[allow(dead_code)]
pub fn mixed_pool() -> Vec<Item> {
    let mut pool = classica_pool();
    pool.extend(vec![
        item("Prosciutto cotto", &["meat_mild_salumi"]),
        item("Prosciutto crudo di Parma", &["meat_cured_delicate"]),
        item("Salsiccia fresca", &["meat_cooked"]),
        item("Guanciale croccante", &["meat_fatty"]),
        item("Nduja calabrese", &["meat_spicy"]),
        item("Peperoncino fresco", &["spice_hot"]),
        item("Funghi porcini", &["vegetable_mushrooms"]),
        item("Tartufo nero", &["premium_truffle"]),
        item("Parmigiano Reggiano", &["cheese_aged"]),
        item("Taleggio", &["cheese_soft"]),
        item("Provola affumicata", &["cheese_smoked"]),
        item("Gorgonzola DOP", &["cheese_blue"]),
        item("Rosmarino", &["herb_fresh_aromatic"]),
        item("Rucola", &["vegetable_leafy"]),
        item("Radicchio", &["vegetable_bitter"]),
        item("Pomodorini ciliegino", &["vegetable_tomato_fresh"]),
        item("Melanzane grigliate", &["vegetable_grilled"]),
        item("Cipolla rossa", &["vegetable_onions"]),
        item("Limone grattugiato", &["herb_citrus"]),
        item("Aceto balsamico", &["finish_tangy"]),
        item("Olive taggiasche", &["finish_savory"]),
        item("Miele di acacia", &["finish_sweet"]),
        item("Pere", &["fruit_sweet"]),
        item("Noci", &["nut_creamy"]),
        item("Pinoli", &["nut_crunchy"]),
        item("Tonno", &["seafood_fish"]),
        item("Alici di Cetara", &["seafood_preserved"]),
    ]);
    pool
}

/// A small preparation pool with the four ordered tag layers.
#[allow(dead_code)]
pub fn sample_preparations() -> Vec<Item> {
    vec![
        Item::preparation(
            "Funghi trifolati",
            "vegetable_mushrooms",
            "prep_sauteed",
            "pizza_topping",
            "flavor_umami",
        ),
        Item::preparation(
            "Cipolla caramellata",
            "vegetable_onions",
            "prep_caramelized",
            "pizza_topping",
            "flavor_sweet",
        ),
        Item::preparation(
            "Crema di patate",
            "vegetable_root",
            "prep_creamed",
            "pizza_base",
            "flavor_delicate",
        ),
    ]
}

/// Asserts the intra-recipe invariant: all component names pairwise distinct,
/// case-insensitively.
#[allow(dead_code)]
pub fn assert_no_duplicate_components(recipe: &GeneratedRecipe) {
    let mut seen = std::collections::HashSet::new();
    for name in recipe.component_names() {
        assert!(
            seen.insert(name.to_lowercase()),
            "recipe '{}' contains '{}' more than once",
            recipe.name,
            name
        );
    }
}
