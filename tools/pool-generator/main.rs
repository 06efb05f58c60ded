use clap::Parser;
use pizzaiolo::model::Item;
use pizzaiolo::pool::StaticPool;
use std::fs;

/// A CLI tool to generate a sample tagged pool for the pizzaiolo generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_pool.json")]
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let pool = StaticPool::new(sample_ingredients(), sample_preparations());

    let json_output = serde_json::to_string_pretty(&pool)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Generated pool with {} ingredients and {} preparations at '{}'",
        pool.ingredients.len(),
        pool.preparations.len(),
        cli.output
    );

    Ok(())
}

fn tagged(name: &str, tags: &[&str]) -> Item {
    Item::new(name, tags.iter().map(|t| t.to_string()).collect())
}

/// A representative slice of the production ingredient pool.
fn sample_ingredients() -> Vec<Item> {
    vec![
        // Bases
        tagged("Pomodoro San Marzano", &["base_tomato"]),
        tagged("Passata di pomodoro", &["base_tomato"]),
        tagged("Pomodorini datterini", &["base_tomato", "vegetable_tomato_fresh"]),
        tagged("Pesto di basilico", &["base_pesto"]),
        tagged("Crema di zucca", &["base_cream_vegetable"]),
        tagged("Olio EVO aromatizzato", &["base_oil"]),
        // Cheeses
        tagged("Mozzarella di bufala", &["cheese_fresh"]),
        tagged("Fior di latte", &["cheese_fresh"]),
        tagged("Burrata", &["cheese_fresh"]),
        tagged("Stracciatella", &["cheese_fresh"]),
        tagged("Ricotta fresca", &["cheese_fresh"]),
        tagged("Parmigiano Reggiano", &["cheese_aged"]),
        tagged("Pecorino Romano", &["cheese_aged"]),
        tagged("Gorgonzola DOP", &["cheese_blue"]),
        tagged("Taleggio", &["cheese_soft"]),
        tagged("Provola affumicata", &["cheese_smoked"]),
        tagged("Scamorza", &["cheese_smoked"]),
        // Meats
        tagged("Prosciutto crudo di Parma", &["meat_cured_delicate"]),
        tagged("Bresaola", &["meat_cured_delicate"]),
        tagged("Speck Alto Adige", &["meat_cured_intense"]),
        tagged("Nduja calabrese", &["meat_spicy"]),
        tagged("Salame piccante", &["meat_spicy"]),
        tagged("Salsiccia fresca", &["meat_cooked"]),
        tagged("Guanciale croccante", &["meat_fatty"]),
        tagged("Prosciutto cotto", &["meat_mild_salumi"]),
        tagged("Mortadella", &["meat_mild_salumi"]),
        // Vegetables
        tagged("Funghi porcini", &["vegetable_mushrooms"]),
        tagged("Funghi champignon", &["vegetable_mushrooms"]),
        tagged("Rucola", &["vegetable_leafy"]),
        tagged("Spinaci", &["vegetable_leafy"]),
        tagged("Melanzane grigliate", &["vegetable_grilled"]),
        tagged("Zucchine", &["vegetable_grilled"]),
        tagged("Peperoni", &["vegetable_grilled"]),
        tagged("Radicchio", &["vegetable_bitter"]),
        tagged("Pomodorini ciliegino", &["vegetable_tomato_fresh"]),
        tagged("Cipolla rossa", &["vegetable_onions"]),
        tagged("Friarielli", &["vegetable_cruciferous"]),
        // Seafood
        tagged("Tonno", &["seafood_fish"]),
        tagged("Gamberi rossi", &["seafood_crustaceans"]),
        tagged("Alici di Cetara", &["seafood_preserved"]),
        tagged("Salmone affumicato", &["seafood_preserved"]),
        // Herbs, finishes, premium
        tagged("Basilico fresco", &["herb_fresh_delicate"]),
        tagged("Rosmarino", &["herb_fresh_aromatic"]),
        tagged("Origano", &["spice_dried"]),
        tagged("Peperoncino fresco", &["spice_hot"]),
        tagged("Limone grattugiato", &["herb_citrus"]),
        tagged("Miele di acacia", &["finish_sweet"]),
        tagged("Aceto balsamico", &["finish_tangy"]),
        tagged("Olive taggiasche", &["finish_savory"]),
        tagged("Noci", &["nut_creamy"]),
        tagged("Pistacchi", &["nut_creamy"]),
        tagged("Pinoli", &["nut_crunchy"]),
        tagged("Pere", &["fruit_sweet"]),
        tagged("Fichi", &["fruit_sweet"]),
        tagged("Tartufo nero", &["premium_truffle"]),
    ]
}

/// Preparations carry their four ordered tag layers: base category,
/// elaboration method, pizza role, flavor character.
fn sample_preparations() -> Vec<Item> {
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
            "Pomodorini confit",
            "vegetable_tomato_fresh",
            "prep_confit",
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
        Item::preparation(
            "Crema di burrata",
            "base_cream_cheese",
            "prep_creamed",
            "pizza_base",
            "flavor_delicate",
        ),
        Item::preparation(
            "Peperoni arrosto",
            "vegetable_grilled",
            "prep_grilled",
            "pizza_topping",
            "flavor_sweet",
        ),
        Item::preparation(
            "Salsa nduja",
            "meat_spicy",
            "prep_sauce",
            "pizza_drizzle",
            "flavor_spicy",
        ),
        Item::preparation(
            "Riduzione di balsamico",
            "finish_tangy",
            "prep_sauce",
            "pizza_drizzle",
            "flavor_fresh",
        ),
        Item::preparation(
            "Pesto di rucola",
            "base_pesto",
            "prep_pesto",
            "pizza_drizzle",
            "flavor_fresh",
        ),
        Item::preparation(
            "Cavolo nero stufato",
            "vegetable_leafy",
            "prep_sauteed",
            "pizza_topping",
            "flavor_umami",
        ),
    ]
}
