use clap::{Parser, Subcommand};
use pizzaiolo::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These match the legacy recipe export format and are only used here.

#[derive(Deserialize)]
struct RawRecipe {
    name: String,
    #[serde(alias = "baseIngredients", default)]
    ingredients: Vec<RawIngredient>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIngredient {
    Name(String),
    Full { name: String },
}

impl RawIngredient {
    fn name(&self) -> &str {
        match self {
            RawIngredient::Name(n) => n,
            RawIngredient::Full { name } => name,
        }
    }
}

/// A constraint-guided pizza recipe generator CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a batch of recipes from a tagged pool file
    Generate {
        /// Path to the pool JSON file (ingredients + preparations)
        pool_path: String,

        /// Number of recipes to generate
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Pin every recipe to one archetype instead of drawing by weight
        #[arg(short, long)]
        archetype: Option<String>,

        /// Ingredient names to force into every recipe
        #[arg(short, long)]
        suggest: Vec<String>,

        /// Seed the RNG for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print recipes as a JSON array instead of a human summary
        #[arg(long)]
        json: bool,
    },
    /// Detect archetypes for recipes in a legacy export file
    Detect {
        /// Path to a JSON array of recipes with names and ingredient lists
        recipes_path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            pool_path,
            count,
            archetype,
            suggest,
            seed,
            json,
        } => run_generate(pool_path, count, archetype, suggest, seed, json),
        Command::Detect { recipes_path } => run_detect(recipes_path),
    }
}

fn run_generate(
    pool_path: String,
    count: usize,
    archetype: Option<String>,
    suggest: Vec<String>,
    seed: Option<u64>,
    json: bool,
) {
    let load_start = Instant::now();
    let pool = StaticPool::from_file(&pool_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load pool: {}", e)));
    let load_duration = load_start.elapsed();

    let mut builder = Generator::from_providers(&pool, &pool).with_suggested(suggest);
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    let mut generator = builder
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build generator: {}", e)));

    let generate_start = Instant::now();
    let recipes = match archetype {
        Some(id) => {
            let mut tracker = VarietyTracker::new();
            (0..count)
                .map(|_| generator.generate_for(&id, count, &mut tracker))
                .collect::<Vec<_>>()
        }
        None => generator.generate_batch(count),
    };
    let generate_duration = generate_start.elapsed();

    if json {
        let output = serde_json::to_string_pretty(&recipes)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize recipes: {}", e)));
        println!("{}", output);
    } else {
        for recipe in &recipes {
            println!("{} [{}]", recipe.name, recipe.archetype_used);
            for item in &recipe.ingredients {
                println!("  - {}", item);
            }
            for prep in &recipe.preparations {
                println!("  - {} (preparation)", prep);
            }
        }
        println!("\n--- Summary ---");
        println!("Pool Loading:  {:?}", load_duration);
        println!("Generation:    {:?} for {} recipes", generate_duration, recipes.len());
    }
}

fn run_detect(recipes_path: String) {
    let content = fs::read_to_string(&recipes_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read recipes file '{}': {}",
            &recipes_path, e
        ))
    });
    let raw_recipes: Vec<RawRecipe> = serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse recipes JSON: {}", e)));

    let detector = ArchetypeDetector::new();
    for recipe in &raw_recipes {
        let names: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        let archetype = detector.detect(&names, &recipe.name);
        println!("{} -> {}", recipe.name, archetype);
    }
    println!("\nClassified {} recipes", raw_recipes.len());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
