use thiserror::Error;

/// Errors that can occur when setting up or running the generator.
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error(
        "Both the ingredient and the preparation pool are empty; seed pool data before generating"
    )]
    EmptyPools,
}

/// Errors that can occur while loading a pool from an external source.
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Failed to read pool file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse pool JSON: {0}")]
    Parse(String),
}

/// Errors surfaced by `RecipeStore` implementations at the persistence boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store error: {0}")]
    Generic(String),
}
