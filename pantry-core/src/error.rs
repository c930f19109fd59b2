use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Recipe needs at least one {0}")]
    EmptyList(&'static str),

    #[error("Blank {field} at position {index}")]
    BlankEntry { field: &'static str, index: usize },

    #[error("Cook time cannot be negative: {0}")]
    NegativeCookTime(i64),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Recipe with id {0} already exists")]
    DuplicateId(String),

    #[error("Invalid recipe: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid seed recipe {id}: {source}")]
    InvalidRecipe {
        id: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication failed: {0}")]
    Failed(String),

    #[error("No authenticated user")]
    NotAuthenticated,
}
