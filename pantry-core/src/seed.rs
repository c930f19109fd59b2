//! Seed dataset for the in-memory store.
//!
//! The built-in data is loaded from `data/seed.json` at compile time. A
//! replacement file with the same shape can be loaded from disk.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::SeedError;
use crate::recipe::Recipe;
use crate::user::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub users: Vec<User>,
}

static BUILTIN: LazyLock<SeedData> = LazyLock::new(|| {
    let json = include_str!("../data/seed.json");
    SeedData::from_json(json).expect("Failed to parse built-in seed.json")
});

impl SeedData {
    /// The dataset shipped with the crate.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parse and validate a seed document.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let data: SeedData = serde_json::from_str(json)?;
        for recipe in &data.recipes {
            recipe
                .validate()
                .map_err(|source| SeedError::InvalidRecipe {
                    id: recipe.id.clone(),
                    source,
                })?;
        }
        Ok(data)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} recipes and {} users from {}",
            data.recipes.len(),
            data.users.len(),
            path.display()
        );
        Ok(data)
    }
}
