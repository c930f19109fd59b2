//! Recipe repository abstraction and its in-memory implementation.
//!
//! Matching and filtering work on plain slices, so callers take a snapshot
//! from whichever repository they hold and pass it down.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use crate::error::StoreError;
use crate::recipe::Recipe;
use crate::seed::SeedData;
use crate::user::User;

/// Storage for recipe and user records.
///
/// Implementations must be thread-safe. Unknown ids are not errors; lookups
/// return `None` and the caller decides how to present a missing record.
pub trait RecipeRepository: Send + Sync + fmt::Debug {
    /// All recipes in insertion order.
    fn list(&self) -> Vec<Recipe>;

    fn get_by_id(&self, id: &str) -> Option<Recipe>;

    /// Validate and store a new recipe. Ids must be unique.
    fn create(&self, recipe: Recipe) -> Result<Recipe, StoreError>;

    fn get_user(&self, id: &str) -> Option<User>;

    /// Recipes owned by `user_id`, in insertion order.
    fn recipes_by_user(&self, user_id: &str) -> Vec<Recipe> {
        self.list()
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }
}

/// Process-local store. Nothing written here survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
    users: HashMap<String, User>,
}

impl InMemoryRecipeStore {
    pub fn new(seed: SeedData) -> Self {
        let users = seed
            .users
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();
        Self {
            recipes: RwLock::new(seed.recipes),
            users,
        }
    }

    /// Store seeded with the built-in dataset.
    pub fn seeded() -> Self {
        Self::new(SeedData::builtin())
    }

    pub fn len(&self) -> usize {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecipeRepository for InMemoryRecipeStore {
    fn list(&self) -> Vec<Recipe> {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get_by_id(&self, id: &str) -> Option<Recipe> {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    fn create(&self, recipe: Recipe) -> Result<Recipe, StoreError> {
        recipe.validate()?;

        let mut recipes = self.recipes.write().unwrap_or_else(PoisonError::into_inner);
        if recipes.iter().any(|r| r.id == recipe.id) {
            return Err(StoreError::DuplicateId(recipe.id));
        }
        tracing::info!(recipe_id = %recipe.id, user_id = %recipe.user_id, "Created recipe");
        recipes.push(recipe.clone());
        Ok(recipe)
    }

    fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }
}
