//! Add-recipe form input and its conversion into a [`Recipe`].

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::recipe::{Difficulty, NewRecipe, Privacy, Recipe};
use crate::search::leading_integer;

/// Image used when the author did not pick one.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200/95E1D3/white?text=No+Image";

/// Cuisine used when the field is left blank.
pub const DEFAULT_CUISINE: &str = "General";

/// Raw add-recipe input. Every text field is kept as typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Free text from a numeric field
    pub cook_time: String,
    pub difficulty: Difficulty,
    pub cuisine: String,
    /// Comma separated
    pub tags: String,
    pub image: String,
    pub privacy: Privacy,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            ingredients: vec![String::new()],
            steps: vec![String::new()],
            cook_time: String::new(),
            difficulty: Difficulty::Easy,
            cuisine: String::new(),
            tags: String::new(),
            image: String::new(),
            privacy: Privacy::Private,
        }
    }
}

impl RecipeDraft {
    /// Validate the draft and build a recipe owned by `user_id`.
    ///
    /// Title, every ingredient row and every step row are required. Cook time
    /// reads the leading integer of the field and falls back to 0.
    pub fn into_recipe(self, id: String, user_id: String) -> Result<Recipe, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        let ingredients = required_rows("ingredient", self.ingredients)?;
        let steps = required_rows("step", self.steps)?;

        let cook_time = match leading_integer(&self.cook_time).unwrap_or(0) {
            n if n < 0 => return Err(ValidationError::NegativeCookTime(n)),
            n => u32::try_from(n).unwrap_or(u32::MAX),
        };

        let cuisine = if self.cuisine.trim().is_empty() {
            DEFAULT_CUISINE.to_string()
        } else {
            self.cuisine
        };
        let image = if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            self.image
        };

        let recipe = Recipe::new(NewRecipe {
            id,
            title: self.title,
            image,
            ingredients,
            steps,
            cook_time,
            difficulty: self.difficulty,
            cuisine,
            tags: split_tags(&self.tags),
            privacy: self.privacy,
            user_id,
        })?;
        Ok(recipe.with_created_at(Utc::now()))
    }
}

fn required_rows(field: &'static str, rows: Vec<String>) -> Result<Vec<String>, ValidationError> {
    if rows.is_empty() {
        return Err(ValidationError::EmptyList(field));
    }
    if let Some(index) = rows.iter().position(|r| r.trim().is_empty()) {
        return Err(ValidationError::BlankEntry { field, index });
    }
    Ok(rows)
}

/// "vegetarian, quick,,healthy " -> ["vegetarian", "quick", "healthy"]
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
