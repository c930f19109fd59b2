//! Recipe records and their construction rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// How hard a recipe is to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: &'static [Difficulty] = &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who may see a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    #[default]
    Private,
}

impl Privacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Private => "private",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "public" => Some(Privacy::Public),
            "private" => Some(Privacy::Private),
            _ => None,
        }
    }
}

/// One dish.
///
/// Ingredient and step lines are free text. A line such as "2 cloves garlic"
/// is never split into quantity, unit and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Minutes
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub privacy: Privacy,
    pub user_id: String,
    /// Only set for recipes created during the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields needed to build a [`Recipe`].
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub tags: Vec<String>,
    pub privacy: Privacy,
    pub user_id: String,
}

impl Recipe {
    /// Build a recipe, rejecting records with no id, no title, or no
    /// ingredients/steps.
    pub fn new(fields: NewRecipe) -> Result<Self, ValidationError> {
        let recipe = Self {
            id: fields.id,
            title: fields.title,
            image: fields.image,
            ingredients: fields.ingredients,
            steps: fields.steps,
            cook_time: fields.cook_time,
            difficulty: fields.difficulty,
            cuisine: fields.cuisine,
            tags: fields.tags,
            privacy: fields.privacy,
            user_id: fields.user_id,
            created_at: None,
        };
        recipe.validate()?;
        Ok(recipe)
    }

    /// Check the record invariants. Deserialized records bypass [`Recipe::new`],
    /// so loaders call this directly.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        check_lines("ingredient", &self.ingredients)?;
        check_lines("step", &self.steps)?;
        Ok(())
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}

fn check_lines(field: &'static str, lines: &[String]) -> Result<(), ValidationError> {
    if lines.is_empty() {
        return Err(ValidationError::EmptyList(field));
    }
    if let Some(index) = lines.iter().position(|l| l.trim().is_empty()) {
        return Err(ValidationError::BlankEntry { field, index });
    }
    Ok(())
}
