//! Recipe search and filtering.
//!
//! Two flavors:
//! - [`filter_recipes`]: free-text query plus cuisine, difficulty and
//!   cook-time filters, all of which must hold.
//! - [`quick_search`]: title/tag lookup used on the home list.
//!
//! Both keep input order; nothing is ranked.

use serde::{Deserialize, Serialize};

use crate::recipe::{Difficulty, Recipe};

/// Upper bound of the cook-time filter, in minutes.
pub const MAX_COOK_TIME: u32 = 120;

/// Wildcard accepted wherever a cuisine or difficulty is selected.
pub const ALL: &str = "All";

/// Cuisines offered as filter choices. Recipes may carry any other label.
pub const CUISINES: &[&str] = &["Asian", "American", "Indian", "Italian", "Mexican"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Matched case-insensitively against title, tags and ingredient lines.
    pub query: String,
    /// `None` means any cuisine.
    pub cuisine: Option<String>,
    /// `None` means any difficulty.
    pub difficulty: Option<Difficulty>,
    /// Inclusive, in minutes. Callers clamp to `0..=MAX_COOK_TIME`.
    pub max_time: u32,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            cuisine: None,
            difficulty: None,
            max_time: MAX_COOK_TIME,
        }
    }
}

impl SearchFilter {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Interpret a cuisine selection; "All" (any case) or blank clears it.
    pub fn parse_cuisine(selection: &str) -> Option<String> {
        let selection = selection.trim();
        if selection.is_empty() || selection.eq_ignore_ascii_case(ALL) {
            None
        } else {
            Some(selection.to_string())
        }
    }

    /// Interpret a difficulty selection. "All" and unknown values clear it.
    pub fn parse_difficulty(selection: &str) -> Option<Difficulty> {
        Difficulty::from_str(selection)
    }

    /// Reset every filter, including the query.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let query = self.query.to_lowercase();
        matches_query(recipe, &query)
            && self.cuisine.as_ref().map_or(true, |c| *c == recipe.cuisine)
            && self.difficulty.map_or(true, |d| d == recipe.difficulty)
            && recipe.cook_time <= self.max_time
    }
}

/// Parse a max-time text field the way a numeric input would: leading
/// digits (with an optional sign) are read, anything unparsable is 0, and
/// the result is clamped to `0..=MAX_COOK_TIME`.
pub fn clamp_max_time(raw: &str) -> u32 {
    let value = leading_integer(raw).unwrap_or(0);
    value.clamp(0, i64::from(MAX_COOK_TIME)) as u32
}

/// Integer prefix of `raw` after leading whitespace, if any.
pub(crate) fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate instead of failing on absurdly long input
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}

fn matches_query(recipe: &Recipe, query: &str) -> bool {
    query.is_empty()
        || recipe.title.to_lowercase().contains(query)
        || recipe.tags.iter().any(|t| t.to_lowercase().contains(query))
        || recipe
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(query))
}

/// Recipes passing every filter, in input order.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &SearchFilter) -> Vec<&'a Recipe> {
    let results: Vec<&Recipe> = recipes.iter().filter(|r| filter.matches(r)).collect();
    tracing::debug!(
        "Search {:?} kept {} of {} recipes",
        filter.query,
        results.len(),
        recipes.len()
    );
    results
}

/// Title and tag lookup. An empty query returns everything.
pub fn quick_search<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| {
            query.is_empty()
                || r.title.to_lowercase().contains(&query)
                || r.tags.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .collect()
}
