//! "What can I cook?" ingredient matching.
//!
//! Scores recipes by how many of the user's on-hand ingredients appear in
//! their ingredient lists. Matching is case-insensitive substring
//! containment, so "tomato" matches "2 tomatoes" and "garlic" matches
//! "2 cloves garlic". Short queries like "a" match almost everything; that
//! is accepted behavior.

use serde::Serialize;

use crate::recipe::Recipe;

/// Notice shown when there is nothing to search for.
pub const NOTHING_TO_SEARCH: &str = "Please enter some ingredients you have available";

/// A recipe annotated with its match score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch<'a> {
    #[serde(flatten)]
    pub recipe: &'a Recipe,
    /// Distinct user ingredients found in this recipe
    pub match_count: usize,
    /// round(match_count / total_user_ingredients * 100)
    pub match_percentage: u8,
    pub total_user_ingredients: usize,
}

impl RecipeMatch<'_> {
    pub fn tier(&self) -> MatchTier {
        MatchTier::for_percentage(self.match_percentage)
    }
}

/// Result of a matching run.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'a> {
    /// Every supplied entry was blank.
    NothingToSearch,
    /// Recipes with a non-zero score, best first. May be empty.
    Ranked(Vec<RecipeMatch<'a>>),
}

impl<'a> MatchOutcome<'a> {
    /// The ranked matches; empty when there was nothing to search.
    pub fn into_matches(self) -> Vec<RecipeMatch<'a>> {
        match self {
            MatchOutcome::NothingToSearch => Vec::new(),
            MatchOutcome::Ranked(matches) => matches,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            MatchOutcome::NothingToSearch => Some(NOTHING_TO_SEARCH),
            MatchOutcome::Ranked(_) => None,
        }
    }
}

/// Display band for a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Perfect,
    Strong,
    Fair,
    Weak,
}

impl MatchTier {
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            100..=u8::MAX => MatchTier::Perfect,
            70..=99 => MatchTier::Strong,
            50..=69 => MatchTier::Fair,
            _ => MatchTier::Weak,
        }
    }
}

/// Lower-case the non-blank entries. Entries are not trimmed: a stray
/// trailing space is part of the substring being searched for.
pub fn normalize_available<S: AsRef<str>>(available: &[S]) -> Vec<String> {
    available
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Rank `recipes` against the ingredients the user has on hand.
///
/// The percentage denominator is the number of user entries, not the
/// recipe's ingredient count, so a one-item pantry can score 100% against a
/// ten-ingredient recipe. Ties keep their input order.
pub fn match_recipes<'a, S: AsRef<str>>(recipes: &'a [Recipe], available: &[S]) -> MatchOutcome<'a> {
    let wanted = normalize_available(available);
    if wanted.is_empty() {
        tracing::debug!("No ingredients supplied, skipping match");
        return MatchOutcome::NothingToSearch;
    }

    let mut matches: Vec<RecipeMatch<'a>> = recipes
        .iter()
        .map(|recipe| score_recipe(recipe, &wanted))
        .filter(|m| m.match_percentage > 0)
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    tracing::debug!(
        "Matched {} of {} recipes against {} ingredients",
        matches.len(),
        recipes.len(),
        wanted.len()
    );
    MatchOutcome::Ranked(matches)
}

/// `wanted` must be non-empty and already lower-cased.
fn score_recipe<'a>(recipe: &'a Recipe, wanted: &[String]) -> RecipeMatch<'a> {
    let lines: Vec<String> = recipe.ingredients.iter().map(|l| l.to_lowercase()).collect();

    let match_count = wanted
        .iter()
        .filter(|w| lines.iter().any(|line| line.contains(w.as_str())))
        .count();

    RecipeMatch {
        recipe,
        match_count,
        match_percentage: percentage(match_count, wanted.len()),
        total_user_ingredients: wanted.len(),
    }
}

/// Integer round-half-up of `count / total * 100`.
fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (200 * count + total) / (2 * total);
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;

    fn recipes() -> Vec<Recipe> {
        SeedData::builtin().recipes
    }

    #[test]
    fn test_full_match() {
        let recipes = recipes();
        let matches = match_recipes(&recipes, &["vegetable", "garlic", "soy sauce"]).into_matches();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].recipe.id, "1");
        assert_eq!(matches[0].match_count, 3);
        assert_eq!(matches[0].match_percentage, 100);
        assert_eq!(matches[0].tier(), MatchTier::Perfect);
    }

    #[test]
    fn test_no_overlap_excludes_recipe() {
        let recipes = recipes();
        let matches = match_recipes(&recipes[..1], &["chicken", "onion", "flour"]).into_matches();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_blank_input() {
        let recipes = recipes();
        let empty: [&str; 0] = [];
        assert_eq!(match_recipes(&recipes, &empty), MatchOutcome::NothingToSearch);

        let outcome = match_recipes(&recipes, &["", "   ", "\t"]);
        assert_eq!(outcome, MatchOutcome::NothingToSearch);
        assert_eq!(outcome.notice(), Some(NOTHING_TO_SEARCH));
        assert!(outcome.into_matches().is_empty());
    }

    #[test]
    fn test_blank_entries_do_not_count() {
        let recipes = recipes();
        let matches = match_recipes(&recipes, &["garlic", "", "  "]).into_matches();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].total_user_ingredients, 1);
        assert_eq!(matches[0].match_percentage, 100);
    }

    #[test]
    fn test_case_insensitive_and_substring() {
        let recipes = recipes();
        let matches = match_recipes(&recipes, &["TOMATO"]).into_matches();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].recipe.id, "3");
    }

    #[test]
    fn test_entry_counts_once_across_lines() {
        let recipes = recipes();
        // "cup" is on two pancake lines
        let matches = match_recipes(&recipes, &["milk", "cup"]).into_matches();
        let pancakes = matches.iter().find(|m| m.recipe.id == "2").unwrap();
        assert_eq!(pancakes.match_count, 2);
        assert_eq!(pancakes.match_percentage, 100);
    }

    #[test]
    fn test_ranking_is_stable() {
        let recipes = recipes();
        // "oil": stir fry and curry at 50%; "egg": pancakes at 50%.
        let matches = match_recipes(&recipes, &["oil", "egg"]).into_matches();
        let ids: Vec<&str> = matches.iter().map(|m| m.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(matches.iter().all(|m| m.match_percentage == 50));
    }

    #[test]
    fn test_ranking_orders_by_percentage() {
        let recipes = recipes();
        let matches = match_recipes(&recipes, &["milk", "chicken", "onion"]).into_matches();
        let scores: Vec<(&str, u8)> = matches
            .iter()
            .map(|m| (m.recipe.id.as_str(), m.match_percentage))
            .collect();
        assert_eq!(scores, vec![("3", 100), ("2", 33)]);
    }

    #[test]
    fn test_recipe_without_ingredients_scores_zero() {
        let mut recipe = recipes().remove(0);
        recipe.ingredients.clear();
        let recipes = vec![recipe];
        assert!(match_recipes(&recipes, &["a"]).into_matches().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let recipes = recipes();
        let input = ["oil", "garlic", "egg", "x"];
        let first = serde_json::to_string(&match_recipes(&recipes, &input).into_matches()).unwrap();
        let second = serde_json::to_string(&match_recipes(&recipes, &input).into_matches()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(1, 200), 1);
        assert_eq!(percentage(1, 201), 0);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(MatchTier::for_percentage(100), MatchTier::Perfect);
        assert_eq!(MatchTier::for_percentage(70), MatchTier::Strong);
        assert_eq!(MatchTier::for_percentage(69), MatchTier::Fair);
        assert_eq!(MatchTier::for_percentage(50), MatchTier::Fair);
        assert_eq!(MatchTier::for_percentage(49), MatchTier::Weak);
    }

    #[test]
    fn test_serialized_shape() {
        let recipes = recipes();
        let matches = match_recipes(&recipes, &["garlic"]).into_matches();
        let json = serde_json::to_value(&matches[0]).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["matchCount"], 1);
        assert_eq!(json["matchPercentage"], 100);
        assert_eq!(json["totalUserIngredients"], 1);
    }
}
