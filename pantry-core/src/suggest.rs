//! Ingredient suggestions for the matcher input.

use std::collections::BTreeSet;

use crate::recipe::Recipe;

/// Default number of suggestions offered.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 15;

/// Ingredient names seen across `recipes`, alphabetical, at most `limit`.
///
/// A name is the ingredient line without its first word ("2 cloves garlic"
/// gives "cloves garlic"), lower-cased. Names of two characters or fewer
/// are dropped.
pub fn suggest_ingredients(recipes: &[Recipe], limit: usize) -> Vec<String> {
    let names: BTreeSet<String> = recipes
        .iter()
        .flat_map(|r| r.ingredients.iter())
        .filter_map(|line| ingredient_name(line))
        .collect();

    names.into_iter().take(limit).collect()
}

fn ingredient_name(line: &str) -> Option<String> {
    let name = line
        .split(' ')
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    (name.chars().count() > 2).then_some(name)
}
