//! Plain-text and JSON rendering for command results.

use anyhow::Result;
use pantry_core::{ProfileSummary, Recipe, RecipeMatch};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn summary_line(recipe: &Recipe) -> String {
    format!(
        "[{}] {} - {} mins, {}, {}",
        recipe.id, recipe.title, recipe.cook_time, recipe.difficulty, recipe.cuisine
    )
}

pub fn recipe_list(recipes: &[&Recipe], json: bool) -> Result<()> {
    if json {
        return print_json(recipes);
    }

    let noun = if recipes.len() == 1 { "Recipe" } else { "Recipes" };
    println!("{} {} Found", recipes.len(), noun);
    for recipe in recipes {
        println!("  {}", summary_line(recipe));
    }
    Ok(())
}

pub fn recipe_detail(recipe: &Recipe, json: bool) -> Result<()> {
    if json {
        return print_json(recipe);
    }

    println!("{}", recipe.title);
    println!(
        "{} mins | {} | {} | {}",
        recipe.cook_time,
        recipe.difficulty,
        recipe.cuisine,
        recipe.privacy.as_str()
    );
    if !recipe.tags.is_empty() {
        println!("Tags: {}", recipe.tags.join(", "));
    }
    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    println!("\nSteps:");
    for (i, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    Ok(())
}

pub fn match_list(matches: &[RecipeMatch<'_>], json: bool) -> Result<()> {
    if json {
        return print_json(matches);
    }

    let noun = if matches.len() == 1 { "recipe" } else { "recipes" };
    println!("Found {} matching {}", matches.len(), noun);
    if matches.is_empty() {
        println!("No matches found. Try adding more ingredients or different combinations.");
    }
    for m in matches {
        println!(
            "  {:>3}% match ({:?}) {}",
            m.match_percentage,
            m.tier(),
            summary_line(m.recipe)
        );
        println!(
            "        Matches {} of {} ingredients",
            m.match_count, m.total_user_ingredients
        );
    }
    Ok(())
}

pub fn lines(items: &[String], json: bool) -> Result<()> {
    if json {
        return print_json(items);
    }
    for item in items {
        println!("{}", item);
    }
    Ok(())
}

pub fn profile(summary: &ProfileSummary, json: bool) -> Result<()> {
    if json {
        return print_json(summary);
    }

    println!("{} <{}>", summary.profile.name, summary.profile.email);
    println!(
        "Recipes: {}  Favorites: {}",
        summary.recipe_count, summary.favorite_count
    );
    println!("\nMy Favorites:");
    for recipe in &summary.favorite_recipes {
        println!("  {}", summary_line(recipe));
    }
    println!("\nMy Recipes:");
    for recipe in &summary.own_recipes {
        println!("  {}", summary_line(recipe));
    }
    Ok(())
}
