use serde::Serialize;

use crate::favorites::Favorites;
use crate::recipe::Recipe;
use crate::store::RecipeRepository;
use crate::user::UserProfile;

/// What the profile view shows for one user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub profile: UserProfile,
    pub own_recipes: Vec<Recipe>,
    pub favorite_recipes: Vec<Recipe>,
    pub recipe_count: usize,
    /// Size of the favorites set, including ids with no matching recipe.
    pub favorite_count: usize,
}

impl ProfileSummary {
    pub fn build(profile: UserProfile, favorites: &Favorites, store: &dyn RecipeRepository) -> Self {
        let own_recipes = store.recipes_by_user(&profile.id);
        let favorite_recipes = favorites.favorite_recipes(store);
        Self {
            recipe_count: own_recipes.len(),
            favorite_count: favorites.len(),
            profile,
            own_recipes,
            favorite_recipes,
        }
    }
}
