//! Favorited recipe ids for the active user.

use std::collections::BTreeSet;

use crate::recipe::Recipe;
use crate::store::RecipeRepository;
use crate::user::User;

/// A set of recipe ids. Adding twice keeps one entry; removing an id that
/// was never added does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_user(user: &User) -> Self {
        Self {
            ids: user.favorites.clone(),
        }
    }

    /// Returns true if the id was not already present.
    pub fn add(&mut self, recipe_id: &str) -> bool {
        self.ids.insert(recipe_id.to_string())
    }

    /// Returns true if the id was present.
    pub fn remove(&mut self, recipe_id: &str) -> bool {
        self.ids.remove(recipe_id)
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.ids.contains(recipe_id)
    }

    /// Flip membership. Returns whether the recipe is now a favorite.
    pub fn toggle(&mut self, recipe_id: &str) -> bool {
        if self.remove(recipe_id) {
            false
        } else {
            self.add(recipe_id)
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Current ids in sorted order.
    pub fn snapshot(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Favorited recipes still present in `store`, in store order. Ids with
    /// no matching recipe are skipped.
    pub fn favorite_recipes(&self, store: &dyn RecipeRepository) -> Vec<Recipe> {
        store
            .list()
            .into_iter()
            .filter(|r| self.contains(&r.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryRecipeStore;

    #[test]
    fn test_add_remove_contains() {
        let mut favorites = Favorites::new();
        assert!(favorites.add("3"));
        assert!(favorites.contains("3"));
        assert!(favorites.remove("3"));
        assert!(!favorites.contains("3"));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut favorites = Favorites::new();
        favorites.add("1");
        assert!(!favorites.remove("9"));
        assert_eq!(favorites.snapshot(), vec!["1"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut favorites = Favorites::new();
        assert!(favorites.add("2"));
        assert!(!favorites.add("2"));
        assert_eq!(favorites.len(), 1);
        favorites.remove("2");
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle("1"));
        assert!(favorites.contains("1"));
        assert!(!favorites.toggle("1"));
        assert!(!favorites.contains("1"));
    }

    #[test]
    fn test_for_user_and_resolution() {
        let store = InMemoryRecipeStore::seeded();
        let user = store.get_user("user1").unwrap();
        let mut favorites = Favorites::for_user(&user);
        assert_eq!(favorites.snapshot(), vec!["1", "2"]);

        favorites.add("404");
        let titles: Vec<String> = favorites
            .favorite_recipes(&store)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Vegetable Stir Fry", "Classic Pancakes"]);
    }
}
