pub mod config;
pub mod draft;
pub mod error;
pub mod favorites;
pub mod matcher;
pub mod profile;
pub mod recipe;
pub mod search;
pub mod seed;
pub mod session;
pub mod store;
pub mod suggest;
pub mod user;

pub use config::{ConfigError, PantryConfig};
pub use draft::RecipeDraft;
pub use error::{AuthError, SeedError, StoreError, ValidationError};
pub use favorites::Favorites;
pub use matcher::{match_recipes, MatchOutcome, MatchTier, RecipeMatch};
pub use profile::ProfileSummary;
pub use recipe::{Difficulty, NewRecipe, Privacy, Recipe};
pub use search::{clamp_max_time, filter_recipes, quick_search, SearchFilter};
pub use seed::SeedData;
pub use session::{Authenticator, DemoAuthenticator, Route, SessionProvider, SessionState};
pub use store::{InMemoryRecipeStore, RecipeRepository};
pub use suggest::suggest_ingredients;
pub use user::{ProfileUpdate, User, UserProfile};
