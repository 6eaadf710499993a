//! Keys of the key-value storage substrate.
//!
//! `USER_PREFERENCES_KEY` and `RECIPE_CACHE_KEY` are reserved for
//! presentation-layer collaborators; the core exercises the other two.

pub const FAVORITES_KEY: &str = "recipesFavorites";
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
pub const USER_PREFERENCES_KEY: &str = "userPreferences";
pub const RECIPE_CACHE_KEY: &str = "recipeCache";
