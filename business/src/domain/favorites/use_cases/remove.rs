use crate::domain::favorites::model::FavoritesSet;
use crate::domain::shared::value_objects::RecipeId;

/// Deletes a saved recipe by id. A no-op when the id is absent. The
/// updated set is persisted write-through before the call returns.
pub trait RemoveFavoriteUseCase: Send + Sync {
    fn execute(&self, favorites: &FavoritesSet, id: RecipeId) -> FavoritesSet;
}
