use crate::domain::favorites::model::FavoritesSet;
use crate::domain::recipe::model::Recipe;

/// Saves a recipe snapshot into the favorites. A no-op when the id is
/// already saved. The updated set is persisted write-through before the
/// call returns; a persistence failure is reported, not propagated.
pub trait AddFavoriteUseCase: Send + Sync {
    fn execute(&self, favorites: &FavoritesSet, recipe: Recipe) -> FavoritesSet;
}
