use crate::domain::favorites::model::FavoritesSet;

/// Reads the persisted favorites at startup. Missing or corrupt data
/// yields an empty set; this operation never fails the caller.
pub trait LoadFavoritesUseCase: Send + Sync {
    fn execute(&self) -> FavoritesSet;
}
