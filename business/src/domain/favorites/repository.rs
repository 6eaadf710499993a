use crate::domain::errors::StorageError;
use crate::domain::recipe::model::Recipe;

/// Port over the favorites slot of the key-value storage substrate.
///
/// The substrate is synchronous, so this port is too. Every persist call
/// writes the full snapshot list, not a diff.
pub trait FavoritesRepository: Send + Sync {
    fn load(&self) -> Result<Vec<Recipe>, StorageError>;
    fn persist(&self, favorites: &[Recipe]) -> Result<(), StorageError>;
}
