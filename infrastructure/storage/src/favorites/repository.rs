use business::domain::errors::StorageError;
use business::domain::favorites::repository::FavoritesRepository;
use business::domain::recipe::model::Recipe;

use crate::keys::FAVORITES_KEY;
use crate::store::JsonFileStore;

use super::entity::FavoriteRecipeEntity;

pub struct FavoritesRepositoryJson {
    store: JsonFileStore,
}

impl FavoritesRepositoryJson {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

impl FavoritesRepository for FavoritesRepositoryJson {
    fn load(&self) -> Result<Vec<Recipe>, StorageError> {
        let entities: Option<Vec<FavoriteRecipeEntity>> = self.store.get(FAVORITES_KEY)?;

        Ok(entities
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.into_domain())
            .collect())
    }

    fn persist(&self, favorites: &[Recipe]) -> Result<(), StorageError> {
        let entities: Vec<FavoriteRecipeEntity> = favorites
            .iter()
            .map(FavoriteRecipeEntity::from_domain)
            .collect();

        self.store.set(FAVORITES_KEY, &entities)
    }
}
