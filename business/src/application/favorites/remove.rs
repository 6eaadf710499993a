use std::sync::Arc;

use crate::domain::favorites::model::FavoritesSet;
use crate::domain::favorites::repository::FavoritesRepository;
use crate::domain::favorites::use_cases::remove::RemoveFavoriteUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::RecipeId;

pub struct RemoveFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoritesRepository>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveFavoriteUseCase for RemoveFavoriteUseCaseImpl {
    fn execute(&self, favorites: &FavoritesSet, id: RecipeId) -> FavoritesSet {
        if !favorites.contains(id) {
            self.logger
                .debug(&format!("Recipe {} is not a favorite", id));
            return favorites.clone();
        }

        self.logger.info(&format!("Removing favorite {}", id));
        let updated = favorites.without(id);

        if let Err(err) = self.repository.persist(updated.entries()) {
            // the in-memory set stays authoritative for this session
            self.logger
                .warn(&format!("Persisting favorites failed: {}", err));
        }

        updated
    }
}
