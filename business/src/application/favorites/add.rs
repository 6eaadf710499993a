use std::sync::Arc;

use crate::domain::favorites::model::FavoritesSet;
use crate::domain::favorites::repository::FavoritesRepository;
use crate::domain::favorites::use_cases::add::AddFavoriteUseCase;
use crate::domain::logger::Logger;
use crate::domain::recipe::model::Recipe;

pub struct AddFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoritesRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddFavoriteUseCase for AddFavoriteUseCaseImpl {
    fn execute(&self, favorites: &FavoritesSet, recipe: Recipe) -> FavoritesSet {
        if favorites.contains(recipe.id) {
            self.logger
                .debug(&format!("Recipe {} is already a favorite", recipe.id));
            return favorites.clone();
        }

        self.logger
            .info(&format!("Adding favorite: {}", recipe.title));
        let updated = favorites.with_added(recipe);

        if let Err(err) = self.repository.persist(updated.entries()) {
            // the in-memory set stays authoritative for this session
            self.logger
                .warn(&format!("Persisting favorites failed: {}", err));
        }

        updated
    }
}
