use std::sync::Arc;

use crate::domain::favorites::model::FavoritesSet;
use crate::domain::favorites::repository::FavoritesRepository;
use crate::domain::favorites::use_cases::load::LoadFavoritesUseCase;
use crate::domain::logger::Logger;

pub struct LoadFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoritesRepository>,
    pub logger: Arc<dyn Logger>,
}

impl LoadFavoritesUseCase for LoadFavoritesUseCaseImpl {
    fn execute(&self) -> FavoritesSet {
        match self.repository.load() {
            Ok(entries) => {
                let favorites = FavoritesSet::from_entries(entries);
                self.logger
                    .info(&format!("Loaded {} favorite recipes", favorites.len()));
                favorites
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Could not load favorites, starting empty: {}",
                    err
                ));
                FavoritesSet::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::recipe::model::Recipe;
    use crate::domain::shared::value_objects::RecipeId;
    use mockall::mock;

    mock! {
        pub FavoritesRepo {}

        impl FavoritesRepository for FavoritesRepo {
            fn load(&self) -> Result<Vec<Recipe>, StorageError>;
            fn persist(&self, favorites: &[Recipe]) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn recipe(id: u64) -> Recipe {
        Recipe::summary_record(RecipeId::new(id), format!("Dish {}", id))
    }

    #[test]
    fn should_load_the_persisted_set() {
        let mut repo = MockFavoritesRepo::new();
        repo.expect_load()
            .returning(|| Ok(vec![recipe(1), recipe(2)]));

        let use_case = LoadFavoritesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let favorites = use_case.execute();
        assert_eq!(favorites.len(), 2);
        assert!(favorites.contains(RecipeId::new(1)));
    }

    #[test]
    fn should_dedupe_persisted_entries() {
        let mut repo = MockFavoritesRepo::new();
        repo.expect_load()
            .returning(|| Ok(vec![recipe(1), recipe(1), recipe(2)]));

        let use_case = LoadFavoritesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().len(), 2);
    }

    #[test]
    fn should_start_empty_when_the_store_is_corrupt() {
        let mut repo = MockFavoritesRepo::new();
        repo.expect_load()
            .returning(|| Err(StorageError::Serialization));

        let use_case = LoadFavoritesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute().is_empty());
    }
}
