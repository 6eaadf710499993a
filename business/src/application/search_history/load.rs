use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::search_history::model::RecentSearches;
use crate::domain::search_history::repository::RecentSearchesRepository;
use crate::domain::search_history::use_cases::load::LoadRecentSearchesUseCase;

pub struct LoadRecentSearchesUseCaseImpl {
    pub repository: Arc<dyn RecentSearchesRepository>,
    pub logger: Arc<dyn Logger>,
}

impl LoadRecentSearchesUseCase for LoadRecentSearchesUseCaseImpl {
    fn execute(&self) -> RecentSearches {
        match self.repository.load() {
            Ok(terms) => RecentSearches::from_terms(terms),
            Err(err) => {
                self.logger.warn(&format!(
                    "Could not load search history, starting empty: {}",
                    err
                ));
                RecentSearches::empty()
            }
        }
    }
}
