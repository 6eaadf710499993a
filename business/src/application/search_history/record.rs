use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::search_history::model::RecentSearches;
use crate::domain::search_history::repository::RecentSearchesRepository;
use crate::domain::search_history::use_cases::record::RecordSearchUseCase;

pub struct RecordSearchUseCaseImpl {
    pub repository: Arc<dyn RecentSearchesRepository>,
    pub logger: Arc<dyn Logger>,
}

impl RecordSearchUseCase for RecordSearchUseCaseImpl {
    fn execute(&self, history: &RecentSearches, term: &str) -> RecentSearches {
        let updated = history.with_recorded(term);
        if updated == *history {
            return updated;
        }

        if let Err(err) = self.repository.persist(updated.terms()) {
            // the in-memory history stays authoritative for this session
            self.logger
                .warn(&format!("Persisting search history failed: {}", err));
        }

        updated
    }
}
