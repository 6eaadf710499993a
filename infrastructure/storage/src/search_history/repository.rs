use business::domain::errors::StorageError;
use business::domain::search_history::repository::RecentSearchesRepository;

use crate::keys::RECENT_SEARCHES_KEY;
use crate::store::JsonFileStore;

pub struct RecentSearchesRepositoryJson {
    store: JsonFileStore,
}

impl RecentSearchesRepositoryJson {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

impl RecentSearchesRepository for RecentSearchesRepositoryJson {
    fn load(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .store
            .get::<Vec<String>>(RECENT_SEARCHES_KEY)?
            .unwrap_or_default())
    }

    fn persist(&self, terms: &[String]) -> Result<(), StorageError> {
        self.store.set(RECENT_SEARCHES_KEY, &terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn should_round_trip_the_terms() {
        let dir = tempfile::tempdir().unwrap();
        let repository = RecentSearchesRepositoryJson::new(JsonFileStore::new(dir.path()));

        let terms = vec!["pasta".to_string(), "miso-soup".to_string()];
        repository.persist(&terms).unwrap();

        assert_eq!(repository.load().unwrap(), terms);
    }

    #[test]
    fn should_load_empty_when_nothing_was_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let repository = RecentSearchesRepositoryJson::new(JsonFileStore::new(dir.path()));

        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn should_report_a_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("recentSearches.json"), "not json").unwrap();
        let repository = RecentSearchesRepositoryJson::new(JsonFileStore::new(dir.path()));

        assert!(matches!(
            repository.load(),
            Err(StorageError::Serialization)
        ));
    }
}
