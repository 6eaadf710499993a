use crate::domain::search_history::model::RecentSearches;

/// Records a search term into the history and persists the result
/// write-through; a persistence failure is reported, not propagated.
pub trait RecordSearchUseCase: Send + Sync {
    fn execute(&self, history: &RecentSearches, term: &str) -> RecentSearches;
}
