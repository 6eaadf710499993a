use crate::domain::search_history::model::RecentSearches;

/// Reads the persisted search history at startup. Missing or corrupt
/// data yields an empty history; this operation never fails the caller.
pub trait LoadRecentSearchesUseCase: Send + Sync {
    fn execute(&self) -> RecentSearches;
}
