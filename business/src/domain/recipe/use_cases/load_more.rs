use async_trait::async_trait;

use crate::domain::recipe::errors::SearchError;
use crate::domain::recipe::result_set::SearchResultSet;
use crate::domain::recipe::value_objects::FilterCriteria;

/// Fetches the next page for an existing result set and returns a new set
/// with the fresh items appended. The caller's set is never modified.
#[async_trait]
pub trait LoadMoreRecipesUseCase: Send + Sync {
    async fn execute(
        &self,
        existing: &SearchResultSet,
        filters: &FilterCriteria,
    ) -> Result<SearchResultSet, SearchError>;
}
