use async_trait::async_trait;

use crate::domain::recipe::errors::SearchError;
use crate::domain::recipe::result_set::SearchResultSet;
use crate::domain::recipe::value_objects::FilterCriteria;

pub struct SearchRecipesParams {
    pub query: String,
    pub filters: FilterCriteria,
}

/// Runs a fresh search: fetches the first page, enriches and filters it,
/// and returns a brand-new result set replacing any prior one.
#[async_trait]
pub trait SearchRecipesUseCase: Send + Sync {
    async fn execute(&self, params: SearchRecipesParams) -> Result<SearchResultSet, SearchError>;
}
