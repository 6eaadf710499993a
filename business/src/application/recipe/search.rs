use std::sync::Arc;

use async_trait::async_trait;

use crate::application::recipe::fetch::fetch_batch;
use crate::domain::logger::Logger;
use crate::domain::recipe::catalog::RecipeCatalog;
use crate::domain::recipe::errors::SearchError;
use crate::domain::recipe::fetch_guard::FetchGuard;
use crate::domain::recipe::result_set::SearchResultSet;
use crate::domain::recipe::use_cases::search::{SearchRecipesParams, SearchRecipesUseCase};

pub struct SearchRecipesUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalog>,
    pub logger: Arc<dyn Logger>,
    /// Shared with the load-more use case: one fetch slot across both.
    pub guard: Arc<FetchGuard>,
    pub page_size: u32,
}

#[async_trait]
impl SearchRecipesUseCase for SearchRecipesUseCaseImpl {
    async fn execute(&self, params: SearchRecipesParams) -> Result<SearchResultSet, SearchError> {
        let query = params.query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let _token = self.guard.try_begin().ok_or(SearchError::Busy)?;

        self.logger
            .info(&format!("Searching recipes for \"{}\"", query));

        let batch = fetch_batch(
            &self.catalog,
            &self.logger,
            query,
            0,
            self.page_size,
            &params.filters,
        )
        .await?;

        self.logger.info(&format!(
            "Search kept {} of {} fetched recipes ({} available)",
            batch.items.len(),
            batch.fetched_count,
            batch.total_available
        ));

        Ok(SearchResultSet {
            items: batch.items,
            total_available: batch.total_available,
            next_offset: batch.fetched_count,
            query: query.to_string(),
        })
    }
}
