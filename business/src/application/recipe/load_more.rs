use std::sync::Arc;

use async_trait::async_trait;

use crate::application::recipe::fetch::fetch_batch;
use crate::domain::logger::Logger;
use crate::domain::recipe::catalog::RecipeCatalog;
use crate::domain::recipe::errors::SearchError;
use crate::domain::recipe::fetch_guard::FetchGuard;
use crate::domain::recipe::result_set::SearchResultSet;
use crate::domain::recipe::use_cases::load_more::LoadMoreRecipesUseCase;
use crate::domain::recipe::value_objects::FilterCriteria;

pub struct LoadMoreRecipesUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalog>,
    pub logger: Arc<dyn Logger>,
    /// Shared with the search use case: one fetch slot across both.
    pub guard: Arc<FetchGuard>,
    pub page_size: u32,
}

#[async_trait]
impl LoadMoreRecipesUseCase for LoadMoreRecipesUseCaseImpl {
    async fn execute(
        &self,
        existing: &SearchResultSet,
        filters: &FilterCriteria,
    ) -> Result<SearchResultSet, SearchError> {
        if existing.query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let _token = self.guard.try_begin().ok_or(SearchError::Busy)?;

        self.logger.info(&format!(
            "Loading more recipes for \"{}\" at offset {}",
            existing.query, existing.next_offset
        ));

        let batch = fetch_batch(
            &self.catalog,
            &self.logger,
            &existing.query,
            existing.next_offset,
            self.page_size,
            filters,
        )
        .await?;

        // Append without deduplication: the catalog's ordering may shift
        // between pages, and repeats are an accepted limitation.
        let mut items = existing.items.clone();
        items.extend(batch.items);

        Ok(SearchResultSet {
            items,
            total_available: batch.total_available,
            next_offset: existing.next_offset + batch.fetched_count,
            query: existing.query.clone(),
        })
    }
}
