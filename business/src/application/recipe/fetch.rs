use std::sync::Arc;

use futures::future::join_all;

use crate::domain::logger::Logger;
use crate::domain::recipe::catalog::RecipeCatalog;
use crate::domain::recipe::errors::SearchError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::value_objects::FilterCriteria;

/// Remote page size. Tunable; small pages keep quota usage low.
pub const PAGE_SIZE: u32 = 5;

/// One fetched, enriched and filtered batch of results.
pub(crate) struct FetchedBatch {
    pub items: Vec<Recipe>,
    /// Raw count the catalog returned, before the servings filter.
    /// Offset bookkeeping advances by this, not by `items.len()`.
    pub fetched_count: u32,
    pub total_available: u32,
}

/// Shared fetch pipeline of the search and load-more use cases: one page
/// from the catalog, per-item detail enrichment, placeholder defaults,
/// then the client-side servings filter.
pub(crate) async fn fetch_batch(
    catalog: &Arc<dyn RecipeCatalog>,
    logger: &Arc<dyn Logger>,
    query: &str,
    offset: u32,
    page_size: u32,
    filters: &FilterCriteria,
) -> Result<FetchedBatch, SearchError> {
    let page = catalog
        .search_page(query, page_size, offset, filters)
        .await?;
    let fetched_count = page.results.len() as u32;

    // Detail enrichment is best effort: a failed detail fetch keeps the
    // summary record instead of failing the whole batch.
    let enriched = join_all(page.results.into_iter().map(|summary| async move {
        let id = summary.id;
        match catalog.recipe_detail(id).await {
            Ok(detail) => summary.merged_with(detail),
            Err(err) => {
                logger.warn(&format!("Detail fetch failed for recipe {}: {}", id, err));
                summary
            }
        }
    }))
    .await;

    let items = filters.filter_by_servings(
        enriched
            .into_iter()
            .map(Recipe::with_placeholder_summary)
            .collect(),
    );

    Ok(FetchedBatch {
        items,
        fetched_count,
        total_available: page.total_results,
    })
}
