use async_trait::async_trait;

use crate::domain::shared::value_objects::RecipeId;

use super::errors::CatalogError;
use super::model::Recipe;
use super::value_objects::FilterCriteria;

/// One page of raw search results as the catalog returned it, before
/// enrichment and client-side filtering.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub results: Vec<Recipe>,
    /// Total matches for the query across all pages.
    pub total_results: u32,
    /// Offset this page was fetched at.
    pub offset: u32,
}

/// Port to the external recipe catalog.
///
/// Implementations pass `min_health_score` and `max_price_cents` through
/// as native query parameters; the servings dimension stays client-side.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    async fn search_page(
        &self,
        query: &str,
        number: u32,
        offset: u32,
        filters: &FilterCriteria,
    ) -> Result<SearchPage, CatalogError>;

    /// Full detail record for one recipe, nutrition included.
    async fn recipe_detail(&self, id: RecipeId) -> Result<Recipe, CatalogError>;
}
