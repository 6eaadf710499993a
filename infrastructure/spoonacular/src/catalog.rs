use async_trait::async_trait;

use business::domain::recipe::catalog::{RecipeCatalog, SearchPage};
use business::domain::recipe::errors::CatalogError;
use business::domain::recipe::model::Recipe;
use business::domain::recipe::value_objects::FilterCriteria;
use business::domain::shared::value_objects::RecipeId;

use crate::client::SpoonacularClient;
use crate::dto::{RecipeDto, SearchResponseDto};

pub struct RecipeCatalogSpoonacular {
    client: SpoonacularClient,
}

impl RecipeCatalogSpoonacular {
    pub fn new(client: SpoonacularClient) -> Self {
        Self { client }
    }
}

/// Status mapping of the catalog: 402 marks a spent daily quota and 401 a
/// rejected key; everything else non-success is a plain network failure.
fn map_status(status: u16) -> CatalogError {
    match status {
        401 => CatalogError::Auth,
        402 => CatalogError::QuotaExceeded,
        status => CatalogError::Network {
            status: Some(status),
        },
    }
}

#[async_trait]
impl RecipeCatalog for RecipeCatalogSpoonacular {
    async fn search_page(
        &self,
        query: &str,
        number: u32,
        offset: u32,
        filters: &FilterCriteria,
    ) -> Result<SearchPage, CatalogError> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.to_string()),
            ("number", number.to_string()),
            ("offset", offset.to_string()),
            ("apiKey", self.client.api_key.clone()),
            ("addRecipeInformation", "true".to_string()),
            ("fillIngredients", "true".to_string()),
        ];
        if let Some(score) = filters.min_health_score {
            params.push(("minHealthScore", score.to_string()));
        }
        if let Some(cents) = filters.max_price_cents {
            params.push(("maxPricePerServing", cents.to_string()));
        }

        let response = self
            .client
            .client
            .get(self.client.search_url())
            .query(&params)
            .send()
            .await
            .map_err(|_| CatalogError::Network { status: None })?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status(status.as_u16()));
        }

        let data: SearchResponseDto = response
            .json()
            .await
            .map_err(|_| CatalogError::Network { status: None })?;

        Ok(SearchPage {
            results: data
                .results
                .into_iter()
                .map(RecipeDto::into_domain)
                .collect(),
            total_results: data.total_results,
            offset: data.offset,
        })
    }

    async fn recipe_detail(&self, id: RecipeId) -> Result<Recipe, CatalogError> {
        let params = [
            ("apiKey", self.client.api_key.as_str()),
            ("includeNutrition", "true"),
        ];

        let response = self
            .client
            .client
            .get(self.client.information_url(id))
            .query(&params)
            .send()
            .await
            .map_err(|_| CatalogError::Network { status: None })?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status(status.as_u16()));
        }

        let data: RecipeDto = response
            .json()
            .await
            .map_err(|_| CatalogError::Network { status: None })?;

        Ok(data.into_domain())
    }
}
