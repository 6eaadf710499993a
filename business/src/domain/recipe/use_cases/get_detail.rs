use async_trait::async_trait;

use crate::domain::recipe::errors::CatalogError;
use crate::domain::recipe::model::Recipe;
use crate::domain::shared::value_objects::RecipeId;

/// Fetches the full detail record for one recipe, nutrition included.
/// Used by the detail view; not subject to the search fetch guard.
#[async_trait]
pub trait GetRecipeDetailUseCase: Send + Sync {
    async fn execute(&self, id: RecipeId) -> Result<Recipe, CatalogError>;
}
