use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::catalog::RecipeCatalog;
use crate::domain::recipe::errors::CatalogError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::use_cases::get_detail::GetRecipeDetailUseCase;
use crate::domain::shared::value_objects::RecipeId;

pub struct GetRecipeDetailUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeDetailUseCase for GetRecipeDetailUseCaseImpl {
    async fn execute(&self, id: RecipeId) -> Result<Recipe, CatalogError> {
        self.logger
            .info(&format!("Fetching detail for recipe {}", id));

        let recipe = self.catalog.recipe_detail(id).await?;

        self.logger
            .info(&format!("Loaded recipe detail: {}", recipe.title));
        Ok(recipe.with_placeholder_summary())
    }
}
