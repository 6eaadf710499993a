use reqwest::Client;

use business::domain::shared::value_objects::RecipeId;

use crate::config::SpoonacularConfig;

/// Shared Spoonacular HTTP client configuration.
pub struct SpoonacularClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl SpoonacularClient {
    pub fn new(config: SpoonacularConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url,
        }
    }

    /// Returns the paginated search endpoint URL.
    pub fn search_url(&self) -> String {
        format!("{}/recipes/complexSearch", self.base_url)
    }

    /// Returns the detail endpoint URL for one recipe.
    pub fn information_url(&self, id: RecipeId) -> String {
        format!("{}/recipes/{}/information", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls() {
        let client = SpoonacularClient::new(SpoonacularConfig::new("k"));

        assert_eq!(
            client.search_url(),
            "https://api.spoonacular.com/recipes/complexSearch"
        );
        assert_eq!(
            client.information_url(RecipeId::new(716429)),
            "https://api.spoonacular.com/recipes/716429/information"
        );
    }
}
