/// Configuration for Spoonacular API access.
pub struct SpoonacularConfig {
    pub api_key: String,
    pub base_url: String,
}

impl SpoonacularConfig {
    /// Load the configuration from environment variables.
    ///
    /// Environment variables:
    /// - SPOONACULAR_API_KEY: API key (required)
    /// - SPOONACULAR_BASE_URL: endpoint override, used in tests
    pub fn from_env() -> Self {
        let api_key = std::env::var("SPOONACULAR_API_KEY")
            .expect("SPOONACULAR_API_KEY environment variable must be set");
        let base_url = std::env::var("SPOONACULAR_BASE_URL")
            .unwrap_or_else(|_| "https://api.spoonacular.com".to_string());
        Self { api_key, base_url }
    }

    /// Configuration with an explicit key, for programmatic wiring.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.spoonacular.com".to_string(),
        }
    }
}
