use crate::api::RecipeApi;
use crate::config::AppConfig;
use crate::error::GeneratorError;
use crate::model::{Cuisine, RandomResponse, Recipe, SearchResponse, SearchResult};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("food-generator/", env!("CARGO_PKG_VERSION"));

/// Client for the Spoonacular `recipes` endpoints
///
/// The API key travels as the `apiKey` query parameter on every request,
/// which is how Spoonacular authenticates. It is never written to the log.
pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
    search_limit: u32,
}

impl SpoonacularClient {
    pub fn new(config: &AppConfig) -> Result<Self, GeneratorError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key: config.api_key()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            search_limit: config.search_limit,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            search_limit: 5,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GeneratorError> {
        debug!("GET {}{}", self.base_url, path);

        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("apiKey", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GeneratorError::StatusError(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeApi for SpoonacularClient {
    async fn random_recipe(&self) -> Result<Recipe, GeneratorError> {
        let response: RandomResponse = self
            .get_json("/random", &[("number", "1".to_string())])
            .await?;

        response
            .recipes
            .into_iter()
            .next()
            .ok_or(GeneratorError::EmptyResponse)
    }

    async fn search_by_cuisine(&self, cuisine: Cuisine) -> Vec<SearchResult> {
        let query = [
            ("cuisine", cuisine.as_str().to_string()),
            ("number", self.search_limit.to_string()),
        ];

        match self.get_json::<SearchResponse>("/complexSearch", &query).await {
            Ok(response) => response.results,
            Err(e) => {
                warn!("Search for {} recipes failed: {}", cuisine, e);
                Vec::new()
            }
        }
    }

    async fn recipe_detail(&self, id: u64) -> Result<Recipe, GeneratorError> {
        self.get_json(&format!("/{}/information", id), &[]).await
    }
}
