mod spoonacular;

pub use spoonacular::SpoonacularClient;

use crate::error::GeneratorError;
use crate::model::{Cuisine, Recipe, SearchResult};
use async_trait::async_trait;

/// Read-only access to a recipe service
///
/// Every call issues its own request; nothing is cached or retried.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch one random recipe
    async fn random_recipe(&self) -> Result<Recipe, GeneratorError>;

    /// The cuisines that can be browsed. No network access.
    fn list_cuisines(&self) -> &'static [Cuisine] {
        &Cuisine::ALL
    }

    /// Search dishes of a cuisine. Any failure yields an empty list.
    async fn search_by_cuisine(&self, cuisine: Cuisine) -> Vec<SearchResult>;

    /// Fetch full detail (ingredients, instructions) for one recipe id
    async fn recipe_detail(&self, id: u64) -> Result<Recipe, GeneratorError>;
}
