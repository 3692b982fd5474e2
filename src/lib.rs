pub mod animation;
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;

pub use api::{RecipeApi, SpoonacularClient};
pub use config::AppConfig;
pub use controller::{Action, Controller, DishMenu, DishOption, DishSelection, Screen};
pub use error::GeneratorError;
pub use model::{Cuisine, Recipe, SearchResult};
pub use render::{split_instructions, RecipeView};

/// Build a controller backed by the Spoonacular API.
///
/// Fails with [`GeneratorError::MissingApiKey`] when no key is configured.
pub fn controller_from_config(
    config: &AppConfig,
) -> Result<Controller<SpoonacularClient>, GeneratorError> {
    let client = SpoonacularClient::new(config)?;
    Ok(Controller::new(client))
}
