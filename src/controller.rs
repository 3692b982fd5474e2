use std::collections::HashMap;
use std::fmt;

use log::{info, warn};
use serde::Serialize;

use crate::api::RecipeApi;
use crate::model::{Cuisine, SearchResult};
use crate::render::RecipeView;

pub const RANDOM_MEAL_FAILED: &str = "Couldn't fetch a meal. Try again!";
pub const RECIPE_DETAIL_FAILED: &str = "Could not fetch recipe details. Try again!";

/// A user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RandomMeal,
    ChooseCuisine(Cuisine),
    ChooseDish(u64),
}

/// What an interaction produces for display
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Recipe(RecipeView),
    Dishes(DishMenu),
    /// Inline message shown instead of a result; the user re-triggers manually
    Notice(&'static str),
}

/// A selectable dish, keyed by recipe id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishOption {
    pub id: u64,
    pub title: String,
    /// Title, with the id appended when another option shares the title
    pub label: String,
}

/// How the second stage of the browse cascade names its dish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishSelection {
    /// 1-based position in the menu as displayed
    Position(usize),
    /// Recipe id, stable across reruns of the search
    Id(u64),
}

/// Dishes found for one cuisine, in API order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishMenu {
    pub cuisine: Cuisine,
    pub options: Vec<DishOption>,
}

impl DishMenu {
    /// Build the menu without collapsing duplicate titles
    pub fn new(cuisine: Cuisine, results: Vec<SearchResult>) -> Self {
        let mut title_counts: HashMap<&str, usize> = HashMap::new();
        for result in &results {
            *title_counts.entry(result.title.as_str()).or_default() += 1;
        }

        let options = results
            .iter()
            .map(|result| {
                let label = if title_counts[result.title.as_str()] > 1 {
                    format!("{} (#{})", result.title, result.id)
                } else {
                    result.title.clone()
                };
                DishOption {
                    id: result.id,
                    title: result.title.clone(),
                    label,
                }
            })
            .collect();

        DishMenu { cuisine, options }
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Resolve a 1-based menu position
    pub fn resolve(&self, choice: usize) -> Option<&DishOption> {
        choice.checked_sub(1).and_then(|i| self.options.get(i))
    }

    /// Look up a dish by recipe id. Stable across searches, unlike positions.
    pub fn find(&self, id: u64) -> Option<&DishOption> {
        self.options.iter().find(|option| option.id == id)
    }

    /// Only dishes present in this menu can be selected
    pub fn select(&self, selection: DishSelection) -> Option<&DishOption> {
        match selection {
            DishSelection::Position(choice) => self.resolve(choice),
            DishSelection::Id(id) => self.find(id),
        }
    }
}

impl fmt::Display for DishMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.is_empty() {
            return writeln!(f, "No {} dishes found.", self.cuisine);
        }
        writeln!(f, "{} dishes:", self.cuisine)?;
        for (i, option) in self.options.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, option.label)?;
        }
        Ok(())
    }
}

/// Maps each user action to one request/response round trip.
/// Holds no state between actions.
pub struct Controller<A: RecipeApi> {
    api: A,
}

impl<A: RecipeApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn handle(&self, action: Action) -> Screen {
        match action {
            Action::RandomMeal => self.random_meal().await,
            Action::ChooseCuisine(cuisine) => Screen::Dishes(self.dish_menu(cuisine).await),
            Action::ChooseDish(id) => self.dish_detail(id).await,
        }
    }

    pub fn cuisines(&self) -> &'static [Cuisine] {
        self.api.list_cuisines()
    }

    pub async fn random_meal(&self) -> Screen {
        match self.api.random_recipe().await {
            Ok(recipe) => {
                info!("Random meal: {} ({})", recipe.title, recipe.id);
                Screen::Recipe(RecipeView::from(&recipe))
            }
            Err(e) => {
                warn!("Random meal failed: {}", e);
                Screen::Notice(RANDOM_MEAL_FAILED)
            }
        }
    }

    pub async fn dish_menu(&self, cuisine: Cuisine) -> DishMenu {
        let results = self.api.search_by_cuisine(cuisine).await;
        info!("{} search returned {} dishes", cuisine, results.len());
        DishMenu::new(cuisine, results)
    }

    pub async fn dish_detail(&self, id: u64) -> Screen {
        match self.api.recipe_detail(id).await {
            Ok(recipe) => Screen::Recipe(RecipeView::from(&recipe)),
            Err(e) => {
                warn!("Detail for recipe {} failed: {}", id, e);
                Screen::Notice(RECIPE_DETAIL_FAILED)
            }
        }
    }
}
