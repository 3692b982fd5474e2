use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// A single dish as returned by the Spoonacular recipe endpoints.
///
/// `id`, `title` and `readyInMinutes` are required. Everything else may be
/// missing or null in real payloads and falls back to an empty value.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub extended_ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Ingredient {
    /// Human-readable line, e.g. "2 cups of flour"
    pub original: String,
}

/// Minimal projection returned by the search endpoint. Ingredients and
/// instructions require a follow-up detail fetch by `id`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
}

/// Envelope of `GET /random`
#[derive(Debug, Deserialize)]
pub(crate) struct RandomResponse {
    pub recipes: Vec<Recipe>,
}

/// Envelope of `GET /complexSearch`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The fixed set of cuisines offered for browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cuisine {
    Italian,
    Mexican,
    Indian,
    Chinese,
    American,
    French,
    Japanese,
    Mediterranean,
}

impl Cuisine {
    pub const ALL: [Cuisine; 8] = [
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Indian,
        Cuisine::Chinese,
        Cuisine::American,
        Cuisine::French,
        Cuisine::Japanese,
        Cuisine::Mediterranean,
    ];

    /// Name as sent in the `cuisine` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Indian => "Indian",
            Cuisine::Chinese => "Chinese",
            Cuisine::American => "American",
            Cuisine::French => "French",
            Cuisine::Japanese => "Japanese",
            Cuisine::Mediterranean => "Mediterranean",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cuisine {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Cuisine::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeneratorError::UnknownCuisine(wanted.to_string()))
    }
}
