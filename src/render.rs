use std::fmt;

use scraper::{ElementRef, Html};
use serde::Serialize;

use crate::model::Recipe;

pub const NO_INSTRUCTIONS: &str = "No instructions available.";

/// Display-ready form of a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeView {
    pub id: u64,
    pub title: String,
    pub image: Option<String>,
    pub ready_in_minutes: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        RecipeView {
            id: recipe.id,
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            ready_in_minutes: recipe.ready_in_minutes,
            ingredients: recipe
                .extended_ingredients
                .iter()
                .map(|i| i.original.clone())
                .collect(),
            steps: split_instructions(recipe.instructions.as_deref()),
        }
    }
}

impl fmt::Display for RecipeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        if let Some(image) = &self.image {
            writeln!(f, "Image: {}", image)?;
        }
        writeln!(f, "Ready in: {} minutes", self.ready_in_minutes)?;

        if !self.ingredients.is_empty() {
            writeln!(f)?;
            writeln!(f, "Ingredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "- {}", ingredient)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Instructions:")?;
        for step in &self.steps {
            writeln!(f, "- {}", step)?;
        }
        Ok(())
    }
}

/// Break free-text instructions into display steps.
///
/// This is a period-splitting heuristic, not a sentence parser: "1.5 cups"
/// or "approx. 10 min" are split in the middle. HTML markup is reduced to
/// text first, with block elements (`<p>`, `<li>`, `<br>`, ...) acting as
/// step boundaries.
pub fn split_instructions(instructions: Option<&str>) -> Vec<String> {
    let text = match instructions.map(str::trim) {
        Some(raw) => markup_to_text(raw).unwrap_or_else(|| raw.to_string()),
        None => String::new(),
    };

    let steps: Vec<String> = text
        .split('.')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(|step| format!("{}.", step))
        .collect();

    if steps.is_empty() {
        vec![NO_INSTRUCTIONS.to_string()]
    } else {
        steps
    }
}

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "ol", "ul", "br", "h1", "h2", "h3", "h4", "h5", "h6", "tr",
];

/// Plain text of an HTML fragment, or `None` when the input is not markup.
///
/// A stray `<` in prose ("heat a<b") does not count: the text has to open
/// with a tag or contain a closing tag, and parse to at least one element.
fn markup_to_text(raw: &str) -> Option<String> {
    if !raw.starts_with('<') && !raw.contains("</") {
        return None;
    }

    let fragment = Html::parse_fragment(raw);
    let root = fragment.root_element();
    if !root.children().any(|child| child.value().is_element()) {
        return None;
    }

    let mut text = String::new();
    collect_text(root, &mut text);
    Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            // Extra periods around a block only produce empty fragments
            let block = BLOCK_TAGS.contains(&child.value().name());
            if block {
                out.push_str(". ");
            }
            collect_text(child, out);
            if block {
                out.push_str(". ");
            }
        }
    }
}
