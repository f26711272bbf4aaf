use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Amount for the recipe's current servings; `None` for "to taste" style lines
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub description: String,
}

/// A fully loaded recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    /// Present on recipes uploaded with the caller's API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Derived from bookmark membership whenever the recipe becomes current
    #[serde(default)]
    pub bookmarked: bool,
}

impl Recipe {
    /// Project the recipe down to the shape used by result and bookmark lists.
    pub fn preview(&self) -> SearchResult {
        SearchResult {
            id: self.id.clone(),
            title: self.title.clone(),
            publisher: self.publisher.clone(),
            image_url: self.image_url.clone(),
            key: self.key.clone(),
        }
    }

    pub fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }

    /// Rescale every quantity by `new_servings / servings`, then adopt `new_servings`.
    ///
    /// Units, descriptions and absent quantities are left untouched. The
    /// caller guarantees `new_servings >= 1`.
    pub(crate) fn rescale(&mut self, new_servings: u32) {
        let factor = f64::from(new_servings) / f64::from(self.servings);
        for ingredient in &mut self.ingredients {
            if let Some(quantity) = ingredient.quantity.as_mut() {
                *quantity *= factor;
            }
        }
        self.servings = new_servings;
    }
}

/// Lightweight projection of a recipe returned by searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}
