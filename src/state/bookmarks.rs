use crate::model::Recipe;
use serde::{Deserialize, Serialize};

/// Bookmarked recipes in insertion order, unique by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkSet {
    recipes: Vec<Recipe>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from stored recipes, dropping later duplicates.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut set = Self::new();
        for recipe in recipes {
            set.add(recipe);
        }
        set
    }

    /// Append `recipe` unless its id is already present.
    ///
    /// Returns whether the set changed.
    pub fn add(&mut self, mut recipe: Recipe) -> bool {
        if self.contains(&recipe.id) {
            return false;
        }
        recipe.bookmarked = true;
        self.recipes.push(recipe);
        true
    }

    /// Remove the entry with `id`. Absent ids are a no-op.
    ///
    /// Returns whether the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|recipe| recipe.id != id);
        self.recipes.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.recipes.iter().any(|recipe| recipe.id == id)
    }

    pub fn clear(&mut self) {
        self.recipes.clear();
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
