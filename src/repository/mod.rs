mod forkify;
pub mod upload;

pub use forkify::ForkifyClient;
pub use upload::{ImageData, NewRecipe, UploadForm};

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Recipe, SearchResult};

/// Source of recipes
///
/// Implementations only fetch and normalise; applying results to the
/// application state is the caller's job.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Fetch a single recipe by id
    async fn load_recipe(&self, id: &str) -> Result<Recipe>;

    /// Fetch every recipe matching `query`, in source order
    async fn search_recipes(&self, query: &str) -> Result<Vec<SearchResult>>;

    /// Store a new recipe and return it as the source saved it
    async fn upload_recipe(&self, recipe: &NewRecipe) -> Result<Recipe>;
}
