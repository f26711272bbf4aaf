//! Application state: current recipe, search results and bookmarks.

pub mod bookmarks;
pub mod pagination;

pub use bookmarks::BookmarkSet;

use log::{debug, warn};

use crate::error::{AppError, Result};
use crate::model::{Recipe, SearchResult};
use crate::storage::KeyValueStore;

/// Storage key holding the JSON-encoded bookmark list
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// The last search and the page currently shown
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    query: String,
    results: Vec<SearchResult>,
    page: usize,
    results_per_page: usize,
}

impl SearchState {
    /// An empty search; pages hold at least one result.
    pub fn new(results_per_page: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            results_per_page: results_per_page.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Current page, always >= 1
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn results_per_page(&self) -> usize {
        self.results_per_page
    }

    pub fn num_pages(&self) -> usize {
        pagination::page_count(self.results.len(), self.results_per_page)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.num_pages()
    }
}

/// Session-wide state, owned by the controller
pub struct ApplicationState {
    recipe: Option<Recipe>,
    search: SearchState,
    bookmarks: BookmarkSet,
    storage: Box<dyn KeyValueStore>,
}

impl ApplicationState {
    /// Create the state and rehydrate bookmarks from `storage`.
    ///
    /// A `results_per_page` of 0 is raised to 1.
    pub fn new(results_per_page: usize, storage: Box<dyn KeyValueStore>) -> Self {
        if results_per_page == 0 {
            warn!("results_per_page must be at least 1, using 1");
        }
        let bookmarks = match load_bookmarks(storage.as_ref()) {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                warn!("Ignoring stored bookmarks: {}", e);
                BookmarkSet::new()
            }
        };
        debug!("Rehydrated {} bookmarks", bookmarks.len());

        Self {
            recipe: None,
            search: SearchState::new(results_per_page),
            bookmarks,
            storage,
        }
    }

    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// Make `recipe` current; its bookmark flag comes from the bookmark set only.
    pub fn set_current_recipe(&mut self, mut recipe: Recipe) {
        recipe.bookmarked = self.bookmarks.contains(&recipe.id);
        debug!(
            "Current recipe is now '{}' (bookmarked: {})",
            recipe.id, recipe.bookmarked
        );
        self.recipe = Some(recipe);
    }

    /// Rescale the current recipe to `new_servings`.
    pub fn update_servings(&mut self, new_servings: u32) -> Result<()> {
        if new_servings < 1 {
            return Err(AppError::InvalidServings(new_servings));
        }
        let recipe = self.recipe.as_mut().ok_or(AppError::NoRecipeLoaded)?;
        debug!(
            "Rescaling '{}' from {} to {} servings",
            recipe.id, recipe.servings, new_servings
        );
        recipe.rescale(new_servings);
        Ok(())
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Replace the search with a fresh one, starting over at page 1.
    pub fn set_search_state(&mut self, query: impl Into<String>, results: Vec<SearchResult>) {
        self.search.query = query.into();
        self.search.results = results;
        self.search.page = 1;
        debug!(
            "Search '{}' holds {} results",
            self.search.query,
            self.search.results.len()
        );
    }

    /// The current page of results, without moving the cursor.
    pub fn peek_page(&self) -> &[SearchResult] {
        pagination::page(
            &self.search.results,
            self.search.page,
            self.search.results_per_page,
        )
        .unwrap_or_default()
    }

    /// Move the cursor to `page_number` and return that page.
    pub fn goto_page(&mut self, page_number: usize) -> Result<&[SearchResult]> {
        if page_number < 1 {
            return Err(AppError::InvalidPage(page_number));
        }
        self.search.page = page_number;
        Ok(self.peek_page())
    }

    pub fn bookmarks(&self) -> &[Recipe] {
        self.bookmarks.as_slice()
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains(id)
    }

    /// Bookmark `recipe`; re-adding a bookmarked id changes nothing.
    pub fn add_bookmark(&mut self, recipe: Recipe) {
        let id = recipe.id.clone();
        if self.bookmarks.add(recipe) {
            debug!("Bookmarked '{}'", id);
            self.persist_bookmarks();
        }
        if let Some(current) = self.recipe.as_mut().filter(|r| r.id == id) {
            current.bookmarked = true;
        }
    }

    /// Drop the bookmark for `id`; unknown ids are ignored.
    pub fn delete_bookmark(&mut self, id: &str) {
        if self.bookmarks.remove(id) {
            debug!("Removed bookmark '{}'", id);
            self.persist_bookmarks();
        }
        if let Some(current) = self.recipe.as_mut().filter(|r| r.id == id) {
            current.bookmarked = false;
        }
    }

    pub fn clear_bookmarks(&mut self) {
        self.bookmarks.clear();
        if let Some(current) = self.recipe.as_mut() {
            current.bookmarked = false;
        }
        if let Err(e) = self.storage.remove(BOOKMARKS_KEY) {
            warn!("Failed to clear stored bookmarks: {}", e);
        }
    }

    fn persist_bookmarks(&mut self) {
        let result = serde_json::to_vec(&self.bookmarks)
            .map_err(AppError::from)
            .and_then(|bytes| self.storage.set(BOOKMARKS_KEY, &bytes));
        if let Err(e) = result {
            warn!("Failed to persist bookmarks: {}", e);
        }
    }
}

fn load_bookmarks(storage: &dyn KeyValueStore) -> Result<BookmarkSet> {
    match storage.get(BOOKMARKS_KEY)? {
        Some(bytes) => {
            let recipes: Vec<Recipe> = serde_json::from_slice(&bytes)?;
            Ok(BookmarkSet::from_recipes(recipes))
        }
        None => Ok(BookmarkSet::new()),
    }
}
