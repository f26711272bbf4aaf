#![allow(dead_code)]

use async_trait::async_trait;
use forkify::{
    AppError, ApplicationState, Controller, HashLocation, Ingredient, Listing, MemoryStore,
    NewRecipe, Recipe, RecipeRepository, SearchResult, SearchState, UploadView, View, Views,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

/// Everything the fake views were asked to do
#[derive(Debug, Default)]
pub struct Recorded {
    pub calls: Vec<String>,
    pub recipe: Option<Recipe>,
    pub results: Option<Listing>,
    pub bookmarks: Option<Listing>,
    pub pages: Option<(usize, usize)>,
    pub errors: Vec<String>,
    pub window_toggles: usize,
}

pub type Shared = Rc<RefCell<Recorded>>;

struct RecipeRecorder(Shared);

impl View for RecipeRecorder {
    type Data = Recipe;

    fn render(&mut self, recipe: &Recipe) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("recipe.render".to_string());
        rec.recipe = Some(recipe.clone());
    }

    fn update(&mut self, recipe: &Recipe) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("recipe.update".to_string());
        rec.recipe = Some(recipe.clone());
    }

    fn render_spinner(&mut self) {
        self.0.borrow_mut().calls.push("recipe.spinner".to_string());
    }

    fn render_error(&mut self, message: Option<&str>) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("recipe.error".to_string());
        rec.errors.push(message.unwrap_or_default().to_string());
    }
}

struct ResultsRecorder(Shared);

impl View for ResultsRecorder {
    type Data = Listing;

    fn render(&mut self, listing: &Listing) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("results.render".to_string());
        rec.results = Some(listing.clone());
    }

    fn update(&mut self, listing: &Listing) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("results.update".to_string());
        rec.results = Some(listing.clone());
    }

    fn render_spinner(&mut self) {
        self.0.borrow_mut().calls.push("results.spinner".to_string());
    }

    fn render_error(&mut self, message: Option<&str>) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("results.error".to_string());
        rec.errors.push(message.unwrap_or_default().to_string());
    }
}

struct BookmarksRecorder(Shared);

impl View for BookmarksRecorder {
    type Data = Listing;

    fn render(&mut self, listing: &Listing) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("bookmarks.render".to_string());
        rec.bookmarks = Some(listing.clone());
    }

    fn update(&mut self, listing: &Listing) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("bookmarks.update".to_string());
        rec.bookmarks = Some(listing.clone());
    }

    fn render_error(&mut self, message: Option<&str>) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("bookmarks.error".to_string());
        rec.errors.push(message.unwrap_or_default().to_string());
    }
}

struct PaginationRecorder(Shared);

impl View for PaginationRecorder {
    type Data = SearchState;

    fn render(&mut self, search: &SearchState) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("pagination.render".to_string());
        rec.pages = Some((search.page(), search.num_pages()));
    }

    fn render_error(&mut self, message: Option<&str>) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("pagination.error".to_string());
        rec.errors.push(message.unwrap_or_default().to_string());
    }
}

struct UploadRecorder(Shared);

impl UploadView for UploadRecorder {
    fn render_spinner(&mut self) {
        self.0.borrow_mut().calls.push("upload.spinner".to_string());
    }

    fn render_message(&mut self, _message: Option<&str>) {
        self.0.borrow_mut().calls.push("upload.message".to_string());
    }

    fn render_error(&mut self, message: &str) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("upload.error".to_string());
        rec.errors.push(message.to_string());
    }

    fn toggle_window(&mut self) {
        let mut rec = self.0.borrow_mut();
        rec.calls.push("upload.toggle".to_string());
        rec.window_toggles += 1;
    }
}

pub fn recording_views() -> (Views, Shared) {
    let shared = Shared::default();
    let views = Views {
        recipe: Box::new(RecipeRecorder(shared.clone())),
        results: Box::new(ResultsRecorder(shared.clone())),
        pagination: Box::new(PaginationRecorder(shared.clone())),
        bookmarks: Box::new(BookmarksRecorder(shared.clone())),
        upload: Box::new(UploadRecorder(shared.clone())),
    };
    (views, shared)
}

/// Repository backed by fixed data
#[derive(Default)]
pub struct InMemoryRepository {
    pub recipes: HashMap<String, Recipe>,
    pub searches: HashMap<String, Vec<SearchResult>>,
    pub offline: bool,
    pub reject_uploads: Option<String>,
    pub requests: Mutex<Vec<String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.insert(recipe.id.clone(), recipe);
        self
    }

    pub fn with_search(mut self, query: &str, count: usize) -> Self {
        self.searches
            .insert(query.to_string(), (0..count).map(result).collect());
        self
    }

    fn log(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }

    fn unavailable() -> AppError {
        AppError::Api {
            status: 503,
            message: "offline".to_string(),
        }
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn load_recipe(&self, id: &str) -> forkify::Result<Recipe> {
        self.log(format!("load {}", id));
        if self.offline {
            return Err(Self::unavailable());
        }
        self.recipes
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Invalid _id: {}", id)))
    }

    async fn search_recipes(&self, query: &str) -> forkify::Result<Vec<SearchResult>> {
        self.log(format!("search {}", query));
        if self.offline {
            return Err(Self::unavailable());
        }
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }

    async fn upload_recipe(&self, recipe: &NewRecipe) -> forkify::Result<Recipe> {
        self.log(format!("upload {}", recipe.title));
        if let Some(message) = &self.reject_uploads {
            return Err(AppError::UploadValidation(message.clone()));
        }
        Ok(Recipe {
            id: "uploaded-1".to_string(),
            title: recipe.title.clone(),
            source_url: recipe.source_url.clone(),
            image_url: recipe.image_url.clone(),
            publisher: recipe.publisher.clone(),
            cooking_time: recipe.cooking_time,
            servings: recipe.servings,
            ingredients: recipe.ingredients.clone(),
            key: Some("test-key".to_string()),
            bookmarked: false,
        })
    }
}

pub fn recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        source_url: format!("https://example.com/{}", id),
        image_url: format!("https://example.com/{}.jpg", id),
        publisher: "Test Kitchen".to_string(),
        cooking_time: 45,
        servings: 4,
        ingredients: vec![
            Ingredient {
                quantity: Some(500.0),
                unit: "g".to_string(),
                description: "pasta".to_string(),
            },
            Ingredient {
                quantity: None,
                unit: String::new(),
                description: "salt".to_string(),
            },
        ],
        key: None,
        bookmarked: false,
    }
}

pub fn result(n: usize) -> SearchResult {
    SearchResult {
        id: format!("r{}", n),
        title: format!("Result {}", n),
        publisher: "Test Kitchen".to_string(),
        image_url: format!("https://example.com/r{}.jpg", n),
        key: None,
    }
}

pub fn controller(repository: InMemoryRepository) -> (Controller, Shared) {
    controller_at(repository, HashLocation::new())
}

pub fn controller_at(repository: InMemoryRepository, location: HashLocation) -> (Controller, Shared) {
    let (views, shared) = recording_views();
    let state = ApplicationState::new(10, Box::new(MemoryStore::new()));
    let mut controller = Controller::new(state, Box::new(repository), views, Box::new(location))
        .with_modal_close_delay(Duration::from_millis(2500));
    controller.init();
    (controller, shared)
}

pub fn calls(shared: &Shared) -> Vec<String> {
    shared.borrow().calls.clone()
}

pub fn clear(shared: &Shared) {
    shared.borrow_mut().calls.clear();
}
