//! Turns UI events into state changes and view refreshes.
//!
//! Each event runs to completion before the next is handled. Views are only
//! told to draw after the state change they reflect has been committed, and a
//! failed fetch or upload leaves the state exactly as it was.
//!
//! Closing the upload panel after a successful upload is scheduled, not
//! awaited: the next [`Controller::dispatch`] closes a panel whose deadline has
//! passed, and [`Controller::settle`] waits for it.

pub mod events;

pub use events::{Event, EventKind, Handler, Subscriptions};

use log::{debug, error, info, warn};
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::navigation::Navigation;
use crate::repository::{NewRecipe, RecipeRepository, UploadForm};
use crate::state::ApplicationState;
use crate::views::{Listing, Views};

pub struct Controller {
    state: ApplicationState,
    repository: Box<dyn RecipeRepository>,
    views: Views,
    navigation: Box<dyn Navigation>,
    subscriptions: Subscriptions,
    modal_close_delay: Duration,
    panel_close_at: Option<Instant>,
}

impl Controller {
    /// Create a controller with no subscriptions; call [`Controller::init`] to wire it up.
    pub fn new(
        state: ApplicationState,
        repository: Box<dyn RecipeRepository>,
        views: Views,
        navigation: Box<dyn Navigation>,
    ) -> Self {
        Controller {
            state,
            repository,
            views,
            navigation,
            subscriptions: Subscriptions::new(),
            modal_close_delay: AppConfig::default().modal_close_delay(),
            panel_close_at: None,
        }
    }

    /// Delay between a successful upload and closing the upload panel
    pub fn with_modal_close_delay(mut self, delay: Duration) -> Self {
        self.modal_close_delay = delay;
        self
    }

    /// Register the standard handler for every event kind.
    pub fn init(&mut self) {
        self.subscriptions = Subscriptions::standard();
    }

    /// Add `handler` after any already registered for `kind`.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.subscriptions.subscribe(kind, handler);
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn navigation(&self) -> &dyn Navigation {
        self.navigation.as_ref()
    }

    /// Run every handler subscribed to the event's kind, in order.
    ///
    /// User-facing failures are rendered by the views and still return `Ok`.
    /// Only caller mistakes (an invalid page or servings count) come back as
    /// `Err`, and they stop the remaining handlers.
    pub async fn dispatch(&mut self, event: Event) -> Result<()> {
        self.close_due_panel();

        let handlers = self.subscriptions.handlers_for(event.kind()).to_vec();
        if handlers.is_empty() {
            debug!("No handlers for {:?}", event.kind());
            return Ok(());
        }

        for handler in handlers {
            self.run(handler, &event).await?;
        }
        Ok(())
    }

    /// When the upload panel is due to close, if a close is pending.
    pub fn panel_close_deadline(&self) -> Option<Instant> {
        self.panel_close_at
    }

    /// Close the upload panel if its deadline has passed.
    pub fn close_due_panel(&mut self) -> bool {
        match self.panel_close_at {
            Some(deadline) if deadline <= Instant::now() => {
                self.panel_close_at = None;
                self.views.upload.toggle_window();
                debug!("Closed upload panel");
                true
            }
            _ => false,
        }
    }

    /// Wait for a pending panel close and perform it.
    pub async fn settle(&mut self) {
        if let Some(deadline) = self.panel_close_at {
            sleep_until(deadline).await;
            self.close_due_panel();
        }
    }

    /// Point the URL fragment at `id` and react to the change.
    pub async fn select_recipe(&mut self, id: &str) -> Result<()> {
        self.navigation.push_id(id);
        self.dispatch(Event::HashChange).await
    }

    async fn run(&mut self, handler: Handler, event: &Event) -> Result<()> {
        match (handler, event) {
            (Handler::RenderBookmarks, _) => self.control_bookmarks(),
            (Handler::Recipes, _) => self.control_recipes().await,
            (Handler::SearchResults, Event::Search { query }) => {
                self.control_search_results(query).await
            }
            (Handler::Pagination, Event::Paginate { page }) => self.control_pagination(*page)?,
            (Handler::Servings, Event::UpdateServings { servings }) => {
                self.control_servings(*servings)?
            }
            (Handler::ToggleBookmark, _) => self.control_toggle_bookmark(),
            (Handler::AddRecipe, Event::Upload(form)) => self.control_add_recipe(form).await,
            (handler, event) => {
                warn!("{:?} cannot handle {:?} events", handler, event.kind());
            }
        }
        Ok(())
    }

    fn results_listing(&self) -> Listing {
        Listing::new(self.state.peek_page().to_vec(), self.navigation.current_id())
    }

    fn bookmarks_listing(&self) -> Listing {
        Listing::from_recipes(self.state.bookmarks(), self.navigation.current_id())
    }

    async fn control_recipes(&mut self) {
        let Some(id) = self.navigation.current_id() else {
            return;
        };
        self.views.recipe.render_spinner();

        let recipe = match self.repository.load_recipe(&id).await {
            Ok(recipe) => recipe,
            Err(e) => {
                error!("Failed to load recipe '{}': {}", id, e);
                self.views.recipe.render_error(Some(&e.user_message()));
                return;
            }
        };

        self.state.set_current_recipe(recipe);
        info!("Showing recipe '{}'", id);

        let results = self.results_listing();
        let bookmarks = self.bookmarks_listing();
        if let Some(recipe) = self.state.current_recipe() {
            self.views.recipe.render(recipe);
        }
        self.views.results.update(&results);
        self.views.bookmarks.update(&bookmarks);
    }

    async fn control_search_results(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring empty search");
            return;
        }
        self.views.results.render_spinner();

        let results = match self.repository.search_recipes(query).await {
            Ok(results) => results,
            Err(AppError::EmptyQuery) => return,
            Err(e) => {
                error!("Search for '{}' failed: {}", query, e);
                self.views.results.render_error(Some(&e.user_message()));
                return;
            }
        };

        info!("Search '{}' found {} recipes", query, results.len());
        self.state.set_search_state(query, results);

        let listing = self.results_listing();
        self.views.results.render(&listing);
        self.views.pagination.render(self.state.search());
    }

    fn control_pagination(&mut self, page: usize) -> Result<()> {
        let items = self.state.goto_page(page)?.to_vec();
        debug!("Showing page {} ({} results)", page, items.len());

        let listing = Listing::new(items, self.navigation.current_id());
        self.views.results.render(&listing);
        self.views.pagination.render(self.state.search());
        Ok(())
    }

    fn control_servings(&mut self, servings: u32) -> Result<()> {
        if servings < 1 {
            warn!("Rejected servings change to {}", servings);
            return Err(AppError::InvalidServings(servings));
        }
        match self.state.update_servings(servings) {
            Ok(()) => {}
            Err(AppError::NoRecipeLoaded) => {
                debug!("Servings change with no recipe open");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        if let Some(recipe) = self.state.current_recipe() {
            self.views.recipe.update(recipe);
        }
        Ok(())
    }

    fn control_toggle_bookmark(&mut self) {
        let Some(recipe) = self.state.current_recipe() else {
            debug!("Bookmark toggle with no recipe open");
            return;
        };

        if recipe.bookmarked {
            let id = recipe.id.clone();
            self.state.delete_bookmark(&id);
            info!("Unbookmarked '{}'", id);
        } else {
            let recipe = recipe.clone();
            info!("Bookmarked '{}'", recipe.id);
            self.state.add_bookmark(recipe);
        }

        if let Some(recipe) = self.state.current_recipe() {
            self.views.recipe.update(recipe);
        }
        let bookmarks = self.bookmarks_listing();
        self.views.bookmarks.render(&bookmarks);
    }

    fn control_bookmarks(&mut self) {
        let bookmarks = self.bookmarks_listing();
        self.views.bookmarks.render(&bookmarks);
    }

    async fn control_add_recipe(&mut self, form: &UploadForm) {
        self.views.upload.render_spinner();

        let uploaded = match NewRecipe::from_form(form) {
            Ok(new_recipe) => self.repository.upload_recipe(&new_recipe).await,
            Err(e) => Err(e),
        };
        let recipe = match uploaded {
            Ok(recipe) => recipe,
            Err(e) => {
                error!("Upload failed: {}", e);
                let message = match &e {
                    AppError::Api { message, .. } => message.clone(),
                    other => other.user_message(),
                };
                self.views.upload.render_error(&message);
                return;
            }
        };

        let id = recipe.id.clone();
        self.state.set_current_recipe(recipe.clone());
        self.state.add_bookmark(recipe);
        info!("Uploaded recipe '{}'", id);

        if let Some(recipe) = self.state.current_recipe() {
            self.views.recipe.render(recipe);
        }
        self.views.upload.render_message(None);
        self.navigation.push_id(&id);
        let bookmarks = self.bookmarks_listing();
        self.views.bookmarks.render(&bookmarks);

        self.panel_close_at = Some(Instant::now() + self.modal_close_delay);
    }
}
