//! # forkify
//!
//! Recipe lookup and bookmarking. The crate holds the application state
//! (current recipe, paginated search results, bookmarks), a client for the
//! Forkify recipe API, and a controller that turns UI events into state
//! changes and view refreshes.
//!
//! Views, navigation and bookmark storage are collaborators supplied by the
//! front end; see [`views`], [`navigation`] and [`storage`].
//!
//! ```no_run
//! # use forkify::{build_controller, AppConfig, Event, HashLocation, MemoryStore, Views};
//! # async fn run(views: Views) -> Result<(), forkify::AppError> {
//! let config = AppConfig::load()?;
//! let mut controller = build_controller(
//!     &config,
//!     views,
//!     Box::new(HashLocation::new()),
//!     Box::new(MemoryStore::new()),
//! )?;
//! controller.dispatch(Event::Search { query: "pasta".into() }).await?;
//! controller.dispatch(Event::Paginate { page: 2 }).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod navigation;
pub mod repository;
pub mod state;
pub mod storage;
pub mod views;

pub use crate::config::AppConfig;
pub use controller::{Controller, Event, EventKind, Handler, Subscriptions};
pub use error::{AppError, Result};
pub use model::{Ingredient, Recipe, SearchResult};
pub use navigation::{HashLocation, Navigation};
pub use repository::{ForkifyClient, ImageData, NewRecipe, RecipeRepository, UploadForm};
pub use state::{ApplicationState, BookmarkSet, SearchState};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use views::{Listing, UploadView, View, Views};

/// Wire up a controller talking to the configured Forkify endpoint.
///
/// Bookmarks are rehydrated from `storage`, and the standard event
/// subscriptions are registered.
pub fn build_controller(
    config: &AppConfig,
    views: Views,
    navigation: Box<dyn Navigation>,
    storage: Box<dyn KeyValueStore>,
) -> Result<Controller> {
    let repository = ForkifyClient::new(config)?;
    let state = ApplicationState::new(config.results_per_page, storage);

    let mut controller = Controller::new(state, Box::new(repository), views, navigation)
        .with_modal_close_delay(config.modal_close_delay());
    controller.init();
    Ok(controller)
}
