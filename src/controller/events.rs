//! UI events and the subscriptions that route them to controller handlers.

use std::collections::HashMap;

use crate::repository::UploadForm;

/// Something the user did
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Page (re)load
    Load,
    /// The URL fragment changed to another recipe id
    HashChange,
    Search {
        query: String,
    },
    Paginate {
        page: usize,
    },
    UpdateServings {
        servings: u32,
    },
    ToggleBookmark,
    Upload(UploadForm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Load,
    HashChange,
    Search,
    Paginate,
    UpdateServings,
    ToggleBookmark,
    Upload,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Load => EventKind::Load,
            Event::HashChange => EventKind::HashChange,
            Event::Search { .. } => EventKind::Search,
            Event::Paginate { .. } => EventKind::Paginate,
            Event::UpdateServings { .. } => EventKind::UpdateServings,
            Event::ToggleBookmark => EventKind::ToggleBookmark,
            Event::Upload(_) => EventKind::Upload,
        }
    }
}

/// Controller operations an event can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Redraw the bookmark list
    RenderBookmarks,
    /// Load the recipe named by the URL fragment
    Recipes,
    /// Run a search and show its first page
    SearchResults,
    /// Show another page of the current search
    Pagination,
    /// Rescale the open recipe
    Servings,
    /// Add or remove the open recipe from bookmarks
    ToggleBookmark,
    /// Submit a new recipe
    AddRecipe,
}

/// Handlers per event kind, in registration order
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The wiring every view sets up at startup
    pub fn standard() -> Self {
        let mut subscriptions = Self::new();
        subscriptions.subscribe(EventKind::Load, Handler::RenderBookmarks);
        subscriptions.subscribe(EventKind::Load, Handler::Recipes);
        subscriptions.subscribe(EventKind::HashChange, Handler::Recipes);
        subscriptions.subscribe(EventKind::UpdateServings, Handler::Servings);
        subscriptions.subscribe(EventKind::ToggleBookmark, Handler::ToggleBookmark);
        subscriptions.subscribe(EventKind::Search, Handler::SearchResults);
        subscriptions.subscribe(EventKind::Paginate, Handler::Pagination);
        subscriptions.subscribe(EventKind::Upload, Handler::AddRecipe);
        subscriptions
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    pub fn handlers_for(&self, kind: EventKind) -> &[Handler] {
        self.handlers.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }
}
