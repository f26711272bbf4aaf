//! Contracts for the presentation collaborators the controller drives.
//!
//! Views receive owned snapshots of state after a mutation has been
//! committed; they never read or write application state themselves.

use crate::model::{Recipe, SearchResult};
use crate::state::SearchState;

/// A view over one kind of data
pub trait View {
    type Data: ?Sized;

    /// Full redraw
    fn render(&mut self, data: &Self::Data);

    /// In-place patch of what is already drawn
    fn update(&mut self, data: &Self::Data) {
        self.render(data);
    }

    fn render_spinner(&mut self) {}

    /// Replace the view content with an error; `None` means the view's default message
    fn render_error(&mut self, message: Option<&str>);
}

/// Previews shown in a list, with the entry matching the open recipe highlighted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub items: Vec<SearchResult>,
    pub active_id: Option<String>,
}

impl Listing {
    pub fn new(items: Vec<SearchResult>, active_id: Option<String>) -> Self {
        Self { items, active_id }
    }

    pub fn from_recipes(recipes: &[Recipe], active_id: Option<String>) -> Self {
        Self::new(recipes.iter().map(Recipe::preview).collect(), active_id)
    }

    pub fn is_active(&self, item: &SearchResult) -> bool {
        self.active_id.as_deref() == Some(item.id.as_str())
    }
}

/// The recipe submission panel
pub trait UploadView {
    fn render_spinner(&mut self);

    /// Success notice; `None` means the view's default message
    fn render_message(&mut self, message: Option<&str>);

    fn render_error(&mut self, message: &str);

    /// Show the panel if hidden, hide it if shown
    fn toggle_window(&mut self);
}

/// Every view the controller refreshes
pub struct Views {
    pub recipe: Box<dyn View<Data = Recipe>>,
    pub results: Box<dyn View<Data = Listing>>,
    pub pagination: Box<dyn View<Data = SearchState>>,
    pub bookmarks: Box<dyn View<Data = Listing>>,
    pub upload: Box<dyn UploadView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{recipe, result};

    #[test]
    fn test_listing_active() {
        let listing = Listing::new(vec![result(1), result(2)], Some("r2".to_string()));
        assert!(!listing.is_active(&listing.items[0]));
        assert!(listing.is_active(&listing.items[1]));
    }

    #[test]
    fn test_listing_from_recipes() {
        let listing = Listing::from_recipes(&[recipe("a"), recipe("b")], None);
        assert_eq!(listing.items.len(), 2);
        assert_eq!(listing.items[1].id, "b");
        assert!(!listing.is_active(&listing.items[0]));
    }
}
