use forkify::{Listing, Recipe, SearchState, UploadView, View, Views};

const RECIPE_ERROR: &str = "We could not find that recipe. Please try another one!";
const RESULTS_ERROR: &str = "No recipes found for your query! Please try again ;)";
const BOOKMARKS_EMPTY: &str = "No bookmarks yet. Find a nice recipe and bookmark it :)";
const UPLOAD_MESSAGE: &str = "Recipe was successfully uploaded :)";

pub fn views() -> Views {
    Views {
        recipe: Box::new(RecipeView),
        results: Box::new(ListView {
            empty_message: RESULTS_ERROR,
        }),
        pagination: Box::new(PaginationView),
        bookmarks: Box::new(ListView {
            empty_message: BOOKMARKS_EMPTY,
        }),
        upload: Box::new(AddRecipeView { open: true }),
    }
}

fn format_quantity(quantity: Option<f64>) -> String {
    match quantity {
        Some(q) => format!("{}", (q * 100.0).round() / 100.0),
        None => String::new(),
    }
}

struct RecipeView;

impl View for RecipeView {
    type Data = Recipe;

    fn render(&mut self, recipe: &Recipe) {
        let marker = if recipe.bookmarked { "★" } else { "☆" };
        println!("{} {}  ({})", marker, recipe.title, recipe.publisher);
        println!(
            "   {} minutes, {} servings",
            recipe.cooking_time, recipe.servings
        );
        for ingredient in &recipe.ingredients {
            let amount = format!("{} {}", format_quantity(ingredient.quantity), ingredient.unit);
            println!("   - {:>10} {}", amount.trim(), ingredient.description);
        }
        println!("   Directions: {}", recipe.source_url);
    }

    fn update(&mut self, recipe: &Recipe) {
        println!();
        self.render(recipe);
    }

    fn render_spinner(&mut self) {
        println!("Loading recipe...");
    }

    fn render_error(&mut self, message: Option<&str>) {
        eprintln!("⚠ {}", message.unwrap_or(RECIPE_ERROR));
    }
}

struct ListView {
    empty_message: &'static str,
}

impl View for ListView {
    type Data = Listing;

    fn render(&mut self, listing: &Listing) {
        if listing.items.is_empty() {
            println!("{}", self.empty_message);
            return;
        }
        for item in &listing.items {
            let active = if listing.is_active(item) { ">" } else { " " };
            let user = if item.key.is_some() { " [yours]" } else { "" };
            println!(
                "{} {:<26} {} ({}){}",
                active, item.id, item.title, item.publisher, user
            );
        }
    }

    fn render_spinner(&mut self) {
        println!("Searching...");
    }

    fn render_error(&mut self, message: Option<&str>) {
        eprintln!("⚠ {}", message.unwrap_or(self.empty_message));
    }
}

struct PaginationView;

impl View for PaginationView {
    type Data = SearchState;

    fn render(&mut self, search: &SearchState) {
        if search.num_pages() <= 1 {
            return;
        }
        let previous = if search.has_previous_page() {
            format!("< Page {}", search.page() - 1)
        } else {
            String::new()
        };
        let next = if search.has_next_page() {
            format!("Page {} >", search.page() + 1)
        } else {
            String::new()
        };
        println!(
            "{:<12} page {} of {} {:>12}",
            previous,
            search.page(),
            search.num_pages(),
            next
        );
    }

    fn render_error(&mut self, message: Option<&str>) {
        eprintln!("⚠ {}", message.unwrap_or("Pagination unavailable"));
    }
}

struct AddRecipeView {
    open: bool,
}

impl UploadView for AddRecipeView {
    fn render_spinner(&mut self) {
        println!("Uploading recipe...");
    }

    fn render_message(&mut self, message: Option<&str>) {
        println!("{}", message.unwrap_or(UPLOAD_MESSAGE));
    }

    fn render_error(&mut self, message: &str) {
        eprintln!("⚠ {}", message);
    }

    fn toggle_window(&mut self) {
        self.open = !self.open;
        log::debug!("Upload window open: {}", self.open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(Some(0.5)), "0.5");
        assert_eq!(format_quantity(Some(1.0 / 3.0)), "0.33");
        assert_eq!(format_quantity(Some(2.0)), "2");
        assert_eq!(format_quantity(None), "");
    }
}
