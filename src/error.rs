use thiserror::Error;

/// Errors that can occur while loading, searching, bookmarking or uploading recipes
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure talking to the recipe source (DNS, connect, timeout, body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request was valid but no such recipe exists
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Any other non-success answer from the recipe source
    #[error("Recipe API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The configured API URL cannot address recipes
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The recipe source answered with a payload we could not interpret
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Servings must be at least 1
    #[error("Invalid servings: {0}")]
    InvalidServings(u32),

    /// Page numbers start at 1
    #[error("Invalid page: {0}")]
    InvalidPage(usize),

    /// Search was requested with an empty query
    #[error("Search query is empty")]
    EmptyQuery,

    /// The upload form could not be turned into a recipe, or the source rejected it
    #[error("{0}")]
    UploadValidation(String),

    /// An operation needs a current recipe but none has been loaded yet
    #[error("No recipe loaded")]
    NoRecipeLoaded,

    /// Bookmark storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Bookmark contents could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Caller bugs rather than user-facing failures.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, AppError::InvalidPage(_) | AppError::InvalidServings(_))
    }

    /// Text shown to the user when this error ends an action.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(_) => {
                "We could not find that recipe. Please try another one!".to_string()
            }
            AppError::Network(_) | AppError::Api { .. } | AppError::MalformedResponse(_) => {
                "Something went wrong talking to the recipe server. Please try again.".to_string()
            }
            AppError::UploadValidation(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
