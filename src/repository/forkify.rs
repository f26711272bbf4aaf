use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::model::{Ingredient, Recipe, SearchResult};
use crate::repository::{NewRecipe, RecipeRepository};

/// Client for the Forkify recipe API
pub struct ForkifyClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct RecipeData {
    recipe: WireRecipe,
}

#[derive(Deserialize)]
struct RecipesData {
    #[serde(default)]
    recipes: Vec<WireResult>,
}

#[derive(Deserialize)]
struct Failure {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct WireIngredient {
    quantity: Option<f64>,
    unit: Option<String>,
    description: String,
}

#[derive(Deserialize)]
struct WireRecipe {
    id: String,
    title: String,
    source_url: String,
    image_url: String,
    publisher: String,
    cooking_time: u32,
    servings: u32,
    #[serde(default)]
    ingredients: Vec<WireIngredient>,
    key: Option<String>,
}

#[derive(Deserialize)]
struct WireResult {
    id: String,
    title: String,
    publisher: String,
    image_url: String,
    key: Option<String>,
}

impl TryFrom<WireRecipe> for Recipe {
    type Error = AppError;

    fn try_from(wire: WireRecipe) -> Result<Self> {
        if wire.servings < 1 {
            return Err(AppError::MalformedResponse(format!(
                "recipe '{}' has {} servings",
                wire.id, wire.servings
            )));
        }

        Ok(Recipe {
            id: wire.id,
            title: wire.title,
            source_url: wire.source_url,
            image_url: wire.image_url,
            publisher: wire.publisher,
            cooking_time: wire.cooking_time,
            servings: wire.servings,
            ingredients: wire
                .ingredients
                .into_iter()
                .map(|i| Ingredient {
                    quantity: i.quantity,
                    unit: i.unit.unwrap_or_default(),
                    description: i.description,
                })
                .collect(),
            key: wire.key,
            bookmarked: false,
        })
    }
}

impl From<WireResult> for SearchResult {
    fn from(wire: WireResult) -> Self {
        SearchResult {
            id: wire.id,
            title: wire.title,
            publisher: wire.publisher,
            image_url: wire.image_url,
            key: wire.key,
        }
    }
}

impl ForkifyClient {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent("Mozilla/5.0 (compatible; ForkifyBot/1.0)")
            .build()?;

        Ok(ForkifyClient {
            client,
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: Option<String>) -> Self {
        ForkifyClient {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// The collection URL, or the recipe URL with `id` as a single escaped segment.
    fn url(&self, id: Option<&str>) -> Result<Url> {
        let invalid = || AppError::InvalidUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| invalid())?;
            segments.pop_if_empty().push(id.unwrap_or_default());
        }
        Ok(url)
    }

    fn key_param(&self) -> Vec<(&'static str, &str)> {
        self.api_key
            .as_deref()
            .map(|key| vec![("key", key)])
            .unwrap_or_default()
    }
}

/// Split a response into its body (on success) or its status and server message.
async fn read_body<T: for<'de> Deserialize<'de>>(
    response: Response,
) -> Result<std::result::Result<T, (StatusCode, String)>> {
    let status = response.status();
    let text = response.text().await?;
    debug!("Forkify answered {}: {} bytes", status, text.len());

    if status.is_success() {
        let body = serde_json::from_str(&text)
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;
        return Ok(Ok(body));
    }

    let message = serde_json::from_str::<Failure>(&text)
        .map(|f| f.message)
        .unwrap_or_default();
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        message
    };
    Ok(Err((status, message)))
}

#[async_trait]
impl RecipeRepository for ForkifyClient {
    async fn load_recipe(&self, id: &str) -> Result<Recipe> {
        let response = self
            .client
            .get(self.url(Some(id))?)
            .query(&self.key_param())
            .send()
            .await?;

        match read_body::<Envelope<RecipeData>>(response).await? {
            Ok(body) => body.data.recipe.try_into(),
            Err((status, message))
                if status == StatusCode::BAD_REQUEST || status == StatusCode::NOT_FOUND =>
            {
                Err(AppError::NotFound(message))
            }
            Err((status, message)) => Err(AppError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }

    async fn search_recipes(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::EmptyQuery);
        }

        let mut params = vec![("search", query)];
        params.extend(self.key_param());
        let response = self.client.get(self.url(None)?).query(&params).send().await?;

        match read_body::<Envelope<RecipesData>>(response).await? {
            Ok(body) => Ok(body.data.recipes.into_iter().map(Into::into).collect()),
            Err((status, message)) => Err(AppError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }

    async fn upload_recipe(&self, recipe: &NewRecipe) -> Result<Recipe> {
        if self.api_key.is_none() {
            return Err(AppError::UploadValidation(
                "An API key is required to upload recipes".to_string(),
            ));
        }

        let response = self
            .client
            .post(self.url(None)?)
            .query(&self.key_param())
            .json(recipe)
            .send()
            .await?;

        match read_body::<Envelope<RecipeData>>(response).await? {
            Ok(body) => body.data.recipe.try_into(),
            Err((status, message)) if status == StatusCode::BAD_REQUEST => {
                Err(AppError::UploadValidation(message))
            }
            Err((status, message)) => Err(AppError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}
