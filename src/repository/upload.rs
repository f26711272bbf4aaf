use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::model::Ingredient;

const INGREDIENT_FORMAT_ERROR: &str = "Wrong ingredient format! Please use the correct format";

/// Raw image attached to the upload form
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// MIME type, e.g. "image/jpeg"
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Submitted form fields, in form order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub fields: Vec<(String, String)>,
    pub image: Option<ImageData>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn image(mut self, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.image = Some(ImageData {
            mime: mime.into(),
            bytes,
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Recipe payload sent to the source on upload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipe {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

impl NewRecipe {
    /// Build the upload payload from submitted form fields.
    ///
    /// Ingredient fields are any non-empty `ingredient*` field holding
    /// `quantity,unit,description`, taken in the order they were submitted;
    /// the quantity may be left empty.
    pub fn from_form(form: &UploadForm) -> Result<Self> {
        let ingredients = form
            .fields
            .iter()
            .filter(|(name, value)| name.starts_with("ingredient") && !value.trim().is_empty())
            .map(|(_, value)| parse_ingredient(value))
            .collect::<Result<Vec<_>>>()?;

        let image_url = match (required(form, "image"), &form.image) {
            (Ok(url), _) => url,
            (Err(_), Some(image)) => {
                format!("data:{};base64,{}", image.mime, STANDARD.encode(&image.bytes))
            }
            (Err(e), None) => return Err(e),
        };

        let servings = parse_count(form, "servings")?;
        if servings < 1 {
            return Err(AppError::UploadValidation(
                "Servings must be at least 1".to_string(),
            ));
        }

        Ok(NewRecipe {
            title: required(form, "title")?,
            source_url: required(form, "sourceUrl")?,
            image_url,
            publisher: required(form, "publisher")?,
            cooking_time: parse_count(form, "cookingTime")?,
            servings,
            ingredients,
        })
    }
}

fn required(form: &UploadForm, name: &str) -> Result<String> {
    form.get(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::UploadValidation(format!("Missing field: {}", name)))
}

fn parse_count(form: &UploadForm, name: &str) -> Result<u32> {
    let raw = required(form, name)?;
    raw.parse()
        .map_err(|_| AppError::UploadValidation(format!("{} must be a whole number: {}", name, raw)))
}

fn parse_ingredient(value: &str) -> Result<Ingredient> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [quantity, unit, description] = parts.as_slice() else {
        return Err(AppError::UploadValidation(INGREDIENT_FORMAT_ERROR.to_string()));
    };

    let quantity = if quantity.is_empty() {
        None
    } else {
        let parsed: f64 = quantity
            .parse()
            .map_err(|_| AppError::UploadValidation(INGREDIENT_FORMAT_ERROR.to_string()))?;
        if !parsed.is_finite() {
            return Err(AppError::UploadValidation(INGREDIENT_FORMAT_ERROR.to_string()));
        }
        Some(parsed)
    };

    Ok(Ingredient {
        quantity,
        unit: unit.to_string(),
        description: description.to_string(),
    })
}
