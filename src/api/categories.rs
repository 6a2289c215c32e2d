//! Category endpoints.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use super::assembler::{self, CategoryList, CategoryView};
use super::AppState;
use crate::domain::Category;
use crate::{CatalogError, Result};

const CATEGORY_NOT_FOUND: &str = "Category not found";

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub name: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<CategoryList>> {
    let categories = state.categories.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "listing categories failed");
        CatalogError::from(e)
    })?;
    Ok(Json(assembler::category_list(&categories)))
}

pub async fn get_by_code(
    State(state): State<AppState>,
    code: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<CategoryView>> {
    let Path(code) = code.map_err(|e| {
        tracing::warn!(error = %e, "undecodable category code");
        CatalogError::NotFound(CATEGORY_NOT_FOUND.into())
    })?;
    match state.categories.find_by_code(&code).await {
        Ok(Some(category)) => Ok(Json(CategoryView::from(&category))),
        Ok(None) => Err(CatalogError::NotFound(CATEGORY_NOT_FOUND.into())),
        Err(e) => {
            tracing::warn!(error = %e, %code, "category lookup failed");
            Err(CatalogError::NotFound(CATEGORY_NOT_FOUND.into()))
        }
    }
}

impl CreateCategoryRequest {
    /// Decodes the first JSON value of `body`; anything after it is ignored.
    /// A `null` body decodes to an empty request.
    pub fn decode(body: &[u8]) -> Result<Self> {
        match serde_json::Deserializer::from_slice(body).into_iter::<serde_json::Value>().next() {
            Some(Ok(serde_json::Value::Null)) => Ok(Self::default()),
            Some(Ok(value @ serde_json::Value::Object(_))) => {
                serde_json::from_value(value).map_err(|_| CatalogError::InvalidBody)
            }
            _ => Err(CatalogError::InvalidBody),
        }
    }
}

/// The body is decoded by hand so malformed JSON gets its own envelope.
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Json<CategoryView>> {
    let req = CreateCategoryRequest::decode(&body)?;
    req.validate()
        .map_err(|_| CatalogError::Validation("Code and name are required".into()))?;

    let created = state
        .categories
        .create(&Category::new(req.code, req.name))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "creating category failed");
            CatalogError::from(e)
        })?;
    Ok(Json(CategoryView::from(&created)))
}
