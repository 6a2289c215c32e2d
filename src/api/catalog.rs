//! Catalog endpoints: `GET /catalog` and `GET /catalog/{code}`.

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};

use super::assembler::{self, CatalogPage, ProductDetail};
use super::AppState;
use crate::domain::{Pagination, Price};
use crate::repository::CatalogQuery;
use crate::{CatalogError, Result};

const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Raw listing parameters, kept as text so malformed values degrade to defaults
/// instead of rejecting the request.
#[derive(Debug, Default)]
pub struct CatalogParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    pub price_less_than: Option<String>,
}

impl CatalogParams {
    /// Builds the parameters from decoded query pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "offset" => &mut params.offset,
                "limit" => &mut params.limit,
                "category" => &mut params.category,
                "price_less_than" => &mut params.price_less_than,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn normalize(&self) -> CatalogQuery {
        let pagination = Pagination::from_params(self.offset.as_deref(), self.limit.as_deref());
        let category_id = self.category.as_deref().and_then(|s| s.parse::<u32>().ok()).map(i64::from);
        let ceiling = self.price_less_than.as_deref().and_then(Price::parse);
        CatalogQuery::new(pagination).in_category(category_id).cheaper_than(ceiling)
    }
}

pub async fn list(State(state): State<AppState>, Query(pairs): Query<Vec<(String, String)>>) -> Result<Json<CatalogPage>> {
    let query = CatalogParams::from_pairs(pairs).normalize();
    let page = state.products.find_by_filter(&query).await.map_err(|e| {
        tracing::error!(error = %e, ?query, "catalog query failed");
        CatalogError::from(e)
    })?;
    Ok(Json(assembler::catalog_page(&page.products, page.total)))
}

pub async fn get_by_code(
    State(state): State<AppState>,
    code: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<ProductDetail>> {
    let Path(code) = code.map_err(|e| {
        tracing::warn!(error = %e, "undecodable product code");
        CatalogError::NotFound(PRODUCT_NOT_FOUND.into())
    })?;
    match state.products.find_by_code(&code).await {
        Ok(Some(product)) => Ok(Json(assembler::detail(&product))),
        Ok(None) => Err(CatalogError::NotFound(PRODUCT_NOT_FOUND.into())),
        Err(e) => {
            // Lookup failures are reported to the client as not found.
            tracing::warn!(error = %e, %code, "product lookup failed");
            Err(CatalogError::NotFound(PRODUCT_NOT_FOUND.into()))
        }
    }
}
