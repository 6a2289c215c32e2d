//! HTTP surface of the catalog service.

pub mod assembler;
pub mod catalog;
pub mod categories;
pub mod response;

use axum::{routing::get, Json, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::repository::postgres::{PgCategoriesRepository, PgProductsRepository};
use crate::repository::{CategoriesRepository, ProductsRepository};
use response::method_not_allowed;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductsRepository>,
    pub categories: Arc<dyn CategoriesRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductsRepository>, categories: Arc<dyn CategoriesRepository>) -> Self {
        Self { products, categories }
    }

    pub fn postgres(db: PgPool) -> Self {
        Self::new(Arc::new(PgProductsRepository::new(db.clone())), Arc::new(PgCategoriesRepository::new(db)))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "catalog-service"})) }))
        .route("/catalog", get(catalog::list).fallback(method_not_allowed))
        .route("/catalog/:code", get(catalog::get_by_code).fallback(method_not_allowed))
        .route("/categories", get(categories::list).post(categories::create).fallback(method_not_allowed))
        .route("/categories/:code", get(categories::get_by_code).fallback(method_not_allowed))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()))
        .with_state(state)
}
