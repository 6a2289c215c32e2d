#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use catalog_service::api::{router, AppState};
use catalog_service::domain::{Category, Product};
use catalog_service::repository::{
    CatalogQuery, CategoriesRepository, ProductPage, ProductsRepository, RepositoryError,
};

/// Canned product store that records every query it receives.
#[derive(Default)]
pub struct FakeProducts {
    pub page: ProductPage,
    pub by_code: Vec<Product>,
    pub fail: bool,
    pub queries: Mutex<Vec<CatalogQuery>>,
}

#[async_trait]
impl ProductsRepository for FakeProducts {
    async fn find_by_filter(&self, query: &CatalogQuery) -> Result<ProductPage, RepositoryError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail {
            return Err(RepositoryError::QueryFailed("connection refused".into()));
        }
        Ok(self.page.clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::QueryFailed("connection refused".into()));
        }
        Ok(self.by_code.iter().find(|p| p.code == code).cloned())
    }
}

#[derive(Default)]
pub struct FakeCategories {
    pub stored: Mutex<Vec<Category>>,
    pub fail: bool,
}

impl FakeCategories {
    pub fn with(categories: Vec<Category>) -> Self {
        Self { stored: Mutex::new(categories), fail: false }
    }
}

#[async_trait]
impl CategoriesRepository for FakeCategories {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::QueryFailed("connection refused".into()));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self.stored.lock().unwrap().iter().find(|c| c.code == code).cloned())
    }

    async fn create(&self, category: &Category) -> Result<Category, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::QueryFailed("duplicate key value".into()));
        }
        self.stored.lock().unwrap().push(category.clone());
        Ok(category.clone())
    }
}

pub fn app(products: Arc<FakeProducts>, categories: Arc<FakeCategories>) -> Router {
    router(AppState::new(products, categories))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse { status, content_type, body: String::from_utf8(bytes.to_vec()).unwrap() }
}
