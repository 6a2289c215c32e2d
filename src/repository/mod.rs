//! Storage capabilities consumed by the HTTP layer.
//!
//! Handlers only see these traits; the concrete adapter (see [`postgres`]) is
//! injected into [`crate::api::AppState`] at startup.

pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Category, Pagination, Price, Product};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{0}")]
    QueryFailed(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        Self::QueryFailed(e.to_string())
    }
}

/// Filtered, paginated product query. Filters are conjunctive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogQuery {
    pub pagination: Pagination,
    pub category_id: Option<i64>,
    /// Strict upper bound: only products with `price < price_less_than`.
    pub price_less_than: Option<Price>,
}

impl CatalogQuery {
    pub fn new(pagination: Pagination) -> Self {
        Self { pagination, ..Default::default() }
    }

    pub fn in_category(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn cheaper_than(mut self, ceiling: Option<Price>) -> Self {
        self.price_less_than = ceiling;
        self
    }
}

/// One page of products plus the size of the whole filtered set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: i64,
}

#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn find_by_filter(&self, query: &CatalogQuery) -> Result<ProductPage, RepositoryError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, RepositoryError>;
}

#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Category>, RepositoryError>;
    async fn create(&self, category: &Category) -> Result<Category, RepositoryError>;
}
