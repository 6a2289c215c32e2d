//! Catalog Service
//!
//! Read/write catalog of products, their variants and categories over HTTP/JSON.
//!
//! ## Features
//! - Paginated product listing with category and price-ceiling filters
//! - Product detail lookup with variant price inheritance
//! - Category listing, lookup and creation
//! - PostgreSQL persistence behind repository traits

pub mod api;
pub mod config;
pub mod domain;
pub mod repository;

use axum::http::StatusCode;
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Storage(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl CatalogError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<repository::RepositoryError> for CatalogError {
    fn from(e: repository::RepositoryError) -> Self {
        Self::Storage(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
