//! JSON envelopes

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::CatalogError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Fallback for unsupported methods on known routes.
pub async fn method_not_allowed() -> CatalogError {
    CatalogError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};

    #[test]
    fn test_error_envelope() {
        let res = CatalogError::NotFound("Product not found".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
    }
}
