use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_filter::FilterCatalog;

use crate::shared::catalog;

#[derive(Debug, thiserror::Error)]
pub enum FiltersError {
    #[error("filter catalog is not loaded")]
    CatalogNotLoaded,
}

impl IntoResponse for FiltersError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        match self {
            FiltersError::CatalogNotLoaded => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string()).into_response()
            }
        }
    }
}

/// GET /api/filters
pub async fn get_catalog() -> Result<Json<FilterCatalog>, FiltersError> {
    catalog::get_catalog()
        .cloned()
        .map(Json)
        .ok_or(FiltersError::CatalogNotLoaded)
}
