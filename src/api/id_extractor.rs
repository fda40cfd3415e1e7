use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::api::error::ApiError;
use crate::model::{is_valid_id, Id};

pub const PRODUCTS_PATH: &str = "/api/products";

/// The `{id}` segment of `/api/products/{id}`.
///
/// Read from the raw request path, so percent-encoded ids are not decoded and
/// fail validation. An invalid id is answered as an unknown route.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductId(pub Id);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        id_from_path(parts.uri.path())
            .map(|id| ProductId(id.to_string()))
            .ok_or(ApiError::RouteNotFound)
    }
}

/// Extract a valid product id from a `/api/products/{id}` path
pub fn id_from_path(path: &str) -> Option<&str> {
    path.strip_prefix(PRODUCTS_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|id| is_valid_id(id))
}
