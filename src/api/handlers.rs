use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, MessageResponse};
use crate::api::id_extractor::ProductId;
use crate::api::payload::ProductPayload;
use crate::model::Product;
use crate::repository::ProductRepository;
use crate::store::traits::ProductStore;

pub type AppState<S> = Arc<ProductRepository<S>>;

// GET /api/products
pub async fn list_products<S: ProductStore>(
    State(repository): State<AppState<S>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = repository
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Error when fetching products", e))?;
    Ok(Json(products))
}

// GET /api/products/:id
pub async fn get_product<S: ProductStore>(
    State(repository): State<AppState<S>>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, ApiError> {
    match repository.find_by_id(&id).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err(ApiError::NotFound("Product Not Found")),
        Err(e) => Err(ApiError::internal("Error when fetching product", e)),
    }
}

// POST /api/products
pub async fn create_product<S: ProductStore>(
    State(repository): State<AppState<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    const CONTEXT: &str = "Error when creating product";

    let body = body.map_err(|e| ApiError::internal(CONTEXT, e))?;
    let new_product = ProductPayload::parse(&body, CONTEXT)?.into_new_product()?;
    let product = repository
        .create(new_product)
        .await
        .map_err(|e| ApiError::internal(CONTEXT, e))?;

    log::info!("Created product {}", product.id);
    Ok((StatusCode::CREATED, Json(product)))
}

// PUT /api/products/:id
pub async fn update_product<S: ProductStore>(
    State(repository): State<AppState<S>>,
    ProductId(id): ProductId,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Product>, ApiError> {
    const CONTEXT: &str = "Error when updating product";

    let body = body.map_err(|e| ApiError::internal(CONTEXT, e))?;
    let changes = ProductPayload::parse(&body, CONTEXT)?.into_changes()?;
    match repository.update(&id, changes).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err(ApiError::NotFound("Product not found")),
        Err(e) => Err(ApiError::internal(CONTEXT, e)),
    }
}

// DELETE /api/products/:id
pub async fn remove_product<S: ProductStore>(
    State(repository): State<AppState<S>>,
    ProductId(id): ProductId,
) -> Result<Json<MessageResponse>, ApiError> {
    match repository.remove(&id).await {
        Ok(true) => {
            log::info!("Removed product {}", id);
            Ok(Json(MessageResponse::new(format!(
                "Product {} successfully removed",
                id
            ))))
        }
        Ok(false) => Err(ApiError::NotFound("Product not found")),
        Err(e) => Err(ApiError::internal("Error when deleting product", e)),
    }
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
