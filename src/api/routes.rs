use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};

use crate::api::handlers::{self, AppState};
use crate::api::middleware::log_requests;
use crate::store::traits::ProductStore;

fn collection_routes<S: ProductStore + 'static>() -> MethodRouter<AppState<S>> {
    get(handlers::list_products::<S>)
        .post(handlers::create_product::<S>)
        .fallback(handlers::route_not_found)
}

/// Unknown methods on a known path get the same 404 as an unknown path
pub fn create_router<S: ProductStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route("/api/products", collection_routes::<S>())
        .route("/api/products/", collection_routes::<S>())
        .route(
            "/api/products/:id",
            get(handlers::get_product::<S>)
                .put(handlers::update_product::<S>)
                .delete(handlers::remove_product::<S>)
                .fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn(log_requests))
}
