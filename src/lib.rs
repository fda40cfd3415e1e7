pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod seed;
pub mod store;

pub use api::routes;
pub use crate::config::AppConfig;
pub use error::{StoreError, StoreResult};
pub use model::*;
pub use repository::ProductRepository;
pub use store::{JsonFileStore, MemoryStore, ProductStore};

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

/// Build the application router over `store`
pub fn build_app<S: ProductStore + 'static>(store: S) -> Router {
    let repository = Arc::new(ProductRepository::new(store));
    api::routes::create_router().with_state(repository)
}

/// Serve the API on an already bound listener until the server stops
pub async fn serve<S: ProductStore + 'static>(listener: TcpListener, store: S) -> anyhow::Result<()> {
    axum::serve(listener, build_app(store)).await?;
    Ok(())
}

pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&config.storage.data_file);
    store.ensure_exists().await?;
    log::info!("Using products file {}", store.path().display());

    // Load seed data for demonstration (optional)
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        let repository = ProductRepository::new(store.clone());
        let created = seed::load_seed_data(&repository).await?;
        log::info!("Seeded {} products", created);
    }

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Server running on port {}", config.server.port);

    serve(listener, store).await
}
