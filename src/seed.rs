use anyhow::Result;

use crate::model::NewProduct;
use crate::repository::ProductRepository;
use crate::store::traits::ProductStore;

fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new(
            Some("Wireless Headphones".to_string()),
            Some("Over-ear bluetooth headphones with noise cancelling".to_string()),
            89.99,
        ),
        NewProduct::new(
            Some("Mechanical Keyboard".to_string()),
            Some("Tenkeyless keyboard with brown switches".to_string()),
            74.5,
        ),
        NewProduct::new(
            Some("USB-C Cable".to_string()),
            Some("Braided two metre charging cable".to_string()),
            9.95,
        ),
    ]
}

/// Fill an empty collection with a few sample products.
/// Returns how many products were created.
pub async fn load_seed_data<S: ProductStore>(repository: &ProductRepository<S>) -> Result<usize> {
    if !repository.find_all().await?.is_empty() {
        log::info!("Products already present, skipping seed data");
        return Ok(0);
    }

    let mut created = 0;
    for product in sample_products() {
        let product = repository.create(product).await?;
        log::debug!("Seeded product {}", product.id);
        created += 1;
    }
    Ok(created)
}
