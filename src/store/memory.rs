use parking_lot::RwLock;

use crate::error::StoreResult;
use crate::model::Product;
use crate::store::traits::ProductStore;

/// Keeps the collection in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Current contents, read without going through the trait
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.read().clone()
    }
}

#[async_trait::async_trait]
impl ProductStore for MemoryStore {
    async fn load_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.read().clone())
    }

    async fn save_all(&self, products: &[Product]) -> StoreResult<()> {
        *self.products.write() = products.to_vec();
        Ok(())
    }
}
