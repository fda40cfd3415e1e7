use crate::error::StoreResult;
use crate::model::Product;

/// Whole-collection persistence for products.
///
/// Implementations always load and save the complete collection; there are no
/// partial reads or writes. Nothing guards a load/modify/save cycle, so two
/// overlapping writers can overwrite each other's changes.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// Load every stored product
    async fn load_all(&self) -> StoreResult<Vec<Product>>;
    /// Replace the stored collection with `products`
    async fn save_all(&self, products: &[Product]) -> StoreResult<()>;
}
