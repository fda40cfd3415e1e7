use crate::error::StoreResult;
use crate::model::{NewProduct, Product, ProductChanges};
use crate::store::traits::ProductStore;

/// CRUD operations over a [`ProductStore`].
///
/// Every call loads the full collection first and every mutation saves the
/// full collection afterwards; nothing is cached between calls. A missing
/// product is reported as `None`/`false`, errors are reserved for storage
/// failures.
#[derive(Debug)]
pub struct ProductRepository<S> {
    store: S,
}

impl<S: ProductStore> ProductRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Product>> {
        self.store.load_all().await
    }

    pub async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let products = self.store.load_all().await?;
        Ok(products.into_iter().find(|product| product.id == id))
    }

    pub async fn create(&self, new_product: NewProduct) -> StoreResult<Product> {
        let mut products = self.store.load_all().await?;
        let product = new_product.into_product();
        products.push(product.clone());
        self.store.save_all(&products).await?;

        log::debug!("Created product {}", product.id);
        Ok(product)
    }

    pub async fn update(&self, id: &str, changes: ProductChanges) -> StoreResult<Option<Product>> {
        let mut products = self.store.load_all().await?;
        let Some(index) = products.iter().position(|product| product.id == id) else {
            return Ok(None);
        };

        let updated = changes.merge_into(products[index].clone());
        products[index] = updated.clone();
        self.store.save_all(&products).await?;

        log::debug!("Updated product {}", id);
        Ok(Some(updated))
    }

    /// Returns `false` when there was nothing to remove
    pub async fn remove(&self, id: &str) -> StoreResult<bool> {
        let products = self.store.load_all().await?;
        let before = products.len();
        let remaining: Vec<Product> = products
            .into_iter()
            .filter(|product| product.id != id)
            .collect();

        if remaining.len() == before {
            return Ok(false);
        }

        self.store.save_all(&remaining).await?;
        log::debug!("Removed product {}", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Barrier;

    fn pen() -> NewProduct {
        NewProduct::new(
            Some("Pen".to_string()),
            Some("Blue pen".to_string()),
            1.5,
        )
    }

    /// Counts saves so tests can assert that nothing was written
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        saves: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ProductStore for CountingStore {
        async fn load_all(&self) -> StoreResult<Vec<Product>> {
            self.inner.load_all().await
        }

        async fn save_all(&self, products: &[Product]) -> StoreResult<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save_all(products).await
        }
    }

    #[tokio::test]
    async fn test_create_then_find_round_trip() {
        let repo = ProductRepository::new(MemoryStore::new());

        let created = repo.create(pen()).await.unwrap();
        let found = repo.find_by_id(&created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_all_is_idempotent() {
        let repo = ProductRepository::new(MemoryStore::new());
        repo.create(pen()).await.unwrap();
        repo.create(NewProduct::new(None, None, 3.0)).await.unwrap();

        let first = repo.find_all().await.unwrap();
        let second = repo.find_all().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_rapid_creates_get_unique_ids() {
        let repo = ProductRepository::new(MemoryStore::new());
        for _ in 0..200 {
            repo.create(pen()).await.unwrap();
        }

        let products = repo.find_all().await.unwrap();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(products.len(), 200);
        assert_eq!(ids.len(), 200);
    }

    #[tokio::test]
    async fn test_update_with_only_price_keeps_text_fields() {
        let repo = ProductRepository::new(MemoryStore::new());
        let created = repo.create(pen()).await.unwrap();

        let updated = repo
            .update(&created.id, ProductChanges::price(9.99))
            .await
            .unwrap()
            .expect("product exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title.as_deref(), Some("Pen"));
        assert_eq!(updated.description.as_deref(), Some("Blue pen"));
        assert_eq!(updated.price, 9.99);
        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_remove_drops_exactly_one_product() {
        let repo = ProductRepository::new(MemoryStore::new());
        let keep = repo.create(pen()).await.unwrap();
        let gone = repo.create(pen()).await.unwrap();

        assert!(repo.remove(&gone.id).await.unwrap());

        let remaining = repo.find_all().await.unwrap();
        assert_eq!(remaining, vec![keep]);
        assert_eq!(repo.find_by_id(&gone.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_id_never_writes() {
        let repo = ProductRepository::new(CountingStore::default());
        repo.create(pen()).await.unwrap();
        let saves_after_create = repo.store().saves.load(Ordering::SeqCst);

        assert_eq!(repo.find_by_id("nope").await.unwrap(), None);
        assert_eq!(
            repo.update("nope", ProductChanges::price(2.0)).await.unwrap(),
            None
        );
        assert!(!repo.remove("nope").await.unwrap());

        assert_eq!(repo.store().saves.load(Ordering::SeqCst), saves_after_create);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    struct BrokenStore;

    #[async_trait::async_trait]
    impl ProductStore for BrokenStore {
        async fn load_all(&self) -> StoreResult<Vec<Product>> {
            Err(StoreError::Read {
                path: "products.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        }

        async fn save_all(&self, _products: &[Product]) -> StoreResult<()> {
            unreachable!("nothing is saved when loading fails")
        }
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let repo = ProductRepository::new(BrokenStore);
        assert!(repo.find_all().await.is_err());
        assert!(repo.find_by_id("a").await.is_err());
        assert!(repo.create(pen()).await.is_err());
        assert!(repo.remove("a").await.is_err());
    }

    /// Holds each load until two loads are in flight
    struct SynchronizedLoads {
        inner: MemoryStore,
        barrier: Barrier,
    }

    #[async_trait::async_trait]
    impl ProductStore for SynchronizedLoads {
        async fn load_all(&self) -> StoreResult<Vec<Product>> {
            let products = self.inner.load_all().await;
            self.barrier.wait().await;
            products
        }

        async fn save_all(&self, products: &[Product]) -> StoreResult<()> {
            self.inner.save_all(products).await
        }
    }

    #[tokio::test]
    async fn test_overlapping_creates_lose_one_write() {
        // Both creates read the same empty collection before either saves,
        // so the second save overwrites the first.
        let repo = Arc::new(ProductRepository::new(SynchronizedLoads {
            inner: MemoryStore::new(),
            barrier: Barrier::new(2),
        }));

        let first = tokio::spawn({
            let repo = repo.clone();
            async move { repo.create(pen()).await }
        });
        let second = tokio::spawn({
            let repo = repo.clone();
            async move { repo.create(pen()).await }
        });

        let a = first.await.unwrap().unwrap();
        let b = second.await.unwrap().unwrap();
        assert_ne!(a.id, b.id);

        let stored = repo.store().inner.snapshot();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].id == a.id || stored[0].id == b.id);
    }
}
