use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{StoreError, StoreResult};
use crate::model::{generate_id, Product};
use crate::store::traits::ProductStore;

/// Stores the product collection as a JSON array in a single file.
///
/// Every save rewrites the whole collection into a temp file next to the
/// target and renames it into place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file holding an empty collection if it does not exist yet
    pub async fn ensure_exists(&self) -> StoreResult<bool> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|source| self.read_error(source))?;
        if exists {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }
        self.save_all(&[]).await?;
        log::info!("Created empty products file at {}", self.path.display());
        Ok(true)
    }

    /// Unique per save so concurrent saves never share a staging file
    fn staging_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "products.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, generate_id()))
    }

    fn read_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait::async_trait]
impl ProductStore for JsonFileStore {
    async fn load_all(&self) -> StoreResult<Vec<Product>> {
        let raw = fs::read(&self.path)
            .await
            .map_err(|source| self.read_error(source))?;
        serde_json::from_slice(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes a sibling temp file and renames it over the target, so readers
    /// and overlapping saves only ever see a complete collection.
    async fn save_all(&self, products: &[Product]) -> StoreResult<()> {
        let encoded = serde_json::to_vec(products).map_err(StoreError::Encode)?;

        let staging = self.staging_path();
        if let Err(source) = fs::write(&staging, encoded).await {
            let _ = fs::remove_file(&staging).await;
            return Err(self.write_error(source));
        }
        if let Err(source) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(self.write_error(source));
        }
        Ok(())
    }
}
