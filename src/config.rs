use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the product collection
    pub data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/products.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and the environment.
    ///
    /// Variables prefixed with `PRODUCTS_` use `__` between nested keys
    /// (`PRODUCTS_STORAGE__DATA_FILE`). A bare `PORT` wins over everything else.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with_port(std::env::var("PORT").ok())
    }

    fn load_with_port(port: Option<String>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        config = config.add_source(
            config::Environment::with_prefix("PRODUCTS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        config = config.set_override_option("server.port", port)?;

        let app_config: AppConfig = config.build()?.try_deserialize()?;
        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.storage.data_file, PathBuf::from("data/products.json"));
    }

    #[test]
    fn test_port_override() {
        let config = AppConfig::load_with_port(Some("8081".to_string())).unwrap();
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(AppConfig::load_with_port(Some("not-a-port".to_string())).is_err());
    }
}
