use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use voicecart_agent::{runtime::AssistantRuntime, AgentError};
use voicecart_core::catalog::{CatalogSource, JsonFileCatalog};
use voicecart_core::config::{AppConfig, ConfigError, LoadOptions};

pub struct Application {
    pub config: AppConfig,
    pub catalog: Arc<dyn CatalogSource>,
    pub runtime: Arc<AssistantRuntime>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("assistant runtime initialization failed: {0}")]
    Agent(#[from] AgentError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        catalog_path = %config.catalog.path.display(),
        "starting application bootstrap"
    );

    let catalog: Arc<dyn CatalogSource> = Arc::new(JsonFileCatalog::new(&config.catalog.path));

    // The catalog is re-read per request, so a missing file only degrades health.
    match catalog.load().await {
        Ok(products) => info!(
            event_name = "system.bootstrap.catalog_loaded",
            correlation_id = "bootstrap",
            product_count = products.len(),
            "catalog readable at startup"
        ),
        Err(error) => warn!(
            event_name = "system.bootstrap.catalog_unavailable",
            correlation_id = "bootstrap",
            error = %error,
            "catalog not readable at startup"
        ),
    }

    let runtime = AssistantRuntime::new(catalog.clone())?
        .with_suggestion_limit(config.assistant.suggestion_limit);

    Ok(Application { config, catalog, runtime: Arc::new(runtime) })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use voicecart_core::config::{ConfigOverrides, LoadOptions};

    use crate::bootstrap::{bootstrap, BootstrapError};

    fn options_for(catalog_path: &std::path::Path) -> LoadOptions {
        LoadOptions {
            overrides: ConfigOverrides {
                catalog_path: Some(catalog_path.to_path_buf()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        }
    }

    #[tokio::test]
    async fn bootstrap_wires_catalog_into_runtime() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("products.json");
        fs::write(&path, r#"[{"id":1,"title":"Red Apple","price":1.5}]"#).expect("write");

        let app = bootstrap(options_for(&path)).await.expect("bootstrap");
        assert_eq!(app.config.catalog.path, path);
        assert_eq!(app.runtime.products().await.expect("products").len(), 1);
    }

    #[tokio::test]
    async fn bootstrap_tolerates_missing_catalog() {
        let dir = TempDir::new().expect("tempdir");
        let app = bootstrap(options_for(&dir.path().join("absent.json"))).await.expect("bootstrap");
        assert!(app.catalog.load().await.is_err());
        assert!(app.runtime.cart_view().await.cart.is_empty());
    }

    #[tokio::test]
    async fn bootstrap_fails_fast_on_missing_explicit_config() {
        let dir = TempDir::new().expect("tempdir");
        let result = bootstrap(LoadOptions {
            config_path: Some(dir.path().join("voicecart.toml")),
            require_file: true,
            ..LoadOptions::default()
        })
        .await;

        assert!(matches!(result, Err(BootstrapError::Config(_))));
    }
}
