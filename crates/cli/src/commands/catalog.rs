use serde_json::json;
use voicecart_core::catalog::{CatalogSource, JsonFileCatalog};
use voicecart_core::config::{AppConfig, LoadOptions};

use crate::commands::{block_on, CommandResult, EXIT_CATALOG_FAILURE, EXIT_CONFIG_FAILURE};

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "catalog",
                "config_validation",
                error.to_string(),
                EXIT_CONFIG_FAILURE,
            )
        }
    };

    let catalog = JsonFileCatalog::new(&config.catalog.path);
    let products = match block_on(catalog.load()) {
        Ok(Ok(products)) => products,
        Ok(Err(error)) => {
            return CommandResult::failure(
                "catalog",
                "catalog_unavailable",
                error.to_string(),
                EXIT_CATALOG_FAILURE,
            )
        }
        Err(error) => {
            return CommandResult::failure(
                "catalog",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                EXIT_CATALOG_FAILURE,
            )
        }
    };

    CommandResult::success_with_data(
        "catalog",
        format!("loaded {} products from `{}`", products.len(), catalog.path().display()),
        Some(json!({ "products": products })),
    )
}
