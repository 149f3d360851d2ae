use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::product::{Product, ProductId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("catalog product `{id}` has a negative price")]
    InvalidPrice { id: ProductId },
}

/// Source of the full product list. Implementations are read on every request
/// and must not cache.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>, CatalogError>;
}

#[derive(Clone, Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Read { path: self.path.clone(), source })?;
        let products = serde_json::from_slice::<Vec<Product>>(&raw)
            .map_err(|source| CatalogError::Parse { path: self.path.clone(), source })?;
        validate_products(products)
    }
}

#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        validate_products(self.products.clone())
    }
}

fn validate_products(products: Vec<Product>) -> Result<Vec<Product>, CatalogError> {
    if let Some(product) = products.iter().find(|product| product.price < Decimal::ZERO) {
        return Err(CatalogError::InvalidPrice { id: product.id.clone() });
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal::Decimal;
    use tempfile::TempDir;

    use super::{CatalogError, CatalogSource, JsonFileCatalog, StaticCatalog};
    use crate::domain::product::{Product, ProductId};

    #[tokio::test]
    async fn loads_products_from_json_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("products.json");
        fs::write(&path, r#"[{"id":1,"title":"Red Apple","price":1.5}]"#).expect("write");

        let products = JsonFileCatalog::new(&path).load().await.expect("load");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Red Apple");
        assert_eq!(products[0].price, Decimal::new(15, 1));
    }

    #[tokio::test]
    async fn rereads_file_on_every_load() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("products.json");
        fs::write(&path, "[]").expect("write");
        let catalog = JsonFileCatalog::new(&path);
        assert!(catalog.load().await.expect("first load").is_empty());

        fs::write(&path, r#"[{"id":"m1","title":"Milk","price":0.99}]"#).expect("rewrite");
        let products = catalog.load().await.expect("second load");
        assert_eq!(products[0].id, ProductId::Text("m1".to_string()));
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = TempDir::new().expect("tempdir");
        let error = JsonFileCatalog::new(dir.path().join("absent.json"))
            .load()
            .await
            .expect_err("missing catalog");
        assert!(matches!(error, CatalogError::Read { .. }));
        assert!(error.to_string().contains("absent.json"));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_parse_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("products.json");
        fs::write(&path, "{not json").expect("write");

        let error = JsonFileCatalog::new(&path).load().await.expect_err("corrupt catalog");
        assert!(matches!(error, CatalogError::Parse { .. }));
    }

    #[tokio::test]
    async fn negative_prices_are_rejected() {
        let catalog = StaticCatalog::new(vec![Product {
            id: ProductId::Numeric(7),
            title: "Refund".to_string(),
            price: Decimal::new(-100, 2),
        }]);
        let error = catalog.load().await.expect_err("negative price");
        assert!(matches!(error, CatalogError::InvalidPrice { id: ProductId::Numeric(7) }));
    }
}
