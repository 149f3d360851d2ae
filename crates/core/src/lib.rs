pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod matching;

pub use catalog::{CatalogError, CatalogSource, JsonFileCatalog, StaticCatalog};
pub use domain::cart::{Cart, CartLine, CartView};
pub use domain::product::{Product, ProductId};
pub use errors::{ApplicationError, DomainError, InterfaceError};
