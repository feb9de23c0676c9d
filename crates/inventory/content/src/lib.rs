//! Data-driven kitchen content and its loaders.
//!
//! This crate reads static content from data files:
//! - Item catalogs (data-driven via RON)
//! - Container sizing (data-driven via TOML)
//!
//! All loaders deserialize inventory-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalogFile, ItemLoader, LoadResult};
