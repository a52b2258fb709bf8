//! Catalog
//!
//! Shared product-catalog domain types used by the store, the JSON API and the web client.

pub mod price;
pub mod products;
pub mod uuids;

pub use products::{NewProduct, Product, ProductError, ProductUpdate, ProductUuid};
