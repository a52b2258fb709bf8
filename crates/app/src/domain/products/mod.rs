//! Products

pub mod errors;
mod memory;
mod repository;
pub mod service;

pub use catalog::products::{NewProduct, Product, ProductError, ProductUpdate, ProductUuid};
pub use errors::ProductsServiceError;
pub use memory::InMemoryProductsService;
pub use service::*;
