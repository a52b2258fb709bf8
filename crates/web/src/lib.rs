//! Catalog Web
//!
//! Browser client for the catalog JSON API: a typed HTTP client, the view state
//! it feeds and a headless controller that the Leptos UI drives.

pub mod api;
pub mod controller;
pub mod draft;
pub mod errors;
pub mod logging;
pub mod state;

pub use api::{ApiError, HttpItemsApi, ItemsApi};
pub use controller::Catalog;
pub use draft::ProductDraft;
pub use errors::ClientError;
pub use state::{CatalogState, LoadTicket};
