//! In-memory products store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::products::{
    NewProduct, Product, ProductUpdate, ProductUuid, ProductsService, ProductsServiceError,
};

/// Process-local products store.
///
/// Keeps products in insertion order. Every operation holds the lock for its whole
/// duration, so each one is atomic with respect to the others. Nothing survives a
/// restart.
#[derive(Debug, Default)]
pub struct InMemoryProductsService {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        self.products
            .read()
            .await
            .iter()
            .find(|stored| stored.uuid == product)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        product.validate()?;

        let created = Product::from_new(ProductUuid::new(), product);

        let mut products = self.products.write().await;

        if products.iter().any(|stored| stored.uuid == created.uuid) {
            return Err(ProductsServiceError::AlreadyExists);
        }

        products.push(created.clone());

        debug!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        update.validate()?;

        let mut products = self.products.write().await;

        let stored = products
            .iter_mut()
            .find(|stored| stored.uuid == product)
            .ok_or(ProductsServiceError::NotFound)?;

        update.apply(stored);

        Ok(stored.clone())
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut products = self.products.write().await;

        let position = products
            .iter()
            .position(|stored| stored.uuid == product)
            .ok_or(ProductsServiceError::NotFound)?;

        let deleted = products.remove(position);

        debug!(product_uuid = %deleted.uuid, "deleted product");

        Ok(deleted)
    }
}
