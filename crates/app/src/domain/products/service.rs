//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        NewProduct, Product, ProductUpdate, ProductUuid, errors::ProductsServiceError,
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let uuid = ProductUuid::new();
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_product(&mut tx, uuid, &product)
            .await?;

        tx.commit().await?;

        debug!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let deleted = self.repository.delete_product(&mut tx, product).await?;

        tx.commit().await?;

        debug!(product_uuid = %deleted.uuid, "deleted product");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in insertion order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Stores a new product under a freshly assigned id and returns it.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replaces the supplied fields of a product and returns the result.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Removes a product and returns what was removed.
    async fn delete_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, contract};

    #[tokio::test]
    async fn postgres_create_then_list_round_trips() -> TestResult {
        let ctx = TestContext::new().await;

        contract::create_then_list_round_trips(&ctx.products).await
    }

    #[tokio::test]
    async fn postgres_update_changes_only_supplied_fields() -> TestResult {
        let ctx = TestContext::new().await;

        contract::update_changes_only_supplied_fields(&ctx.products).await
    }

    #[tokio::test]
    async fn postgres_unknown_ids_return_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        contract::unknown_ids_return_not_found(&ctx.products).await
    }

    #[tokio::test]
    async fn postgres_delete_twice_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        contract::delete_twice_returns_not_found(&ctx.products).await
    }

    #[tokio::test]
    async fn postgres_pen_scenario_leaves_store_empty() -> TestResult {
        let ctx = TestContext::new().await;

        contract::pen_scenario_leaves_store_empty(&ctx.products).await
    }

    #[tokio::test]
    async fn postgres_list_keeps_insertion_order() -> TestResult {
        let ctx = TestContext::new().await;

        contract::list_keeps_insertion_order(&ctx.products).await
    }

    #[tokio::test]
    async fn postgres_check_constraints_reject_invalid_rows() -> TestResult {
        let ctx = TestContext::new().await;

        contract::invalid_payloads_are_rejected(&ctx.products).await
    }
}
