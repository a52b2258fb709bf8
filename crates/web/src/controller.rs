//! Headless catalog controller.

use leptos::prelude::*;
use tracing::warn;

use catalog::{Product, ProductUpdate, ProductUuid};

use crate::{api::ItemsApi, errors::ClientError, state::CatalogState};

/// Drives [`CatalogState`] through an [`ItemsApi`].
///
/// Every mutation is followed by a full reload; the list is never patched
/// locally. Failures are returned to the caller and also recorded in the
/// state for the error banner.
#[derive(Debug)]
pub struct Catalog<A> {
    api: A,
    state: RwSignal<CatalogState>,
}

impl<A: ItemsApi> Catalog<A> {
    /// Controller with an empty list and draft.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwSignal::new(CatalogState::default()),
        }
    }

    /// Reactive handle on the view state.
    pub fn state(&self) -> RwSignal<CatalogState> {
        self.state
    }

    /// Fetch the full list and replace the local copy.
    ///
    /// # Errors
    ///
    /// Returns the API failure; the previous list stays in place.
    pub async fn load(&self) -> Result<(), ClientError> {
        let ticket = self
            .state
            .try_update(CatalogState::begin_load)
            .ok_or(ClientError::Disposed)?;

        match self.api.list().await {
            Ok(products) => {
                self.state
                    .try_update(|state| state.finish_load(ticket, products));

                Ok(())
            }
            Err(source) => {
                let error = ClientError::from(source);

                warn!("failed to load products: {error}");

                self.state.try_update(|state| state.fail_load(ticket, &error));

                Err(error)
            }
        }
    }

    /// Create a product from the draft, clear the draft and reload.
    ///
    /// # Errors
    ///
    /// Draft errors are returned before any request is made and leave the
    /// draft as it was, as does a failed create.
    pub async fn add(&self) -> Result<Product, ClientError> {
        let new_product = self
            .state
            .try_with_untracked(|state| state.draft().to_new_product())
            .ok_or(ClientError::Disposed)?
            .map_err(|error| self.fail("cannot add product", error))?;

        let created = self
            .api
            .create(&new_product)
            .await
            .map_err(|source| self.fail("failed to add product", source.into()))?;

        self.state.try_update(|state| {
            state.clear_draft();
            state.clear_error();
        });

        self.load().await?;

        Ok(created)
    }

    /// Delete a product and reload.
    ///
    /// # Errors
    ///
    /// Returns the API failure without reloading.
    pub async fn remove(&self, id: ProductUuid) -> Result<Product, ClientError> {
        let removed = self
            .api
            .delete(id)
            .await
            .map_err(|source| self.fail("failed to delete product", source.into()))?;

        self.load().await?;

        Ok(removed)
    }

    /// Apply a partial update and reload.
    ///
    /// # Errors
    ///
    /// Returns the API failure without reloading.
    pub async fn update(
        &self,
        id: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ClientError> {
        let updated = self
            .api
            .update(id, &update)
            .await
            .map_err(|source| self.fail("failed to update product", source.into()))?;

        self.load().await?;

        Ok(updated)
    }

    fn fail(&self, context: &str, error: ClientError) -> ClientError {
        warn!("{context}: {error}");

        self.state.try_update(|state| state.record_error(&error));

        error
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use catalog::NewProduct;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::api::ApiError;

    use super::*;

    #[derive(Debug, Default)]
    struct FakeItemsApi {
        items: RefCell<Vec<Product>>,
        requests: Cell<usize>,
        fail_create: bool,
    }

    impl FakeItemsApi {
        fn count(&self) {
            self.requests.set(self.requests.get() + 1);
        }

        fn take(&self, id: ProductUuid) -> Result<Product, ApiError> {
            let mut items = self.items.borrow_mut();
            let position = items
                .iter()
                .position(|item| item.uuid == id)
                .ok_or(ApiError::NotFound)?;

            Ok(items.remove(position))
        }
    }

    impl ItemsApi for FakeItemsApi {
        async fn list(&self) -> Result<Vec<Product>, ApiError> {
            self.count();

            Ok(self.items.borrow().clone())
        }

        async fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
            self.count();

            if self.fail_create {
                return Err(ApiError::Status(500));
            }

            let created = Product::from_new(ProductUuid::new(), product.clone());

            self.items.borrow_mut().push(created.clone());

            Ok(created)
        }

        async fn update(
            &self,
            id: ProductUuid,
            update: &ProductUpdate,
        ) -> Result<Product, ApiError> {
            self.count();

            let mut items = self.items.borrow_mut();
            let item = items
                .iter_mut()
                .find(|item| item.uuid == id)
                .ok_or(ApiError::NotFound)?;

            update.apply(item);

            Ok(item.clone())
        }

        async fn delete(&self, id: ProductUuid) -> Result<Product, ApiError> {
            self.count();

            self.take(id)
        }
    }

    fn fill_draft(catalog: &Catalog<FakeItemsApi>, name: &str, price: &str) {
        catalog.state().update(|state| {
            let draft = state.draft_mut();

            draft.name = name.to_owned();
            draft.price = price.to_owned();
        });
    }

    #[tokio::test]
    async fn add_with_empty_field_issues_no_request() -> TestResult {
        let catalog = Catalog::new(FakeItemsApi::default());

        fill_draft(&catalog, "Pen", "");

        let result = catalog.add().await;

        assert!(
            matches!(result, Err(ClientError::IncompleteDraft)),
            "expected incomplete draft, got {result:?}"
        );
        assert_eq!(catalog.api.requests.get(), 0, "no request should be made");

        let state = catalog.state().get_untracked();

        assert_eq!(state.draft().name, "Pen", "draft must be untouched");
        assert!(state.error().is_some(), "error should be surfaced");

        Ok(())
    }

    #[tokio::test]
    async fn add_clears_draft_and_reloads() -> TestResult {
        let catalog = Catalog::new(FakeItemsApi::default());

        fill_draft(&catalog, "Shoe", "20");

        let created = catalog.add().await?;

        let state = catalog.state().get_untracked();

        assert_eq!(state.draft(), &crate::ProductDraft::default());
        assert_eq!(state.products(), [created.clone()]);
        assert_eq!(created.price, Decimal::from(20));
        assert_eq!(catalog.api.requests.get(), 2, "create then list");

        Ok(())
    }

    #[tokio::test]
    async fn failed_add_keeps_draft_and_reports_error() -> TestResult {
        let catalog = Catalog::new(FakeItemsApi {
            fail_create: true,
            ..FakeItemsApi::default()
        });

        fill_draft(&catalog, "Shoe", "20");

        let result = catalog.add().await;

        assert!(
            matches!(result, Err(ClientError::Api(ApiError::Status(500)))),
            "expected server error, got {result:?}"
        );

        let state = catalog.state().get_untracked();

        assert_eq!(state.draft().name, "Shoe");
        assert_eq!(state.draft().price, "20");
        assert_eq!(state.error(), Some("server responded with status 500"));

        Ok(())
    }

    #[tokio::test]
    async fn remove_reloads_without_the_item() -> TestResult {
        let catalog = Catalog::new(FakeItemsApi::default());

        fill_draft(&catalog, "Pen", "2");
        let pen = catalog.add().await?;

        fill_draft(&catalog, "Shoe", "20");
        let shoe = catalog.add().await?;

        catalog.remove(pen.uuid).await?;

        let state = catalog.state().get_untracked();

        assert_eq!(state.products(), [shoe]);

        Ok(())
    }

    #[tokio::test]
    async fn removing_missing_item_reports_not_found() -> TestResult {
        let catalog = Catalog::new(FakeItemsApi::default());

        let result = catalog.remove(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ClientError::Api(ApiError::NotFound))),
            "expected not found, got {result:?}"
        );
        assert_eq!(catalog.api.requests.get(), 1, "no reload after a failure");

        Ok(())
    }

    #[tokio::test]
    async fn update_reloads_with_new_values() -> TestResult {
        let catalog = Catalog::new(FakeItemsApi::default());

        fill_draft(&catalog, "Shoe", "20");
        let shoe = catalog.add().await?;

        catalog
            .update(shoe.uuid, ProductUpdate::new(None, Some(Decimal::from(25)))?)
            .await?;

        let state = catalog.state().get_untracked();
        let listed = state.products().first();

        assert_eq!(listed.map(|p| p.price), Some(Decimal::from(25)));
        assert_eq!(listed.map(|p| p.name.as_str()), Some("Shoe"));

        Ok(())
    }
}
