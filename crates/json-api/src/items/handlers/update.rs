//! Update Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use catalog::ProductUpdate;

use crate::{
    extensions::*,
    items::{
        errors::into_status_error,
        models::{ItemResponse, UpdateItemRequest},
    },
    state::State,
};

/// Update Item Handler
///
/// Fields missing from the body keep their stored value.
#[endpoint(
    tags("items"),
    summary = "Update Item",
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "items.update",
    skip(id, json, depot),
    fields(
        product_uuid = tracing::field::Empty,
        name_changed = tracing::field::Empty,
        price_changed = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<UpdateItemRequest>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();
    let update = ProductUpdate::try_from(json.into_inner()).or_400()?;

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(id));
    span.record("name_changed", update.name.is_some());
    span.record("price_changed", update.price.is_some());

    let updated = state
        .products
        .update_product(id.into(), update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %id, "updated item");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog::ProductUuid;
    use catalog_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{items_service, make_product};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        items_service(repo, Router::with_path("items/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_item_price_only() -> TestResult {
        let uuid = ProductUuid::new();

        let mut product = make_product(uuid);

        product.price = Decimal::from(25);

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |id, update| {
                *id == uuid
                    && *update
                        == ProductUpdate {
                            name: None,
                            price: Some(Decimal::from(25)),
                        }
            })
            .return_once(move |_, _| Ok(product));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_list_products().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::put(format!("http://example.com/items/{uuid}"))
            .json(&json!({ "price": 25 }))
            .send(&make_service(repo))
            .await;

        let body: ItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Pen");
        assert_eq!(body.price, Decimal::from(25));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_empty_body_object_is_accepted() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(|_, update| update.is_empty())
            .return_once(move |_, _| Ok(product));

        let res = TestClient::put(format!("http://example.com/items/{uuid}"))
            .json(&json!({}))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_invalid_uuid_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let res = TestClient::put("http://example.com/items/123")
            .json(&json!({ "price": 25 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_negative_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let res = TestClient::put(format!("http://example.com/items/{}", ProductUuid::new()))
            .json(&json!({ "price": -3 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_not_found_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/items/{}", ProductUuid::new()))
            .json(&json!({ "name": "Boot" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
