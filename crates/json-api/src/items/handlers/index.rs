//! List Items Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    items::{errors::into_status_error, models::ItemResponse},
    state::State,
};

/// List Items Handler
///
/// Returns every stored item in insertion order.
#[endpoint(
    tags("items"),
    summary = "List Items",
    responses(
        (status_code = StatusCode::OK, description = "All items"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .products
        .list_products()
        .await
        .map_err(into_status_error)?
        .into_iter()
        .map(ItemResponse::from)
        .collect();

    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog::ProductUuid;
    use catalog_app::domain::products::MockProductsService;

    use crate::test_helpers::{items_service, make_product};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        items_service(repo, Router::with_path("items").get(handler))
    }

    #[tokio::test]
    async fn test_list_items_returns_json_array() -> TestResult {
        let first = make_product(ProductUuid::new());
        let mut second = make_product(ProductUuid::new());

        second.name = "Shoe".to_owned();

        let expected: Vec<ItemResponse> = vec![first.clone().into(), second.clone().into()];

        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(move || Ok(vec![first, second]));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::get("http://example.com/items")
            .send(&make_service(repo))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, expected);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_empty_store_returns_empty_array() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/items")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "[]");

        Ok(())
    }
}
