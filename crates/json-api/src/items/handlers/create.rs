//! Create Item Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use catalog::NewProduct;

use crate::{
    extensions::*,
    items::{
        errors::into_status_error,
        models::{CreateItemRequest, ItemResponse},
    },
    state::State,
};

/// Create Item Handler
#[endpoint(
    tags("items"),
    summary = "Create Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Item already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = NewProduct::try_from(json.into_inner()).or_400()?;

    let created = state
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/items/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_uuid = %created.uuid, "created item");

    Ok(Json(created.into()))
}
