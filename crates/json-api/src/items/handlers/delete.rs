//! Delete Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    items::{errors::into_status_error, models::ItemResponse},
    state::State,
};

/// Delete Item Handler
///
/// Responds with the item that was removed.
#[endpoint(
    tags("items"),
    summary = "Delete Item",
    responses(
        (status_code = StatusCode::OK, description = "Item deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed item id"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let deleted = state
        .products
        .delete_product(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %deleted.uuid, "deleted item");

    Ok(Json(deleted.into()))
}
