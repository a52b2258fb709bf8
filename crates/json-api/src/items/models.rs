//! Item wire models.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog::{NewProduct, Product, ProductError, ProductUpdate};

/// A catalog item as returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// Server assigned identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Unit price
    #[serde(with = "catalog::price")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

impl From<Product> for ItemResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.uuid.into_uuid(),
            name: product.name,
            price: product.price,
        }
    }
}

/// Create Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateItemRequest {
    /// Display name, must not be blank
    pub name: String,

    /// Unit price, must not be negative
    #[serde(with = "catalog::price")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

impl TryFrom<CreateItemRequest> for NewProduct {
    type Error = ProductError;

    fn try_from(request: CreateItemRequest) -> Result<Self, Self::Error> {
        NewProduct::new(request.name, request.price)
    }
}

/// Update Item Request
///
/// Omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateItemRequest {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,

    /// New unit price
    #[serde(default, with = "catalog::price::option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,
}

impl TryFrom<UpdateItemRequest> for ProductUpdate {
    type Error = ProductError;

    fn try_from(request: UpdateItemRequest) -> Result<Self, Self::Error> {
        ProductUpdate::new(request.name, request.price)
    }
}
