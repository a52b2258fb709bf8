//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier
    #[serde(rename = "id")]
    pub uuid: ProductUuid,

    /// Product name
    pub name: String,

    /// Product price
    #[serde(with = "crate::price")]
    pub price: Decimal,
}

impl Product {
    /// Build a stored product from a freshly assigned id and its create payload.
    #[must_use]
    pub fn from_new(uuid: ProductUuid, product: NewProduct) -> Self {
        Self {
            uuid,
            name: product.name,
            price: product.price,
        }
    }
}

/// Reasons a product payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// Name is empty or only whitespace.
    #[error("product name cannot be empty")]
    EmptyName,

    /// Price is below zero.
    #[error("product price cannot be negative (got {0})")]
    NegativePrice(Decimal),
}

/// New Product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Product name
    pub name: String,

    /// Product price
    #[serde(with = "crate::price")]
    pub price: Decimal,
}

impl NewProduct {
    /// Validate and normalise a create payload.
    ///
    /// # Errors
    ///
    /// Returns an error when the trimmed name is empty or the price is negative.
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, ProductError> {
        let product = Self {
            name: normalise_name(name.into())?,
            price: check_price(price)?,
        };

        Ok(product)
    }

    /// Re-check an already constructed payload.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload would be rejected by [`NewProduct::new`].
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }

        check_price(self.price).map(drop)
    }
}

/// Partial Product Update
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    /// Replacement name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Replacement price
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::price::option"
    )]
    pub price: Option<Decimal>,
}

impl ProductUpdate {
    /// Validate and normalise an update payload.
    ///
    /// # Errors
    ///
    /// Returns an error when a supplied name is blank or a supplied price is negative.
    pub fn new(name: Option<String>, price: Option<Decimal>) -> Result<Self, ProductError> {
        Ok(Self {
            name: name.map(normalise_name).transpose()?,
            price: price.map(check_price).transpose()?,
        })
    }

    /// Re-check an already constructed update.
    ///
    /// # Errors
    ///
    /// Returns an error when the update would be rejected by [`ProductUpdate::new`].
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ProductError::EmptyName);
        }

        self.price.map(check_price).transpose().map(drop)
    }

    /// Whether the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }

    /// Apply the supplied fields to `product`, keeping its id.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }

        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

fn normalise_name(name: String) -> Result<String, ProductError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ProductError::EmptyName);
    }

    if trimmed.len() == name.len() {
        Ok(name)
    } else {
        Ok(trimmed.to_owned())
    }
}

fn check_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductError::NegativePrice(price));
    }

    Ok(price)
}
