//! Add-product form contents.

use std::str::FromStr;

use rust_decimal::Decimal;

use catalog::NewProduct;

use crate::errors::ClientError;

/// Raw form input, kept as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Name input.
    pub name: String,

    /// Price input.
    pub price: String,
}

impl ProductDraft {
    /// Both inputs hold something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.trim().is_empty()
    }

    /// Turn the form into a create payload.
    ///
    /// # Errors
    ///
    /// [`ClientError::IncompleteDraft`] when an input is empty,
    /// [`ClientError::InvalidDraft`] when the price does not parse and
    /// [`ClientError::Invalid`] when the product itself is rejected.
    pub fn to_new_product(&self) -> Result<NewProduct, ClientError> {
        if !self.is_complete() {
            return Err(ClientError::IncompleteDraft);
        }

        let price = self.price.trim();
        let price = Decimal::from_str(price)
            .or_else(|_| Decimal::from_scientific(price))
            .map_err(|_parse| ClientError::InvalidDraft(price.to_owned()))?;

        Ok(NewProduct::new(self.name.as_str(), price)?)
    }
}
