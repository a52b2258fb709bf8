//! Exact JSON number encoding for prices.
//!
//! Prices travel as JSON numbers carrying every decimal digit. String prices are
//! rejected. Use with `#[serde(with = "catalog::price")]`, or
//! `catalog::price::option` for optional fields.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::Number;

/// Serialize a price as an exact JSON number.
///
/// # Errors
///
/// Returns the serializer's error if the decimal cannot be written as a number.
pub fn serialize<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    to_number(*price)
        .map_err(<S::Error as ser::Error>::custom)?
        .serialize(serializer)
}

/// Deserialize a price from a JSON number.
///
/// # Errors
///
/// Fails on strings, on other non-numeric values and on numbers `Decimal` cannot hold.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    from_number(&Number::deserialize(deserializer)?).map_err(de::Error::custom)
}

/// Optional prices, `null` or absent meaning `None`.
pub mod option {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
    use serde_json::Number;

    /// Serialize an optional price as an exact JSON number or `null`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if the decimal cannot be written as a number.
    #[allow(clippy::ref_option, reason = "serde `with` passes fields by reference")]
    pub fn serialize<S: Serializer>(
        price: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        price
            .map(super::to_number)
            .transpose()
            .map_err(<S::Error as ser::Error>::custom)?
            .serialize(serializer)
    }

    /// Deserialize an optional price from a JSON number or `null`.
    ///
    /// # Errors
    ///
    /// Fails on strings and on other non-numeric values.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        Option::<Number>::deserialize(deserializer)?
            .as_ref()
            .map(super::from_number)
            .transpose()
            .map_err(de::Error::custom)
    }
}

fn to_number(price: Decimal) -> Result<Number, serde_json::Error> {
    Number::from_str(&price.normalize().to_string())
}

fn from_number(number: &Number) -> Result<Decimal, rust_decimal::Error> {
    let text = number.to_string();

    Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text))
}
