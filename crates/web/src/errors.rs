//! Client Errors

use thiserror::Error;

use catalog::ProductError;

use crate::api::ApiError;

/// Everything a catalog action can fail with.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Name or price input was left empty.
    #[error("enter both a name and a price")]
    IncompleteDraft,

    /// Price input is not a number.
    #[error("price must be a number (got {0:?})")]
    InvalidDraft(String),

    /// Draft parsed but failed product validation.
    #[error(transparent)]
    Invalid(#[from] ProductError),

    /// The API call itself failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The view owning the catalog state has been dropped.
    #[error("catalog view is no longer mounted")]
    Disposed,
}
