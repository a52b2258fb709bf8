//! Item Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => StatusError::conflict().brief("Item already exists"),
        ProductsServiceError::NotFound => StatusError::not_found().brief("Item not found"),
        ProductsServiceError::Invalid(source) => StatusError::bad_request().brief(source.to_string()),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid item payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("product store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog::ProductError;
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn maps_store_errors_to_status_codes() {
        let cases = [
            (ProductsServiceError::NotFound, StatusCode::NOT_FOUND),
            (ProductsServiceError::AlreadyExists, StatusCode::CONFLICT),
            (ProductsServiceError::InvalidData, StatusCode::BAD_REQUEST),
            (
                ProductsServiceError::Invalid(ProductError::EmptyName),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            let status = into_status_error(error).code;

            assert_eq!(status, expected, "unexpected status {status}");
        }
    }
}
