//! Cross-origin policy for the browser client.

use salvo::{
    Handler,
    cors::{Any, Cors},
    http::{
        Method,
        header::{CONTENT_TYPE, HeaderName, LOCATION},
    },
};

use crate::config::cors::CorsConfig;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

pub(crate) fn handler(config: &CorsConfig) -> impl Handler {
    let cors = Cors::new()
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec![CONTENT_TYPE, REQUEST_ID_HEADER])
        .expose_headers(vec![LOCATION, REQUEST_ID_HEADER]);

    match config.cors_allow_origin.as_deref() {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
    .into_handler()
}
