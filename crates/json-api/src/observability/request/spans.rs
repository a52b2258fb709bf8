//! Route templates for span names and metric labels.

/// Label for paths no route serves.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path onto the route that serves it.
///
/// Item ids collapse to `/items/{id}` and Swagger assets to `/docs`. Any other
/// path becomes [`UNMATCHED_ROUTE`] so label values stay bounded.
pub(super) fn route_template(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/",
        ["items"] => "/items",
        ["items", _] => "/items/{id}",
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        _ => UNMATCHED_ROUTE,
    }
}
