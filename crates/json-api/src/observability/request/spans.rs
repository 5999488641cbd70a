//! Route labels for spans and metrics.

/// Routes whose path is used as its own label.
const FIXED_ROUTES: [&str; 11] = [
    "/",
    "/healthcheck",
    "/metrics",
    "/items",
    "/update_variable",
    "/budget",
    "/solve",
    "/export",
    "/download",
    "/import",
    "/api-doc/openapi.json",
];

/// Label for any path no route serves.
const UNMATCHED: &str = "unmatched";

/// Map a request path to the route serving it so labels stay bounded.
pub(super) fn route_template(path: &str) -> &'static str {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };

    if let Some(route) = FIXED_ROUTES.iter().find(|route| **route == normalized) {
        return route;
    }

    let segments: Vec<&str> = normalized.trim_start_matches('/').split('/').collect();

    match segments.as_slice() {
        ["items", name] if !name.is_empty() => "/items/{name}",
        ["docs", ..] => "/docs",
        _ => UNMATCHED,
    }
}
