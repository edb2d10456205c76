//! CORS middleware: echoes allow-listed origins on every response.
//!
//! Requests from other origins are still served, just without CORS headers,
//! so browsers on foreign pages cannot read the reply.

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN,
        },
    },
    middleware::Next,
    response::Response,
};

use crate::AppState;

const ALLOW_HEADERS: &str = "Content-Type";
const ALLOW_METHODS: &str = "POST, OPTIONS";

/// Axum middleware: adds `Access-Control-Allow-*` headers when the request
/// `Origin` exactly matches the configured allow-list.
pub async fn allow_listed_origins(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .filter(|v| {
            v.to_str()
                .is_ok_and(|o| state.config.is_allowed_origin(o))
        })
        .cloned();

    let mut response = next.run(request).await;

    if let Some(origin) = origin {
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
    }

    response
}
