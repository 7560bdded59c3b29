//! HTTP route handlers.
//!
//! Routes carry per-route Cache-Control headers: the page gets a short TTL so a
//! rollout becomes visible quickly, static assets a long one, and the health
//! check none at all so probes always hit a live process.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request.

pub mod health;
pub mod index;

use axum::{middleware, response::Response, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_ERROR, CACHE_CONTROL_PAGE, CACHE_CONTROL_STATIC};
use crate::http::static_files::create_static_service;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Cache-Control for `/static`: long for assets that exist, short for misses.
fn static_cache_control(response: &Response) -> Option<HeaderValue> {
    if response.status().is_success() || response.status().is_redirection() {
        Some(HeaderValue::from_static(CACHE_CONTROL_STATIC))
    } else {
        Some(HeaderValue::from_static(CACHE_CONTROL_ERROR))
    }
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new().route("/", get(index::page)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PAGE),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    let mut app = Router::new().merge(page_routes).merge(health_routes);

    if state.config.site.serve_static {
        let static_routes = Router::new()
            .nest_service("/static", create_static_service(&state.config.site))
            .layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                static_cache_control,
            ));
        app = app.merge(static_routes);
    }

    app.with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
