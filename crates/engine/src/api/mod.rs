//! API layer - HTTP entry points.

pub mod http;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app::App;

/// Build the complete router: routes, panic recovery, optional request
/// timeout, request tracing, correlation IDs and optional CORS.
///
/// A request exceeding `request_timeout` is answered with `408`.
pub fn router(
    app: Arc<App>,
    cors: Option<CorsLayer>,
    request_timeout: Option<Duration>,
) -> Router {
    let mut router = http::routes()
        .with_state(app)
        .layer(CatchPanicLayer::custom(middleware::handle_panic));

    if let Some(timeout) = request_timeout {
        router = router.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ));
    }

    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::correlation));

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}
