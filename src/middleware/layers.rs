use crate::types::StateError;
use axum::{error_handling::HandleErrorLayer, BoxError, Router};
use std::time::Duration;
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Wraps the router in request tracing and a per-request timeout.
///
/// On timeout the handler future is dropped, abandoning any in-flight
/// store or ledger read.
pub fn apply_layers(router: Router, request_timeout: Duration) -> Router {
    router
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
}

async fn handle_layer_error(err: BoxError) -> StateError {
    if err.is::<Elapsed>() {
        warn!("request timed out");
        StateError::Timeout
    } else {
        StateError::Internal(err.to_string())
    }
}
