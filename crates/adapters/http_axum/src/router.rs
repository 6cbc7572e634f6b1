//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use roomdesk_app::ports::RoomRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the JSON API under `/api/v1` and merges the HTML pages at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<RR>(state: AppState<RR>) -> Router
where
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
