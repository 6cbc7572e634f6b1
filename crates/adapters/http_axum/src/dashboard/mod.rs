//! Server-side rendered HTML pages (no JavaScript).

pub mod trial;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use roomdesk_app::ports::RoomRepository;

use crate::state::AppState;

/// Build the sub-router for SSR HTML pages.
pub fn routes<RR>() -> Router<AppState<RR>>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new().route("/trial-expired", get(trial::expired::<RR>))
}

/// Failure while producing an HTML page.
#[derive(Debug)]
pub enum DashboardError {
    Render(askama::Error),
}

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match self {
            Self::Render(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>Something went wrong</h1>"),
                )
                    .into_response()
            }
        }
    }
}
