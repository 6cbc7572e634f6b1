//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Router;
use axum::routing::get;

use roomdesk_app::ports::RoomRepository;

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
///
/// Every room operation shares one path; the target room, when there is
/// one, is passed as the `id` query parameter.
pub fn routes<RR>() -> Router<AppState<RR>>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new().route(
        "/rooms",
        get(rooms::list::<RR>)
            .post(rooms::create::<RR>)
            .put(rooms::update::<RR>)
            .delete(rooms::delete::<RR>),
    )
}
