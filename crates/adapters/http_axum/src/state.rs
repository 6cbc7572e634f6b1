//! Shared application state for axum handlers.

use std::sync::Arc;

use roomdesk_app::ports::RoomRepository;
use roomdesk_app::services::room_service::RoomService;
use roomdesk_domain::trial::TrialNotice;

/// Application state shared across all axum handlers.
///
/// Generic over the room repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<RR> {
    /// Room CRUD service.
    pub room_service: Arc<RoomService<RR>>,
    /// Content of the trial-expired page.
    pub trial_notice: Arc<TrialNotice>,
}

impl<RR> Clone for AppState<RR> {
    fn clone(&self) -> Self {
        Self {
            room_service: Arc::clone(&self.room_service),
            trial_notice: Arc::clone(&self.trial_notice),
        }
    }
}

impl<RR> AppState<RR>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service and the trial notice.
    pub fn new(room_service: RoomService<RR>, trial_notice: TrialNotice) -> Self {
        Self {
            room_service: Arc::new(room_service),
            trial_notice: Arc::new(trial_notice),
        }
    }
}
