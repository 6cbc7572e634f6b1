//! Repository doubles shared by the handler and router tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use roomdesk_app::ports::RoomRepository;
use roomdesk_app::services::room_service::RoomService;
use roomdesk_domain::error::RoomDeskError;
use roomdesk_domain::id::RoomId;
use roomdesk_domain::room::{Room, RoomPatch};
use roomdesk_domain::time::now;
use roomdesk_domain::trial::TrialNotice;

use crate::state::AppState;

#[derive(Default)]
pub struct InMemoryRoomRepo {
    store: Mutex<BTreeMap<RoomId, Room>>,
}

impl RoomRepository for InMemoryRoomRepo {
    async fn get_all(&self) -> Result<Vec<Room>, RoomDeskError> {
        Ok(self.store.lock().unwrap().values().cloned().collect())
    }

    async fn create(&self, room: Room) -> Result<Room, RoomDeskError> {
        self.store
            .lock()
            .unwrap()
            .insert(room.id.clone(), room.clone());
        Ok(room)
    }

    async fn update(&self, id: RoomId, patch: RoomPatch) -> Result<Room, RoomDeskError> {
        let mut store = self.store.lock().unwrap();
        let room = store
            .get_mut(&id)
            .ok_or_else(|| RoomDeskError::Storage(format!("no room to update: {id}").into()))?;
        room.apply(patch, now());
        Ok(room.clone())
    }

    async fn delete(&self, id: RoomId) -> Result<(), RoomDeskError> {
        self.store.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// Repository whose every call fails, as if the database were unreachable.
pub struct FailingRoomRepo;

fn unreachable_backend() -> RoomDeskError {
    RoomDeskError::Storage("database is unreachable".into())
}

impl RoomRepository for FailingRoomRepo {
    async fn get_all(&self) -> Result<Vec<Room>, RoomDeskError> {
        Err(unreachable_backend())
    }

    async fn create(&self, _room: Room) -> Result<Room, RoomDeskError> {
        Err(unreachable_backend())
    }

    async fn update(&self, _id: RoomId, _patch: RoomPatch) -> Result<Room, RoomDeskError> {
        Err(unreachable_backend())
    }

    async fn delete(&self, _id: RoomId) -> Result<(), RoomDeskError> {
        Err(unreachable_backend())
    }
}

pub fn app_with<RR>(repo: RR) -> Router
where
    RR: RoomRepository + Send + Sync + 'static,
{
    crate::router::build(AppState::new(
        RoomService::new(repo),
        TrialNotice::default(),
    ))
}

pub fn request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_owned()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
