//! JSON REST handlers for rooms.

use std::str::FromStr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use roomdesk_app::ports::RoomRepository;
use roomdesk_domain::id::RoomId;
use roomdesk_domain::room::{Document, Room};

use crate::error::ApiError;
use crate::state::AppState;

/// The first `id` query parameter, with an empty value treated as absent.
fn id_param(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

fn require_id(query: Option<&str>) -> Result<RoomId, ApiError> {
    let id = id_param(query).unwrap_or_default();
    Ok(RoomId::from_str(&id)?)
}

/// Decode a request body as JSON whatever its declared content type.
///
/// A JSON value other than an object carries no fields.
fn document_from(body: &Bytes) -> Result<Document, ApiError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(document) => Ok(document),
        _ => Ok(Document::new()),
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Room>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Room>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Room>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Acknowledgement body of the delete endpoint.
#[derive(Serialize)]
pub struct DeleteAck {
    pub success: bool,
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeleteAck>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1/rooms[?id=]`
///
/// Without `id`, lists every room. With `id`, answers 501: lookup by
/// identifier is not supported.
pub async fn list<RR>(
    State(state): State<AppState<RR>>,
    RawQuery(query): RawQuery,
) -> Result<ListResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    if let Some(id) = id_param(query.as_deref()) {
        return Err(state.room_service.find_room(&id).await.into());
    }

    let rooms = state.room_service.list_rooms().await?;
    Ok(ListResponse::Ok(Json(rooms)))
}

/// `POST /api/v1/rooms`
pub async fn create<RR>(
    State(state): State<AppState<RR>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    let document = document_from(&body)?;
    let created = state.room_service.create_room(document).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/rooms?id=`
pub async fn update<RR>(
    State(state): State<AppState<RR>>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    let id = require_id(query.as_deref())?;
    let document = document_from(&body)?;
    let updated = state.room_service.update_room(id, document).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/rooms?id=`
pub async fn delete<RR>(
    State(state): State<AppState<RR>>,
    RawQuery(query): RawQuery,
) -> Result<DeleteResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    let id = require_id(query.as_deref())?;
    state.room_service.delete_room(id).await?;
    Ok(DeleteResponse::Ok(Json(DeleteAck { success: true })))
}
