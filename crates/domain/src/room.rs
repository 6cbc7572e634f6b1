//! Room: a persisted hotel room record.
//!
//! Rooms are schemaless documents: apart from the identifier and the
//! bookkeeping timestamps, every field lives in a JSON object. Only the
//! presence of [`REQUIRED_FIELDS`] is enforced, and only on creation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RoomDeskError, ValidationError};
use crate::id::RoomId;
use crate::time::{Timestamp, now};

/// Free-form JSON fields of a room.
pub type Document = serde_json::Map<String, Value>;

/// Fields that must be present and truthy when a room is created, in the
/// order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["number", "type", "price", "status"];

/// Keys managed by the store. Client-supplied values for them are dropped.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// A hotel room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    #[serde(flatten)]
    pub document: Document,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// Check creation invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RoomDeskError::Validation`] naming the first of
    /// [`REQUIRED_FIELDS`] that is absent or falsy.
    pub fn validate(&self) -> Result<(), RoomDeskError> {
        let missing = REQUIRED_FIELDS
            .into_iter()
            .find(|field| !self.document.get(*field).is_some_and(is_truthy));
        match missing {
            Some(field) => Err(ValidationError::MissingField(field).into()),
            None => Ok(()),
        }
    }

    /// Merge `patch` into this room, field by field, and bump `updated_at`.
    ///
    /// Top-level keys in the patch replace the stored value; other keys are
    /// left untouched. Nested objects are replaced, not merged.
    pub fn apply(&mut self, patch: RoomPatch, at: Timestamp) {
        self.document.extend(patch.0);
        self.updated_at = at;
    }
}

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy. Everything else, including
/// empty arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn strip_reserved(mut document: Document) -> Document {
    for key in RESERVED_FIELDS {
        document.remove(key);
    }
    document
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    document: Document,
    created_at: Option<Timestamp>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    /// Merge a whole JSON object into the room, ignoring reserved keys.
    #[must_use]
    pub fn document(mut self, document: Document) -> Self {
        self.document.extend(strip_reserved(document));
        self
    }

    /// Set a single field. Reserved keys are ignored.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !RESERVED_FIELDS.contains(&key.as_str()) {
            self.document.insert(key, value.into());
        }
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`RoomDeskError::Validation`] if a required field is missing.
    pub fn build(self) -> Result<Room, RoomDeskError> {
        let created_at = self.created_at.unwrap_or_else(now);
        let room = Room {
            id: self.id.unwrap_or_default(),
            document: self.document,
            created_at,
            updated_at: created_at,
        };
        room.validate()?;
        Ok(room)
    }
}

/// A partial update: the top-level fields to overwrite on an existing room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch(Document);

impl RoomPatch {
    /// Build a patch from a request body, ignoring reserved keys.
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        Self(strip_reserved(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn valid_room() -> RoomBuilder {
        Room::builder()
            .field("number", "101")
            .field("type", "double")
            .field("price", 120)
            .field("status", "available")
    }

    #[test]
    fn should_build_valid_room_when_required_fields_provided() {
        let room = valid_room().field("floor", 1).build().unwrap();
        assert_eq!(room.document["number"], json!("101"));
        assert_eq!(room.document["type"], json!("double"));
        assert_eq!(room.document["price"], json!(120));
        assert_eq!(room.document["status"], json!("available"));
        assert_eq!(room.document.get("floor"), Some(&json!(1)));
        assert_eq!(room.created_at, room.updated_at);
    }

    #[test]
    fn should_report_first_missing_field_in_order() {
        let result = Room::builder().field("status", "available").build();
        assert!(matches!(
            result,
            Err(RoomDeskError::Validation(ValidationError::MissingField(
                "number"
            )))
        ));
    }

    #[test]
    fn should_treat_falsy_values_as_missing() {
        for falsy in [json!(null), json!(false), json!(0), json!(""), json!(0.0)] {
            let result = valid_room().field("price", falsy.clone()).build();
            assert!(
                matches!(
                    result,
                    Err(RoomDeskError::Validation(ValidationError::MissingField(
                        "price"
                    )))
                ),
                "{falsy} should be rejected"
            );
        }
    }

    #[test]
    fn should_accept_any_truthy_type() {
        let room = valid_room()
            .field("number", json!([]))
            .field("type", json!({}))
            .field("price", "free")
            .field("status", true)
            .build();
        assert!(room.is_ok());
    }

    #[test]
    fn should_drop_reserved_keys_from_document() {
        let room = Room::builder()
            .document(doc(json!({
                "id": "forged",
                "created_at": "1970-01-01T00:00:00Z",
                "number": 7,
                "type": "suite",
                "price": 300,
                "status": "cleaning",
            })))
            .build()
            .unwrap();
        assert_ne!(room.id.as_str(), "forged");
        assert!(!room.document.contains_key("id"));
        assert!(!room.document.contains_key("created_at"));
    }

    #[test]
    fn should_merge_patch_over_existing_fields() {
        let mut room = valid_room().field("view", "sea").build().unwrap();
        let later = room.created_at + chrono::Duration::seconds(5);
        let patch = RoomPatch::from_document(doc(json!({
            "id": "ignored",
            "status": "occupied",
            "guest": "Ada",
        })));

        room.apply(patch, later);

        assert_eq!(room.document["status"], json!("occupied"));
        assert_eq!(room.document.get("guest"), Some(&json!("Ada")));
        assert_eq!(room.document.get("view"), Some(&json!("sea")));
        assert_eq!(room.updated_at, later);
        assert!(!room.document.contains_key("id"));
    }

    #[test]
    fn should_serialize_flat_json_object() {
        let room = valid_room().build().unwrap();
        let value = serde_json::to_value(&room).unwrap();
        assert_eq!(value["id"], json!(room.id.as_str()));
        assert_eq!(value["number"], json!("101"));
        assert_eq!(value["type"], json!("double"));
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn should_deserialize_extra_attributes_into_document() {
        let room: Room = serde_json::from_value(json!({
            "id": "r1",
            "number": 12,
            "type": "single",
            "price": 80,
            "status": "available",
            "amenities": ["wifi"],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(room.id.as_str(), "r1");
        assert_eq!(room.document.get("amenities"), Some(&json!(["wifi"])));
        assert!(!room.document.contains_key("created_at"));
    }
}
