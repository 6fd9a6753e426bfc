use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::AppError;

/// Client-supplied task content: a flat JSON object with no enforced schema.
pub type TaskFields = Map<String, Value>;

/// Keys that name the record identifier and may never be written by a client.
pub const RESERVED_KEYS: [&str; 2] = ["id", "_id"];

/// Represents a task as stored and returned by the API.
///
/// Serialized flat: `{ "id": "<uuid>", ...fields }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier (UUID v4). Immutable.
    pub id: Uuid,
    /// Everything else the client sent.
    #[serde(flatten)]
    pub fields: TaskFields,
}

impl Task {
    /// Creates a task with a fresh identifier. Reserved keys are dropped from `fields`.
    pub fn new(mut fields: TaskFields) -> Self {
        strip_reserved(&mut fields);
        Self {
            id: Uuid::new_v4(),
            fields,
        }
    }

    /// Overwrites the given fields and keeps every other one.
    pub fn merge(&mut self, mut fields: TaskFields) {
        strip_reserved(&mut fields);
        self.fields.extend(fields);
    }
}

/// Removes the identifier keys from a client field set.
pub fn strip_reserved(fields: &mut TaskFields) {
    for key in RESERVED_KEYS {
        fields.remove(key);
    }
}

/// Parses a task identifier taken from a path or body.
pub fn parse_task_id(raw: &str) -> Result<Uuid, AppError> {
    Ok(Uuid::parse_str(raw.trim())?)
}

/// A partial update: the target identifier and the fields to merge over the record.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskUpdate {
    pub id: Uuid,
    pub fields: TaskFields,
}

impl TaskUpdate {
    /// Splits an update body `{id, ...fields}` into its parts.
    ///
    /// `_id` is accepted in place of `id`. Both keys are removed from the merge set.
    pub fn from_body(mut body: TaskFields) -> Result<Self, AppError> {
        let id = body.remove("id");
        let legacy_id = body.remove("_id");

        let raw = match id.or(legacy_id) {
            Some(Value::String(raw)) => raw,
            Some(_) => {
                return Err(AppError::ValidationError(
                    "Task id must be a string".into(),
                ))
            }
            None => {
                return Err(AppError::ValidationError(
                    "Missing required fields: id".into(),
                ))
            }
        };

        Ok(Self {
            id: parse_task_id(&raw)?,
            fields: body,
        })
    }
}

/// Result payload of the delete routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSummary {
    pub deleted: u64,
}
