//! Domain types for the todo store.
//!
//! # Design
//! `Todo` is the stored record; `CreateTodo` and `UpdateTodo` are the input
//! DTOs the transport layer deserializes and hands to the store. The update
//! patch must distinguish "field absent" (leave unchanged) from "field
//! explicitly null" (clear it), so `description` is an `Option<Option<_>>`
//! with a deserializer that only runs when the field is present.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the store: a positive integer starting at 1,
/// monotonically increasing, never reused after deletion.
pub type TodoId = u64;

/// A single todo item as stored and as returned by the API.
///
/// `description` serializes as an explicit `null` when absent, matching the
/// wire shape produced at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Input for creating a new todo.
///
/// `title` defaults to the empty string when the field is missing so that a
/// missing title and an empty title reach the store's validation the same
/// way and fail with the same error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update for an existing todo. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged.
///
/// Every field goes through the `present` deserializer, so "field absent"
/// is always the outer `None` and a present field is always applied. For
/// `description` the inner type is itself optional: `Some(None)` means an
/// explicit `null` and clears the field. For `title` and `completed` the
/// inner types are `String` and `bool`, so an explicit `null` is a
/// deserialization error rather than a silently dropped field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed: Option<bool>,
}

/// Deserializer invoked only when the field is present in the input, so a
/// present value always becomes `Some(..)` and never collapses into the
/// absent case.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
