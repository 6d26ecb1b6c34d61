//! Todo entity and wire payload.
//!
//! # Design
//! `Todo` is the persisted record; `TodoPayload` is the wire shape shared by
//! the create and update endpoints. The payload keeps every field optional
//! so a missing `text` surfaces as a structured validation error instead of
//! a deserialization rejection.
//!
//! Equality on `Todo` is identity-based: two values are equal only when both
//! carry the same non-null id. A record that has not been assigned an id is
//! equal only to itself by reference, never to another instance, even when
//! every field matches. The fallback is an explicit `std::ptr::eq`, not a
//! structural derivation, and downstream code depends on that asymmetry.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Maximum accepted length of `text`, in characters.
pub const MAX_TEXT_LEN: usize = 255;

/// A single todo record.
///
/// `id` is `None` until the store assigns one on first insert and is
/// immutable afterwards. `done` stays `None` unless the caller set it and is
/// serialized as an explicit JSON `null`, never silently defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Todo {
    pub id: Option<String>,
    pub text: String,
    pub done: Option<bool>,
}

impl Todo {
    /// New unsaved todo with empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent setter for `text`, for convenient test-data construction.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Fluent setter for `done`, for convenient test-data construction.
    pub fn done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            // No id on either side: only the same instance is equal.
            _ => std::ptr::eq(self, other),
        }
    }
}

impl Eq for Todo {}

impl Hash for Todo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Only the id participates, matching the equality contract.
        self.id.hash(state);
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Todo{{id={}, text='{}', done={}}}",
            self.id.as_deref().unwrap_or("null"),
            self.text,
            match self.done {
                Some(true) => "true",
                Some(false) => "false",
                None => "null",
            },
        )
    }
}

/// Wire payload for the create and update endpoints.
///
/// Every field is optional at the JSON layer; `validate` enforces the field
/// constraints and produces the entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl TodoPayload {
    /// Check the field constraints and convert into a [`Todo`].
    ///
    /// `text` must be present and at most [`MAX_TEXT_LEN`] characters.
    /// Validation runs before any id-based branching on the write paths, so
    /// a validation failure wins over a precondition failure.
    pub fn validate(self) -> Result<Todo, ApiError> {
        let text = match self.text {
            Some(text) => text,
            None => return Err(ApiError::validation("text", "must not be null")),
        };
        let len = text.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(ApiError::validation(
                "text",
                format!("length is {len} characters, maximum is {MAX_TEXT_LEN}"),
            ));
        }
        Ok(Todo {
            id: self.id,
            text,
            done: self.done,
        })
    }
}
