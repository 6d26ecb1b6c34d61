//! Store capability trait over a persistent todo collection.
//!
//! # Design
//! The REST layer only ever sees this trait, so any document backend that
//! satisfies the upsert/find/delete contract can sit behind it. `save` owns
//! id assignment: an id-less todo gets a fresh unique id, a populated id
//! replaces whatever document currently holds it. Atomicity is per document;
//! there are no cross-document transactions.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::page::{Page, PageRequest};
use crate::todo::Todo;

/// Capability surface a persistent todo collection must provide.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Insert or replace one todo.
    ///
    /// When `todo.id` is `None` the store generates a fresh unique id and
    /// returns the todo with it populated. When the id is present, any
    /// existing document with that id is overwritten (last write wins) and
    /// the todo comes back unchanged.
    async fn save(&self, todo: Todo) -> Result<Todo, StoreError>;

    /// Look up one todo by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError>;

    /// One sorted, sliced page of the collection, recomputed on every call.
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Todo>, StoreError>;

    /// Remove one todo by id. Absent ids are a no-op, not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Clear the whole collection. Used by test setup, not production flow.
    async fn delete_all(&self) -> Result<(), StoreError>;
}

/// Shared handle to a store implementation.
pub type SharedStore = Arc<dyn TodoStore>;
