//! In-memory document store backing the REST surface.
//!
//! # Design
//! A `RwLock<HashMap>` keyed by id stands in for a document collection:
//! writes replace whole documents atomically, reads work on a snapshot.
//! `find_all` recomputes its page on every call, so a result sequence never
//! goes stale across requests. Ids are UUID v4 strings minted on first save.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use todo_core::{Page, PageRequest, SortDirection, SortField, StoreError, Todo, TodoStore};

/// Process-local todo collection.
#[derive(Default)]
pub struct InMemoryStore {
    todos: RwLock<HashMap<String, Todo>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn save(&self, mut todo: Todo) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let id = match &todo.id {
            Some(id) => id.clone(),
            None => {
                let id = Uuid::new_v4().to_string();
                todo.id = Some(id.clone());
                id
            }
        };
        todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        Ok(self.todos.read().await.get(id).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Todo>, StoreError> {
        let todos = self.todos.read().await;
        let total = todos.len() as u64;
        let mut items: Vec<Todo> = todos.values().cloned().collect();
        items.sort_by(|a, b| {
            let ordering = match request.sort.field {
                SortField::Id => a.id.cmp(&b.id),
                SortField::Text => a.text.cmp(&b.text),
                SortField::Done => a.done.cmp(&b.done),
            };
            match request.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        let items = items
            .into_iter()
            .skip(request.offset())
            .take(request.size as usize)
            .collect();
        Ok(Page { items, total })
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        // Absent ids are a no-op by contract.
        self.todos.write().await.remove(id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.todos.write().await.clear();
        Ok(())
    }
}
