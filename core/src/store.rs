//! In-memory todo store: the single owner of the collection and id counter.
//!
//! # Design
//! `TodoStore` is a plain owned value with synchronous, non-blocking
//! operations — no I/O, no suspension points. A call either completes or
//! fails immediately, and the store stays usable after any failure. Callers
//! that need to share one instance across tasks wrap it in a lock and
//! serialize mutations; nothing here is global, so tests construct a fresh
//! store per case.
//!
//! Lookups are linear scans over a `Vec`, which also gives `list` its
//! insertion-order guarantee for free.

use crate::error::StoreError;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Parse a raw path segment into a `TodoId`.
///
/// Anything that is not a well-formed positive integer (including `0`,
/// which the counter never assigns) fails with `InvalidId`. Parsing happens
/// before any existence check, so a malformed id is never reported as
/// not-found.
pub fn parse_id(raw: &str) -> Result<TodoId, StoreError> {
    match raw.parse::<TodoId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(StoreError::InvalidId),
    }
}

/// The authoritative collection of todos plus the next-id counter.
///
/// Ids are assigned monotonically starting at 1 and never reused, even
/// after deletion. Returned items are clones — snapshots the caller owns.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl TodoStore {
    /// Create an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All todos in insertion order. Empty when no items exist.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Validate and store a new todo.
    ///
    /// The title must be non-empty after trimming; the trimmed form is what
    /// gets stored. `completed` always starts out false. Validation runs
    /// before the counter or collection is touched, so a rejected create
    /// leaves no trace.
    pub fn create(&mut self, input: CreateTodo) -> Result<Todo, StoreError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation("title is required".to_string()));
        }

        let todo = Todo {
            id: self.next_id,
            title: title.to_string(),
            description: input.description,
            completed: false,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Look up a todo by id.
    pub fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        self.todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Apply a partial update and return the resulting todo.
    ///
    /// Each field is applied only if present in the patch; an empty patch is
    /// a no-op that still returns the item. An explicitly-null description
    /// clears the field. Unlike `create`, an empty title is accepted here —
    /// the original service never validated titles on update, and that
    /// asymmetry is preserved as observed behavior.
    pub fn update(&mut self, id: TodoId, patch: UpdateTodo) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    /// Remove a todo permanently. Its id is never reassigned.
    pub fn delete(&mut self, id: TodoId) -> Result<(), StoreError> {
        let idx = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        self.todos.remove(idx);
        Ok(())
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(store: &mut TodoStore, title: &str) -> Todo {
        store
            .create(CreateTodo {
                title: title.to_string(),
                description: None,
            })
            .unwrap()
    }

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1"), Ok(1));
        assert_eq!(parse_id("42"), Ok(42));
    }

    #[test]
    fn parse_id_rejects_malformed_input() {
        assert_eq!(parse_id("abc"), Err(StoreError::InvalidId));
        assert_eq!(parse_id(""), Err(StoreError::InvalidId));
        assert_eq!(parse_id("1.5"), Err(StoreError::InvalidId));
        assert_eq!(parse_id("-1"), Err(StoreError::InvalidId));
        assert_eq!(parse_id("0"), Err(StoreError::InvalidId));
    }

    #[test]
    fn create_assigns_id_and_defaults() {
        let mut store = TodoStore::new();
        let todo = create(&mut store, "Buy milk");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Buy milk");
        assert!(todo.description.is_none());
        assert!(!todo.completed);
    }

    #[test]
    fn create_trims_title() {
        let mut store = TodoStore::new();
        let todo = create(&mut store, "  padded  ");
        assert_eq!(todo.title, "padded");
    }

    #[test]
    fn create_rejects_empty_and_whitespace_titles() {
        let mut store = TodoStore::new();
        for title in ["", "   ", "\t\n"] {
            let err = store
                .create(CreateTodo {
                    title: title.to_string(),
                    description: None,
                })
                .unwrap_err();
            assert_eq!(err, StoreError::Validation("title is required".to_string()));
        }
        // failed validation must not touch the collection or the counter
        assert!(store.list().is_empty());
        assert_eq!(create(&mut store, "first valid").id, 1);
    }

    #[test]
    fn get_returns_stored_item() {
        let mut store = TodoStore::new();
        let created = create(&mut store, "Buy milk");
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = TodoStore::new();
        assert_eq!(store.get(99), Err(StoreError::NotFound));
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut store = TodoStore::new();
        let id = create(&mut store, "Walk dog").id;

        let updated = store
            .update(
                id,
                UpdateTodo {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Walk dog");
        assert!(updated.description.is_none());
        assert!(updated.completed);
    }

    #[test]
    fn update_empty_patch_is_a_noop() {
        let mut store = TodoStore::new();
        let created = create(&mut store, "Walk dog");
        let updated = store.update(created.id, UpdateTodo::default()).unwrap();
        assert_eq!(updated, created);
    }

    #[test]
    fn update_null_description_clears_it() {
        let mut store = TodoStore::new();
        let id = store
            .create(CreateTodo {
                title: "With details".to_string(),
                description: Some("details".to_string()),
            })
            .unwrap()
            .id;

        let updated = store
            .update(
                id,
                UpdateTodo {
                    description: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.description.is_none());
    }

    #[test]
    fn update_accepts_empty_title() {
        // create validates titles, update deliberately does not
        let mut store = TodoStore::new();
        let id = create(&mut store, "Original").id;
        let updated = store
            .update(
                id,
                UpdateTodo {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.title, "");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = TodoStore::new();
        let err = store.update(99, UpdateTodo::default()).unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn delete_removes_item() {
        let mut store = TodoStore::new();
        let id = create(&mut store, "Ephemeral").id;
        store.delete(id).unwrap();
        assert_eq!(store.get(id), Err(StoreError::NotFound));
        assert!(store.list().is_empty());
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = TodoStore::new();
        assert_eq!(store.delete(99), Err(StoreError::NotFound));
    }
}
