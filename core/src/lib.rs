//! In-memory todo store core.
//!
//! # Overview
//! Owns the todo collection and the id counter, and exposes
//! list/create/get/update/delete with typed errors. No I/O, no async, no
//! transport types — the HTTP layer lives in the server crate and only
//! translates store results into responses.
//!
//! # Design
//! - `TodoStore` is an explicitly owned instance, not ambient global state;
//!   construct one per process (or per test) and inject it where needed.
//! - Operations are synchronous and non-blocking; callers sharing one
//!   instance serialize access with a lock of their choosing.
//! - Validation runs strictly before mutation, so any failed operation
//!   leaves the store unchanged.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{parse_id, TodoStore};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
