//! Error types for the todo store.
//!
//! # Design
//! Every variant is a normal, expected outcome of caller input — there is no
//! fatal class, nothing is retried, and a failed operation never corrupts
//! store state (validation happens strictly before mutation). The transport
//! layer maps `Validation` and `InvalidId` to 400 and `NotFound` to 404.

use std::fmt;

/// Errors returned by `TodoStore` operations and `parse_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input fails a business rule, e.g. an empty title on create.
    Validation(String),

    /// The identifier is not a well-formed positive integer.
    InvalidId,

    /// No todo exists with the given identifier.
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(msg) => write!(f, "{msg}"),
            StoreError::InvalidId => write!(f, "invalid id"),
            StoreError::NotFound => write!(f, "todo not found"),
        }
    }
}

impl std::error::Error for StoreError {}
