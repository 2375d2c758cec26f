//! # Storage Layer
//!
//! This module defines the persistence abstraction for bookrack. The
//! [`RecordStore`] trait is what the service layer programs against.
//!
//! ## Split: what vs. how
//!
//! The layer is split the same way on both backends:
//!
//! 1. [`backend::StorageBackend`] handles raw document I/O (read, write,
//!    remove, scan) and knows nothing about catalog rules.
//! 2. [`book_store::BookStore`] sits on top and enforces the catalog
//!    invariants: required fields at creation, title uniqueness, patch
//!    merging, `updated_at` re-stamping, and the not-found cases.
//!
//! ## Invariants enforced here
//!
//! - `title` is unique across all books. Both `create` and `update` check
//!   it; an update colliding with a *different* book's title fails.
//! - The five content fields are non-empty at creation time.
//! - `list` re-queries the backend on every call and returns a stable
//!   order (by `created_at`, then id).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON document per book under a data directory,
//!   written atomically (tmp file + rename).
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage layout
//!
//! ```text
//! <data-dir>/
//! └── book-{uuid}.json    # One document per book
//! ```

use crate::error::Result;
use crate::model::{Book, BookDraft, BookPatch};
use uuid::Uuid;

pub mod backend;
pub mod book_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for book persistence.
///
/// Implementations own durable state; callers hold at most a transient
/// cached copy and reconcile it after each mutation.
pub trait RecordStore {
    /// Create a book from a draft, assigning id and timestamps.
    fn create(&mut self, draft: BookDraft) -> Result<Book>;

    /// Get a book by id.
    fn get(&self, id: &Uuid) -> Result<Book>;

    /// List all books. Re-queries storage; order is stable per call.
    fn list(&self) -> Result<Vec<Book>>;

    /// Merge a partial update into an existing book and re-stamp it.
    fn update(&mut self, id: &Uuid, patch: BookPatch) -> Result<Book>;

    /// Remove a book permanently.
    fn delete(&mut self, id: &Uuid) -> Result<()>;
}
