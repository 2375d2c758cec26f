use crate::error::Result;
use crate::model::Book;
use uuid::Uuid;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while BookStore handles the "what" (uniqueness, validation, merging).
pub trait StorageBackend {
    /// Read a single document.
    /// Returns Ok(None) if the document does not exist.
    /// Returns Err only on actual I/O or decode errors.
    fn load(&self, id: &Uuid) -> Result<Option<Book>>;

    /// Read every document in the collection.
    fn load_all(&self) -> Result<Vec<Book>>;

    /// Write a document (create or replace).
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, book: &Book) -> Result<()>;

    /// Remove a document. Returns whether it existed.
    fn remove(&self, id: &Uuid) -> Result<bool>;
}
