use super::backend::StorageBackend;
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability so the `StorageBackend` trait
/// can take `&self` for all methods without the overhead of a lock.
#[derive(Default)]
pub struct MemBackend {
    docs: RefCell<HashMap<Uuid, Book>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load(&self, id: &Uuid) -> Result<Option<Book>> {
        let docs = self.docs.borrow();
        Ok(docs.get(id).cloned())
    }

    fn load_all(&self) -> Result<Vec<Book>> {
        let docs = self.docs.borrow();
        Ok(docs.values().cloned().collect())
    }

    fn save(&self, book: &Book) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CatalogError::Store("Simulated write error".to_string()));
        }
        let mut docs = self.docs.borrow_mut();
        docs.insert(book.id, book.clone());
        Ok(())
    }

    fn remove(&self, id: &Uuid) -> Result<bool> {
        let mut docs = self.docs.borrow_mut();
        Ok(docs.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft};

    fn sample(title: &str) -> Book {
        Book::new(BookDraft {
            title: title.into(),
            author: "Someone".into(),
            publish_year: 2001,
            genre: "Fiction".into(),
            description: "A book".into(),
        })
    }

    #[test]
    fn save_then_load_roundtrip() {
        let backend = MemBackend::new();
        let book = sample("Solaris");
        backend.save(&book).unwrap();

        let loaded = backend.load(&book.id).unwrap().unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn load_missing_is_none() {
        let backend = MemBackend::new();
        assert!(backend.load(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn remove_reports_existence() {
        let backend = MemBackend::new();
        let book = sample("Solaris");
        backend.save(&book).unwrap();

        assert!(backend.remove(&book.id).unwrap());
        assert!(!backend.remove(&book.id).unwrap());
    }

    #[test]
    fn simulated_write_error_surfaces_as_store_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);

        match backend.save(&sample("Solaris")) {
            Err(CatalogError::Store(msg)) => assert!(msg.contains("Simulated")),
            other => panic!("Expected Store error, got {:?}", other),
        }
    }
}
