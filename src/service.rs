//! # Service Facade
//!
//! The service layer is a **thin facade** over the record store. It is the
//! single entry point for every catalog operation, regardless of the
//! surface in front of it (HTTP routes, an embedded client, tests).
//!
//! ## What the service does NOT do
//!
//! - **Business logic**: validation and uniqueness live in the store
//! - **Transport concerns**: no status codes, no JSON framing (the HTTP
//!   layer maps [`crate::error::CatalogError::status_code`] itself)
//! - **Presentation**: returns domain types, not strings
//!
//! ## Generic over RecordStore
//!
//! `BookService<S: RecordStore>` is generic over the storage backend:
//! - Production: `BookService<FileStore>`
//! - Testing: `BookService<InMemoryStore>`
//!
//! ## The client seam
//!
//! The client core talks to the catalog through [`BookApi`], a
//! request/response trait with explicit success/failure branches. In
//! process it is implemented directly by `BookService`; a remote client
//! would implement it over its transport of choice.

use crate::error::Result;
use crate::model::{Book, BookDraft, BookPatch};
use crate::store::RecordStore;
use uuid::Uuid;

/// The operations the client core needs from the catalog.
pub trait BookApi {
    fn fetch_books(&mut self) -> Result<Vec<Book>>;
    fn fetch_book(&mut self, id: &Uuid) -> Result<Book>;
    fn update_book(&mut self, id: &Uuid, patch: BookPatch) -> Result<Book>;
    fn delete_book(&mut self, id: &Uuid) -> Result<()>;
}

/// The catalog facade. Pass-through to the store, one method per
/// operation.
pub struct BookService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> BookService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create(&mut self, draft: BookDraft) -> Result<Book> {
        self.store.create(draft)
    }

    pub fn get(&self, id: &Uuid) -> Result<Book> {
        self.store.get(id)
    }

    pub fn list(&self) -> Result<Vec<Book>> {
        self.store.list()
    }

    pub fn update(&mut self, id: &Uuid, patch: BookPatch) -> Result<Book> {
        self.store.update(id, patch)
    }

    pub fn delete(&mut self, id: &Uuid) -> Result<()> {
        self.store.delete(id)
    }
}

impl<S: RecordStore> BookApi for BookService<S> {
    fn fetch_books(&mut self) -> Result<Vec<Book>> {
        self.list()
    }

    fn fetch_book(&mut self, id: &Uuid) -> Result<Book> {
        self.get(id)
    }

    fn update_book(&mut self, id: &Uuid, patch: BookPatch) -> Result<Book> {
        self.update(id, patch)
    }

    fn delete_book(&mut self, id: &Uuid) -> Result<()> {
        self.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::store::memory::InMemoryStore;

    fn draft(title: &str) -> BookDraft {
        BookDraft {
            title: title.into(),
            author: "Le Guin".into(),
            publish_year: 1969,
            genre: "SciFi".into(),
            description: "ambisexual world".into(),
        }
    }

    #[test]
    fn service_passes_operations_through() {
        let mut service = BookService::new(InMemoryStore::new());

        let book = service.create(draft("The Left Hand of Darkness")).unwrap();
        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(service.get(&book.id).unwrap().author, "Le Guin");

        let updated = service
            .update(
                &book.id,
                BookPatch {
                    publish_year: Some(1976),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.publish_year, 1976);

        service.delete(&book.id).unwrap();
        assert!(matches!(
            service.get(&book.id),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn book_api_is_backed_by_the_same_store() {
        let mut service = BookService::new(InMemoryStore::new());
        let book = service.create(draft("Rocannon's World")).unwrap();

        let api: &mut dyn BookApi = &mut service;
        assert_eq!(api.fetch_books().unwrap().len(), 1);
        assert_eq!(api.fetch_book(&book.id).unwrap().id, book.id);

        api.delete_book(&book.id).unwrap();
        assert!(api.fetch_books().unwrap().is_empty());
    }
}
