use super::backend::StorageBackend;
use super::RecordStore;
use crate::error::{CatalogError, Result};
use crate::model::{Book, BookDraft, BookPatch};
use uuid::Uuid;

/// Catalog logic on top of a raw document backend.
///
/// The backend only knows how to read and write documents; everything the
/// catalog guarantees lives here: required fields at creation, global
/// title uniqueness, field-by-field patch merging, and `updated_at`
/// re-stamping.
pub struct BookStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> BookStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Find a book whose title matches exactly, excluding `excluding` so
    /// an update that keeps its own title does not collide with itself.
    fn title_taken(&self, title: &str, excluding: Option<&Uuid>) -> Result<bool> {
        let books = self.backend.load_all()?;
        Ok(books
            .iter()
            .any(|b| b.title == title && Some(&b.id) != excluding))
    }
}

impl<B: StorageBackend> RecordStore for BookStore<B> {
    fn create(&mut self, draft: BookDraft) -> Result<Book> {
        draft.validate()?;
        if self.title_taken(&draft.title, None)? {
            return Err(CatalogError::DuplicateTitle(draft.title));
        }

        let book = Book::new(draft);
        self.backend.save(&book)?;
        Ok(book)
    }

    fn get(&self, id: &Uuid) -> Result<Book> {
        self.backend
            .load(id)?
            .ok_or(CatalogError::NotFound(*id))
    }

    fn list(&self) -> Result<Vec<Book>> {
        let mut books = self.backend.load_all()?;
        // Backends make no ordering promise; pin one down so repeated
        // calls over unchanged data agree.
        books.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(books)
    }

    fn update(&mut self, id: &Uuid, patch: BookPatch) -> Result<Book> {
        let mut book = self.get(id)?;

        if let Some(new_title) = patch.title.as_deref() {
            if new_title != book.title && self.title_taken(new_title, Some(id))? {
                return Err(CatalogError::DuplicateTitle(new_title.to_string()));
            }
        }

        book.apply_patch(patch);
        self.backend.save(&book)?;
        Ok(book)
    }

    fn delete(&mut self, id: &Uuid) -> Result<()> {
        if !self.backend.remove(id)? {
            return Err(CatalogError::NotFound(*id));
        }
        Ok(())
    }
}
