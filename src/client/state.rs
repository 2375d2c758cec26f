use crate::model::Book;
use uuid::Uuid;

/// The client's cached copy of the book list, shared across views.
///
/// This is transient render state, not truth: the store owns durable
/// state, and the view performing a mutation reconciles the catalog
/// afterwards (`upsert` after a save, `remove` after a delete). Only the
/// mutating view writes; readers re-render from the result.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: &Uuid) -> Option<&Book> {
        self.books.iter().find(|b| b.id == *id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Swap in a freshly fetched list wholesale.
    pub fn replace_all(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    /// Replace the entry with a matching id in place, or append if the id
    /// is not present. Never reorders existing entries.
    pub fn upsert(&mut self, book: Book) {
        match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => *slot = book,
            None => self.books.push(book),
        }
    }

    /// Drop exactly the entry with the matching id, keeping the order of
    /// the rest.
    pub fn remove(&mut self, id: &Uuid) {
        self.books.retain(|b| b.id != *id);
    }
}
