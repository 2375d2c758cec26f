use super::book_store::BookStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = BookStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        BookStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookDraft;
    use crate::store::RecordStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = BookDraft {
                    title: format!("Test Book {}", i + 1),
                    author: format!("Author {}", i + 1),
                    publish_year: 1990 + i as i32,
                    genre: "Fiction".to_string(),
                    description: format!("Description for book {}", i + 1),
                };
                self.store.create(draft).unwrap();
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str) -> Self {
            let draft = BookDraft {
                title: title.to_string(),
                author: author.to_string(),
                publish_year: 2000,
                genre: "Fiction".to_string(),
                description: "Some description".to_string(),
            };
            self.store.create(draft).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use crate::store::RecordStore;

    #[test]
    fn fixtures_populate_the_store() {
        let fixture = StoreFixture::default()
            .with_books(2)
            .with_book("Dune", "Herbert");

        let books = fixture.store.list().unwrap();
        assert_eq!(books.len(), 3);

        let dune = books.iter().find(|b| b.title == "Dune").unwrap();
        assert_eq!(dune.author, "Herbert");

        let generic = books
            .iter()
            .filter(|b| b.title.starts_with("Test Book"))
            .count();
        assert_eq!(generic, 2);
    }
}
