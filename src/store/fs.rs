use super::book_store::BookStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = BookStore<FsBackend>;

impl FileStore {
    /// Open (or lazily create) a document store rooted at `root`. The
    /// directory itself is created on first write.
    pub fn open(root: PathBuf) -> Self {
        BookStore::with_backend(FsBackend::new(root))
    }
}
