use super::backend::StorageBackend;
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one JSON document per book.
///
/// Documents live flat under the data directory as `book-{uuid}.json`.
/// Anything else in the directory is ignored, so the directory can be
/// shared with config or log files.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn doc_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("book-{}.json", id))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CatalogError::Io)?;
        }
        Ok(())
    }

    fn read_doc(&self, path: &Path) -> Result<Book> {
        let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
        serde_json::from_str(&content).map_err(CatalogError::Serialization)
    }
}

impl StorageBackend for FsBackend {
    fn load(&self, id: &Uuid) -> Result<Option<Book>> {
        let path = self.doc_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.read_doc(&path)?))
    }

    fn load_all(&self) -> Result<Vec<Book>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut books = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(CatalogError::Io)?;

        for entry in entries {
            let entry = entry.map_err(CatalogError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if !name.starts_with("book-") || !name.ends_with(".json") {
                continue;
            }
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            let uuid_part = stem.strip_prefix("book-").unwrap_or("");
            if Uuid::parse_str(uuid_part).is_ok() {
                books.push(self.read_doc(&path)?);
            }
        }
        Ok(books)
    }

    fn save(&self, book: &Book) -> Result<()> {
        self.ensure_dir()?;

        let target_path = self.doc_path(&book.id);
        let content = serde_json::to_string_pretty(book).map_err(CatalogError::Serialization)?;

        // Atomic write
        let tmp_path = self.root.join(format!(".book-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(CatalogError::Io)?;
        fs::rename(&tmp_path, target_path).map_err(CatalogError::Io)?;

        Ok(())
    }

    fn remove(&self, id: &Uuid) -> Result<bool> {
        let path = self.doc_path(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path).map_err(CatalogError::Io)?;
        Ok(true)
    }
}
