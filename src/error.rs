use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Book not found: {0}")]
    NotFound(Uuid),

    #[error("A book titled \"{0}\" already exists")]
    DuplicateTitle(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl CatalogError {
    /// Map this error to the HTTP status code the service exposes.
    ///
    /// The taxonomy is 1:1: missing field -> 400, duplicate title -> 409,
    /// unknown id -> 404. Everything else is an internal failure.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::MissingField(_) => 400,
            CatalogError::NotFound(_) => 404,
            CatalogError::DuplicateTitle(_) => 409,
            CatalogError::Io(_) | CatalogError::Serialization(_) | CatalogError::Store(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
