//! # Domain Model: Book Records and Partial Updates
//!
//! This module defines the core data structures for bookrack: [`Book`],
//! [`BookDraft`], and [`BookPatch`].
//!
//! ## Lifecycle
//!
//! A book enters the catalog through a [`BookDraft`] (the five content
//! fields, all required), which [`Book::new`] turns into a full record with
//! a generated id and fresh timestamps. After that the record only changes
//! through [`BookPatch`]: an explicit list of optional fields merged
//! field-by-field against the stored record, re-stamping `updated_at`.
//! There is no soft delete and no history; removal is final.
//!
//! ## Validation
//!
//! Required-field presence is the only validation. A draft is valid when
//! every content field is non-empty after trimming. Patches are not
//! validated beyond what the store enforces (title uniqueness); field
//! presence is a creation-time rule only.
//!
//! ## Wire format
//!
//! JSON field names are camelCase (`publishYear`, `createdAt`,
//! `updatedAt`), matching the REST surface consumed by clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CatalogError, Result};

/// A catalog record. The id is system-assigned and immutable; timestamps
/// are system-managed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub publish_year: i32,
    pub genre: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from a validated draft. Assigns a fresh id and
    /// sets both timestamps to now.
    pub fn new(draft: BookDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            author: draft.author,
            publish_year: draft.publish_year,
            genre: draft.genre,
            description: draft.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch into this record field-by-field and re-stamp
    /// `updated_at`. Fields the patch leaves out are untouched.
    pub fn apply_patch(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(year) = patch.publish_year {
            self.publish_year = year;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = Utc::now();
    }
}

/// Creation payload: every content field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publish_year: i32,
    pub genre: String,
    pub description: String,
}

impl BookDraft {
    /// Check required-field presence. Text fields must be non-empty after
    /// trimming; `publish_year` presence is enforced by deserialization.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// Partial-update payload. Each field is independently optional; absent
/// fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.publish_year.is_none()
            && self.genre.is_none()
            && self.description.is_none()
    }

    /// An "edit everything" patch seeded from an existing record, used by
    /// the detail view when entering edit mode.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
            publish_year: Some(book.publish_year),
            genre: Some(book.genre.clone()),
            description: Some(book.description.clone()),
        }
    }
}
