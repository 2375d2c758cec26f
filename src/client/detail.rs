//! # Detail View
//!
//! The per-book view/edit/delete state machine:
//!
//! ```text
//! Loading ──fetch ok──▶ Viewing ◀──cancel/save──▶ Editing
//!                          │                         │
//!                          └──── request_delete ─────┘
//!                                      │
//!                              ConfirmingDelete
//!                               (dismiss returns to the prior state)
//! ```
//!
//! The machine is driven by the rendering layer: it calls the transition
//! methods and re-renders from the accessors. Network failures never
//! surface as a state of their own; they are logged and the machine stays
//! where it was (a failed initial fetch leaves the view stalled in
//! `Loading`). The only positive feedback is a transient success notice
//! shown for a fixed duration after a save or delete.
//!
//! Saving sends an explicit [`BookPatch`] seeded from the last-known book
//! when edit mode was entered. There is no conflict detection; if the
//! record changed underneath, the last writer wins.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::client::state::Catalog;
use crate::model::{Book, BookPatch};
use crate::service::BookApi;

/// How long a success notice stays visible, in milliseconds.
pub const NOTICE_DURATION_MS: i64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Viewing,
    Editing,
    ConfirmingDelete,
}

/// A transient success notice with a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    shown_at: DateTime<Utc>,
}

impl Notice {
    fn now(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Utc::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn visible_at(&self, now: DateTime<Utc>) -> bool {
        now - self.shown_at < Duration::milliseconds(NOTICE_DURATION_MS)
    }
}

pub struct DetailView {
    id: Uuid,
    state: DetailState,
    // Where ConfirmingDelete returns to when dismissed.
    resume_editing: bool,
    book: Option<Book>,
    draft: Option<BookPatch>,
    notice: Option<Notice>,
}

impl DetailView {
    /// Mount the view for a target book. Call [`load`](Self::load) next.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            state: DetailState::Loading,
            resume_editing: false,
            book: None,
            draft: None,
            notice: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    /// The last fetched (or last saved) book, once loading succeeded.
    pub fn book(&self) -> Option<&Book> {
        self.book.as_ref()
    }

    /// The editable copy; present only while editing.
    pub fn draft(&self) -> Option<&BookPatch> {
        self.draft.as_ref()
    }

    /// Mutable access for form inputs; present only while editing.
    pub fn draft_mut(&mut self) -> Option<&mut BookPatch> {
        self.draft.as_mut()
    }

    /// The success notice, if one is still within its display window.
    pub fn notice_at(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.visible_at(now))
    }

    /// Fetch the target book. On success the view becomes `Viewing`; on
    /// failure it stays in `Loading` with the error logged.
    pub fn load<A: BookApi>(&mut self, api: &mut A) {
        if self.state != DetailState::Loading {
            return;
        }
        match api.fetch_book(&self.id) {
            Ok(book) => {
                self.book = Some(book);
                self.state = DetailState::Viewing;
            }
            Err(e) => {
                log::error!("Error fetching book {}: {}", self.id, e);
            }
        }
    }

    /// Enter edit mode, seeding the editable copy from the last-known
    /// book.
    pub fn edit(&mut self) {
        if self.state != DetailState::Viewing {
            return;
        }
        if let Some(book) = &self.book {
            self.draft = Some(BookPatch::from_book(book));
            self.state = DetailState::Editing;
        }
    }

    /// Discard edits and return to viewing the last fetched book.
    pub fn cancel_edit(&mut self) {
        if self.state != DetailState::Editing {
            return;
        }
        self.draft = None;
        self.state = DetailState::Viewing;
    }

    /// Send the edited fields. On success the local book and the shared
    /// catalog are both updated, a notice is shown, and the view returns
    /// to `Viewing`. On failure the view stays in `Editing`.
    pub fn save<A: BookApi>(&mut self, api: &mut A, catalog: &mut Catalog) {
        if self.state != DetailState::Editing {
            return;
        }
        let Some(patch) = self.draft.clone() else {
            return;
        };
        match api.update_book(&self.id, patch) {
            Ok(book) => {
                self.book = Some(book.clone());
                catalog.upsert(book);
                self.draft = None;
                self.notice = Some(Notice::now("Book updated"));
                self.state = DetailState::Viewing;
            }
            Err(e) => {
                log::error!("Error updating book {}: {}", self.id, e);
            }
        }
    }

    /// Open the delete confirmation overlay, from either `Viewing` or
    /// `Editing`.
    pub fn request_delete(&mut self) {
        match self.state {
            DetailState::Viewing => {
                self.resume_editing = false;
                self.state = DetailState::ConfirmingDelete;
            }
            DetailState::Editing => {
                self.resume_editing = true;
                self.state = DetailState::ConfirmingDelete;
            }
            _ => {}
        }
    }

    /// Close the confirmation overlay, returning to the prior state.
    pub fn dismiss_delete(&mut self) {
        if self.state != DetailState::ConfirmingDelete {
            return;
        }
        self.state = if self.resume_editing {
            DetailState::Editing
        } else {
            DetailState::Viewing
        };
    }

    /// Delete the book. Returns `true` when the caller should navigate
    /// away from the view; on failure the overlay is dismissed back to
    /// the prior state and the error is logged.
    pub fn confirm_delete<A: BookApi>(&mut self, api: &mut A, catalog: &mut Catalog) -> bool {
        if self.state != DetailState::ConfirmingDelete {
            return false;
        }
        match api.delete_book(&self.id) {
            Ok(()) => {
                catalog.remove(&self.id);
                self.notice = Some(Notice::now("Book deleted"));
                true
            }
            Err(e) => {
                log::error!("Error deleting book {}: {}", self.id, e);
                self.dismiss_delete();
                false
            }
        }
    }
}
