//! # Client Core
//!
//! The UI-free half of the frontend: everything a rendering layer needs
//! short of actual widgets. Views hold no network code of their own; they
//! go through the [`BookApi`](crate::service::BookApi) seam and reconcile
//! the shared [`Catalog`](state::Catalog) by hand after each mutation.
//!
//! - [`state`]: the Client State Holder, a cached copy of the book list
//!   shared by the list and detail views.
//! - [`detail`]: the per-book view/edit/delete state machine.
//! - [`cards`]: list summaries for card rendering.
//!
//! Failures at the network boundary are logged and swallowed; the only
//! user-visible feedback the views produce is the transient success
//! notice after a save or delete.

use crate::service::BookApi;

pub mod cards;
pub mod detail;
pub mod state;

/// Populate (or re-populate) the catalog from a full list fetch.
///
/// Returns whether the fetch succeeded; on failure the catalog keeps its
/// previous contents and the error is logged.
pub fn refresh_catalog<A: BookApi>(api: &mut A, catalog: &mut state::Catalog) -> bool {
    match api.fetch_books() {
        Ok(books) => {
            catalog.replace_all(books);
            true
        }
        Err(e) => {
            log::error!("Error fetching books: {}", e);
            false
        }
    }
}
