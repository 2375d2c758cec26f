//! # Bookrack Architecture
//!
//! Bookrack is a **UI-agnostic book-catalog library**: a persistence and
//! service core on one side, a renderer-free client core on the other,
//! and a thin HTTP surface joining them. The `bookrackd` binary is just
//! wiring.
//!
//! ## The layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http.rs, wired by main.rs)                     │
//! │  - Decodes requests, maps errors to status codes            │
//! │  - The ONLY place that knows about transport framing        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (service.rs)                                 │
//! │  - Thin facade over the store; one method per operation     │
//! │  - Also the BookApi seam the client core consumes           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! │  - Catalog invariants: unique titles, required fields       │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Core (client/)                                      │
//! │  - Catalog: the shared cached book list                     │
//! │  - DetailView: view/edit/delete state machine               │
//! │  - Cards: list summaries                                    │
//! │  - Talks to the service through the BookApi trait only      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principle: no I/O assumptions in core
//!
//! From `service.rs` inward, code takes regular arguments, returns
//! regular `Result` types, and never touches stdout, sockets, or a
//! terminal. The client core is the same: it is the logic of a frontend
//! with the rendering left out, so it can sit behind any UI.
//!
//! ## Module overview
//!
//! - [`model`]: core data types (`Book`, `BookDraft`, `BookPatch`)
//! - [`store`]: storage abstraction and implementations
//! - [`service`]: the service facade and the `BookApi` client seam
//! - [`http`]: axum routes for the REST surface
//! - [`client`]: catalog cache, detail-view state machine, card summaries
//! - [`error`]: error types and status-code mapping

pub mod client;
pub mod error;
pub mod http;
pub mod model;
pub mod service;
pub mod store;
