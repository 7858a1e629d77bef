//! Editing session state container.
//!
//! # Responsibility
//! - Own the live `AgendaState` for one front-end session.
//! - Record full-state snapshots for bounded undo/redo.
//!
//! # Invariants
//! - The session is the only writer of its state; front-ends hold it by
//!   reference instead of sharing ambient globals.
//! - Every effective edit records exactly one snapshot; no-op edits record
//!   nothing.

pub mod editor_session;
pub mod history;

pub use editor_session::EditorSession;
pub use history::{SnapshotHistory, DEFAULT_HISTORY_CAPACITY};
