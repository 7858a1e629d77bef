//! Agenda domain model.
//!
//! # Responsibility
//! - Define the plain value records edited by the agenda session.
//! - Provide hard-coded defaults used on first launch and after reset.
//!
//! # Invariants
//! - Every agenda row is identified by a stable `AgendaItemId`.
//! - List order is the only sequencing truth; no record stores a position.

pub mod agenda;
pub mod defaults;
pub mod meeting;
pub mod officer;
pub mod state;
