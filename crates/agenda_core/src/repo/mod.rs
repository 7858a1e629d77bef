//! Repository layer over the local key-value store.
//!
//! # Responsibility
//! - Define the blob access contract used by the state store.
//! - Isolate SQLite query details from session orchestration.
//!
//! # Invariants
//! - Every key lives inside exactly one namespace.
//! - Multi-key writes are atomic.

pub mod kv_repo;
