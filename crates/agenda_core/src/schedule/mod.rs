//! Start-time derivation for agenda rows.
//!
//! # Responsibility
//! - Parse user-typed clock times and duration expressions best-effort.
//! - Walk the ordered agenda and derive each row's displayed start time.
//!
//! # Invariants
//! - Never fails: malformed input degrades to the default start time or to
//!   zero minutes.
//! - Section headers never advance the running clock and carry no time.

pub mod clock;
pub mod duration;
pub mod propagate;
