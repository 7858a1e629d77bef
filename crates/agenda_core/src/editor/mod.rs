//! Ordered agenda list editing.
//!
//! # Responsibility
//! - Own the ordered agenda rows and apply positional edits.
//!
//! # Invariants
//! - Row identities stay unique; no operation renumbers or reuses an ID.
//! - Rows not touched by an operation keep their relative order.

pub mod agenda_list;

use crate::model::agenda::AgendaItemId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from agenda list editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Insert position is beyond the end of the list.
    IndexOutOfBounds { index: usize, len: usize },
    /// Input rows share an identity.
    DuplicateId(AgendaItemId),
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "insert index {index} is out of bounds for length {len}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate agenda item id: {id}"),
        }
    }
}

impl Error for EditError {}

/// Direction for adjacent swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards index 0.
    Up,
    /// Towards the end of the list.
    Down,
}

impl MoveDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Returns the neighbour index, or `None` when it falls off the list.
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Self::Up => index.checked_sub(1)?,
            Self::Down => index.checked_add(1)?,
        };
        (index < len && target < len).then_some(target)
    }
}
