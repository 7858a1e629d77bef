//! Print and image export surfaces.
//!
//! # Responsibility
//! - Build a print-ready view model of the current agenda state.
//! - Render it as a fixed-width print page.
//! - Hand the page to a presentation-layer image capturer and store the
//!   result under a name derived from the meeting number.
//!
//! # Invariants
//! - Export reads state by shared reference; failures never touch it.
//! - A failed image export leaves no partial file behind.

pub mod image;
pub mod print;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors from export operations.
#[derive(Debug)]
pub enum ExportError {
    /// Presentation layer failed to capture the page.
    Capture(String),
    /// Output file could not be written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capture(message) => write!(f, "image capture failed: {message}"),
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Capture(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}
