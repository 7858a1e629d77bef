//! Raster image export through a presentation-layer capturer.

use crate::export::print::PrintPage;
use crate::export::ExportError;
use crate::model::state::AgendaState;
use log::{error, info};
use std::path::{Path, PathBuf};

const IMAGE_FILE_PREFIX: &str = "STTM-Agenda-M";
const IMAGE_FILE_EXTENSION: &str = "png";

/// Presentation-layer hook that rasterizes a print page.
///
/// Implementations own fonts, layout and pixel encoding; the core only
/// supplies the page content and stores the returned bytes.
pub trait ImageExporter {
    /// Returns encoded image bytes for `page`.
    fn capture(&self, page: &PrintPage) -> Result<Vec<u8>, ExportError>;
}

impl<F> ImageExporter for F
where
    F: Fn(&PrintPage) -> Result<Vec<u8>, ExportError>,
{
    fn capture(&self, page: &PrintPage) -> Result<Vec<u8>, ExportError> {
        self(page)
    }
}

/// Result of a successful image export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageExport {
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Derives the image file name from the meeting number.
///
/// Path separators and control characters are dropped so the name always
/// stays inside the output directory.
pub fn image_file_name(meeting_number: &str) -> String {
    let sanitized = meeting_number
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '/' | '\\' | ':') && !ch.is_control())
        .collect::<String>();
    let sanitized = sanitized.trim_matches('.');
    format!("{IMAGE_FILE_PREFIX}{sanitized}.{IMAGE_FILE_EXTENSION}")
}

/// Captures `state` through `exporter` and writes it into `out_dir`.
///
/// # Errors
/// - Returns `ExportError::Capture` when the capturer fails or returns no
///   bytes; nothing is written.
/// - Returns `ExportError::Io` when the file cannot be written.
pub fn export_image(
    exporter: &impl ImageExporter,
    state: &AgendaState,
    out_dir: impl AsRef<Path>,
) -> Result<ImageExport, ExportError> {
    let page = PrintPage::from_state(state);
    let bytes = match exporter.capture(&page) {
        Ok(bytes) if bytes.is_empty() => {
            Err(ExportError::Capture("capturer returned no data".to_string()))
        }
        other => other,
    }
    .inspect_err(|err| {
        error!("event=export_image module=export status=error stage=capture error={err}");
    })?;

    let file_name = image_file_name(state.info.meeting_number.as_str());
    let path = out_dir.as_ref().join(&file_name);
    let staging = out_dir.as_ref().join(format!(".{file_name}.partial"));
    if let Err(source) = write_then_rename(&staging, &path, &bytes) {
        error!("event=export_image module=export status=error stage=write error={source}");
        return Err(ExportError::Io { path, source });
    }

    info!(
        "event=export_image module=export status=ok bytes={}",
        bytes.len()
    );
    Ok(ImageExport {
        path,
        bytes_written: bytes.len(),
    })
}

/// Writes into `staging` and renames it over `path`.
///
/// A failed write only ever removes the staging file, so an earlier export
/// at `path` survives intact.
fn write_then_rename(staging: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let result = std::fs::write(staging, bytes).and_then(|()| std::fs::rename(staging, path));
    if result.is_err() {
        let _ = std::fs::remove_file(staging);
    }
    result
}
