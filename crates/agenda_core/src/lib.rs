//! Core domain logic for the club meeting agenda.
//! This crate is the single source of truth for agenda invariants.

pub mod config;
pub mod db;
pub mod editor;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;
pub mod session;

pub use config::{AgendaConfig, StorageNamespace, DEFAULT_NAMESPACE};
pub use editor::agenda_list::AgendaList;
pub use editor::{EditError, MoveDirection};
pub use export::image::{export_image, image_file_name, ImageExport, ImageExporter};
pub use export::print::{export_print, render_print, PrintPage, PrintRow};
pub use export::ExportError;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::agenda::{AgendaFieldUpdate, AgendaItem, AgendaItemId};
pub use model::defaults::DEFAULT_START_TIME;
pub use model::meeting::{date_options, DayOfWeek, MeetingField, MeetingInfo, Month};
pub use model::officer::Officer;
pub use model::state::AgendaState;
pub use repo::kv_repo::{KvError, KvRepository, KvResult, SqliteKvRepository};
pub use schedule::clock::ClockTime;
pub use schedule::duration::parse_duration_minutes;
pub use schedule::propagate::{propagate, propagated_times, Propagation, ScheduledItem};
pub use service::state_store::{
    FallbackReason, LoadedState, ResetConfirmation, StateSection, StateStore, StoreError,
    StoreResult,
};
pub use session::{EditorSession, SnapshotHistory, DEFAULT_HISTORY_CAPACITY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
