//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one opaque `AgendaEditor` session handle to Dart via FRB.
//! - Flatten core read models into plain DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported through `ActionResponse`, never thrown.
//! - The editor owns its session; no process-wide agenda state exists.

use agenda_core::db::open_db;
use agenda_core::{
    core_version as core_version_inner, date_options as date_options_inner,
    image_file_name as image_file_name_inner, init_logging as init_logging_inner,
    ping as ping_inner, render_print, AgendaConfig, AgendaFieldUpdate, AgendaItemId, AgendaState,
    DayOfWeek, EditorSession, MeetingField, MeetingInfo, Month, MoveDirection, ResetConfirmation,
    SqliteKvRepository, StateStore, StoreResult,
};
use log::warn;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Day-of-week labels for the date selector.
#[flutter_rust_bridge::frb(sync)]
pub fn day_options() -> Vec<String> {
    DayOfWeek::all()
        .iter()
        .map(|day| day.label().to_string())
        .collect()
}

/// Month labels for the date selector.
#[flutter_rust_bridge::frb(sync)]
pub fn month_options() -> Vec<String> {
    Month::all()
        .iter()
        .map(|month| month.label().to_string())
        .collect()
}

/// Day-of-month labels (`1..=31`) for the date selector.
#[flutter_rust_bridge::frb(sync)]
pub fn date_options() -> Vec<String> {
    date_options_inner()
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation changed or persisted state.
    pub ok: bool,
    /// Affected agenda row ID, when the operation targets one.
    pub item_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            item_id: None,
            message: message.into(),
        }
    }

    fn success_with_item(message: impl Into<String>, item_id: AgendaItemId) -> Self {
        Self {
            ok: true,
            item_id: Some(item_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            message: message.into(),
        }
    }

    fn from_changed(changed: bool, done: &str, noop: &str) -> Self {
        if changed {
            Self::success(done)
        } else {
            Self::failure(noop)
        }
    }
}

/// One agenda row with its derived display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaRowView {
    pub item_id: String,
    pub activity: String,
    pub role: String,
    pub duration: String,
    pub is_section_header: bool,
    /// Computed start time; empty for section headers.
    pub display_time: String,
    /// When true the UI shows an editable start-time field instead.
    pub is_clock_seed: bool,
}

/// Meeting metadata as shown in the header and sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingInfoView {
    pub meeting_number: String,
    pub theme: String,
    pub introduction: String,
    pub day: String,
    pub month: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub location_en: String,
    pub word_of_the_day: String,
    pub logo_url: String,
}

impl From<&MeetingInfo> for MeetingInfoView {
    fn from(info: &MeetingInfo) -> Self {
        Self {
            meeting_number: info.meeting_number.clone(),
            theme: info.theme.clone(),
            introduction: info.introduction.clone(),
            day: info.day.clone(),
            month: info.month.clone(),
            date: info.date.clone(),
            time: info.time.clone(),
            location: info.location.clone(),
            location_en: info.location_en.clone(),
            word_of_the_day: info.word_of_the_day.clone(),
            logo_url: info.logo_url.clone(),
        }
    }
}

/// Officer roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficerView {
    pub role: String,
    pub name: String,
}

/// Full render model for one frame of the editor screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaView {
    pub info: MeetingInfoView,
    pub rows: Vec<AgendaRowView>,
    pub officers: Vec<OfficerView>,
    pub reminders: Vec<String>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub has_unsaved_changes: bool,
}

/// Opaque editing session bound to one store file and namespace.
#[flutter_rust_bridge::frb(opaque)]
pub struct AgendaEditor {
    db_path: PathBuf,
    config: AgendaConfig,
    session: EditorSession,
}

impl AgendaEditor {
    /// Opens an editor, loading persisted state or defaults.
    ///
    /// # FFI contract
    /// - Never fails: an unreadable store yields defaults; the failure
    ///   surfaces later through `save`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn open(db_path: String, namespace: Option<String>) -> AgendaEditor {
        let config = match namespace {
            Some(namespace) => AgendaConfig::default().with_namespace(namespace),
            None => AgendaConfig::default(),
        };
        let db_path = PathBuf::from(db_path.trim());

        let state = match with_store(&db_path, &config, |store| Ok(store.load())) {
            Ok(loaded) => loaded.state,
            Err(err) => {
                warn!("event=editor_open module=ffi status=fallback error={err}");
                AgendaState::defaults()
            }
        };
        let session = EditorSession::with_config(state, &config);
        Self {
            db_path,
            config,
            session,
        }
    }

    /// Returns the current render model with freshly derived times.
    #[flutter_rust_bridge::frb(sync)]
    pub fn view(&self) -> AgendaView {
        let state = self.session.state();
        let rows = self
            .session
            .schedule()
            .into_iter()
            .map(|scheduled| AgendaRowView {
                item_id: scheduled.item.id.to_string(),
                activity: scheduled.item.activity.clone(),
                role: scheduled.item.role.clone(),
                duration: scheduled.item.duration.clone(),
                is_section_header: scheduled.item.is_section_header,
                display_time: scheduled.display_time(),
                is_clock_seed: scheduled.is_clock_seed(),
            })
            .collect();

        AgendaView {
            info: MeetingInfoView::from(&state.info),
            rows,
            officers: state
                .officers
                .iter()
                .map(|officer| OfficerView {
                    role: officer.role.clone(),
                    name: officer.name.clone(),
                })
                .collect(),
            reminders: state.reminders.clone(),
            can_undo: self.session.can_undo(),
            can_redo: self.session.can_redo(),
            has_unsaved_changes: self.session.is_dirty(),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn insert_item(&mut self, index: u32, is_section_header: bool) -> ActionResponse {
        match self.session.insert_item(index as usize, is_section_header) {
            Ok(item_id) => ActionResponse::success_with_item("Item inserted.", item_id),
            Err(err) => ActionResponse::failure(format!("insert_item failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_item(&mut self, item_id: String) -> ActionResponse {
        let id = match parse_item_id(&item_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        match self.session.delete_item(id) {
            Some(_) => ActionResponse::success_with_item("Item deleted.", id),
            None => ActionResponse::failure(format!("item not found: {id}")),
        }
    }

    /// Swaps the row at `index` with its upper (`up=true`) or lower neighbour.
    #[flutter_rust_bridge::frb(sync)]
    pub fn move_item(&mut self, index: u32, up: bool) -> ActionResponse {
        let direction = if up {
            MoveDirection::Up
        } else {
            MoveDirection::Down
        };
        ActionResponse::from_changed(
            self.session.move_item(index as usize, direction),
            "Item moved.",
            "Item is already at the edge.",
        )
    }

    /// Replaces one text field (`activity|role|duration`) of a row.
    #[flutter_rust_bridge::frb(sync)]
    pub fn update_item(&mut self, item_id: String, field: String, value: String) -> ActionResponse {
        let id = match parse_item_id(&item_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let update = match field.trim().to_ascii_lowercase().as_str() {
            "activity" => AgendaFieldUpdate::Activity(value),
            "role" => AgendaFieldUpdate::Role(value),
            "duration" => AgendaFieldUpdate::Duration(value),
            other => return ActionResponse::failure(format!("unknown item field: {other}")),
        };
        ActionResponse::from_changed(
            self.session.update_item(id, update),
            "Item updated.",
            "Item unchanged or not found.",
        )
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_section_header(&mut self, item_id: String, is_section_header: bool) -> ActionResponse {
        let id = match parse_item_id(&item_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        ActionResponse::from_changed(
            self.session
                .update_item(id, AgendaFieldUpdate::SectionHeader(is_section_header)),
            "Item updated.",
            "Item unchanged or not found.",
        )
    }

    /// Replaces one meeting field by snake_case name.
    #[flutter_rust_bridge::frb(sync)]
    pub fn update_meeting(&mut self, field: String, value: String) -> ActionResponse {
        let Some(field) = MeetingField::parse(&field) else {
            return ActionResponse::failure(format!("unknown meeting field: {}", field.trim()));
        };
        ActionResponse::from_changed(
            self.session.update_meeting(field, value),
            "Meeting updated.",
            "Meeting unchanged.",
        )
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_officer_name(&mut self, index: u32, name: String) -> ActionResponse {
        ActionResponse::from_changed(
            self.session.set_officer_name(index as usize, name),
            "Officer updated.",
            "Officer unchanged or not found.",
        )
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add_reminder(&mut self, text: String) -> ActionResponse {
        let index = self.session.add_reminder(text);
        ActionResponse::success(format!("Reminder {} added.", index + 1))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn update_reminder(&mut self, index: u32, text: String) -> ActionResponse {
        ActionResponse::from_changed(
            self.session.update_reminder(index as usize, text),
            "Reminder updated.",
            "Reminder unchanged or not found.",
        )
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn remove_reminder(&mut self, index: u32) -> ActionResponse {
        ActionResponse::from_changed(
            self.session.remove_reminder(index as usize).is_some(),
            "Reminder removed.",
            "Reminder not found.",
        )
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn undo(&mut self) -> ActionResponse {
        ActionResponse::from_changed(self.session.undo(), "Undone.", "Nothing to undo.")
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn redo(&mut self) -> ActionResponse {
        ActionResponse::from_changed(self.session.redo(), "Redone.", "Nothing to redo.")
    }

    /// Persists the current state.
    #[flutter_rust_bridge::frb(sync)]
    pub fn save(&mut self) -> ActionResponse {
        let state = self.session.state();
        match with_store(&self.db_path, &self.config, |store| store.save(state)) {
            Ok(()) => {
                self.session.mark_saved();
                ActionResponse::success("Saved.")
            }
            Err(err) => ActionResponse::failure(format!("save failed: {err}")),
        }
    }

    /// Clears persisted data and restores defaults when `confirmed`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn reset(&mut self, confirmed: bool) -> ActionResponse {
        let confirmation = ResetConfirmation::from(confirmed);
        match with_store(&self.db_path, &self.config, |store| store.reset(confirmation)) {
            Ok(state) => {
                self.session.replace_state(state);
                ActionResponse::success("Reset to defaults.")
            }
            Err(err) => ActionResponse::failure(format!("reset failed: {err}")),
        }
    }

    /// Print-formatted rendering of the current state.
    #[flutter_rust_bridge::frb(sync)]
    pub fn print_page(&self) -> String {
        render_print(self.session.state())
    }

    /// File name the UI should use when saving a captured image.
    #[flutter_rust_bridge::frb(sync)]
    pub fn image_file_name(&self) -> String {
        image_file_name_inner(self.session.info().meeting_number.as_str())
    }
}

fn parse_item_id(raw: &str) -> Result<AgendaItemId, ActionResponse> {
    Uuid::parse_str(raw.trim())
        .map_err(|err| ActionResponse::failure(format!("invalid item id `{}`: {err}", raw.trim())))
}

fn with_store<T>(
    db_path: &Path,
    config: &AgendaConfig,
    f: impl FnOnce(&StateStore<SqliteKvRepository<'_>>) -> StoreResult<T>,
) -> Result<T, String> {
    let conn = open_db(db_path).map_err(|err| format!("agenda DB open failed: {err}"))?;
    let repo = SqliteKvRepository::try_new(&conn)
        .map_err(|err| format!("agenda repo init failed: {err}"))?;
    let store = StateStore::new(repo, config.namespace.clone());
    f(&store).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, date_options, day_options, init_logging, month_options, ping, AgendaEditor,
    };

    fn editor_in(dir: &tempfile::TempDir) -> AgendaEditor {
        let path = dir.path().join("agenda.sqlite3");
        AgendaEditor::open(path.to_string_lossy().into_owned(), None)
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_log_dir() {
        let error = init_logging("info".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn selection_options_have_expected_lengths() {
        assert_eq!(day_options().len(), 7);
        assert_eq!(month_options().len(), 12);
        assert_eq!(date_options().len(), 31);
    }

    #[test]
    fn fresh_editor_shows_defaults_with_times() {
        let dir = tempfile::tempdir().unwrap();
        let view = editor_in(&dir).view();

        assert_eq!(view.info.meeting_number, "258");
        assert_eq!(view.rows.len(), 24);
        assert!(view.rows[0].is_clock_seed);
        assert_eq!(view.rows[1].display_time, "02:45");
        assert!(view.rows[7].is_section_header);
        assert!(view.rows[7].display_time.is_empty());
        assert!(!view.can_undo);
    }

    #[test]
    fn edits_persist_only_after_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = editor_in(&dir);
        let inserted = editor.insert_item(0, false);
        assert!(inserted.ok, "{}", inserted.message);
        let item_id = inserted.item_id.unwrap();
        assert!(editor
            .update_item(item_id.clone(), "activity".to_string(), "Warmup".to_string())
            .ok);

        assert_eq!(editor_in(&dir).view().rows.len(), 24);

        let saved = editor.save();
        assert!(saved.ok, "{}", saved.message);
        assert!(!editor.view().has_unsaved_changes);

        let reopened = editor_in(&dir).view();
        assert_eq!(reopened.rows.len(), 25);
        assert_eq!(reopened.rows[0].item_id, item_id);
        assert_eq!(reopened.rows[0].activity, "Warmup");
    }

    #[test]
    fn invalid_inputs_are_reported_not_thrown() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = editor_in(&dir);

        assert!(!editor.delete_item("not-a-uuid".to_string()).ok);
        assert!(!editor.insert_item(99, false).ok);
        assert!(!editor.move_item(0, true).ok);
        assert!(!editor.update_meeting("venue".to_string(), "x".to_string()).ok);
        let first = editor.view().rows[0].item_id.clone();
        assert!(!editor
            .update_item(first, "color".to_string(), "red".to_string())
            .ok);
        assert!(!editor.undo().ok);
    }

    #[test]
    fn reset_requires_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = editor_in(&dir);
        editor.update_meeting("meeting_number".to_string(), "301".to_string());
        assert!(editor.save().ok);

        assert!(!editor.reset(false).ok);
        assert_eq!(editor.view().info.meeting_number, "301");

        assert!(editor.reset(true).ok);
        assert_eq!(editor.view().info.meeting_number, "258");
        assert_eq!(editor_in(&dir).view().info.meeting_number, "258");
        assert_eq!(editor.image_file_name(), "STTM-Agenda-M258.png");
    }

    #[test]
    fn undo_redo_round_trip_through_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = editor_in(&dir);
        assert!(editor.update_meeting("time".to_string(), "19:00".to_string()).ok);
        assert_eq!(editor.view().rows[1].display_time, "19:15");

        assert!(editor.undo().ok);
        assert_eq!(editor.view().rows[1].display_time, "02:45");
        assert!(editor.redo().ok);
        assert_eq!(editor.view().rows[1].display_time, "19:15");
        assert!(editor.print_page().contains("19:15"));
    }
}
