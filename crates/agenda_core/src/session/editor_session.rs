//! Live editing session over one `AgendaState`.

use crate::config::AgendaConfig;
use crate::editor::{EditError, MoveDirection};
use crate::model::agenda::{AgendaFieldUpdate, AgendaItem, AgendaItemId};
use crate::model::meeting::{MeetingField, MeetingInfo};
use crate::model::state::AgendaState;
use crate::schedule::propagate::{propagate, ScheduledItem};
use crate::session::history::{SnapshotHistory, DEFAULT_HISTORY_CAPACITY};
use log::debug;

/// Explicit state container owned by a front-end.
///
/// Every edit mutates the live state, records one snapshot and marks the
/// session dirty. Derived start times are recomputed on each `schedule()`
/// call, so they always reflect the latest list and start time.
#[derive(Debug, Clone)]
pub struct EditorSession {
    state: AgendaState,
    history: SnapshotHistory<AgendaState>,
    dirty: bool,
}

impl EditorSession {
    /// Starts a session with default history capacity.
    pub fn new(state: AgendaState) -> Self {
        Self::with_capacity(state, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_config(state: AgendaState, config: &AgendaConfig) -> Self {
        Self::with_capacity(state, config.history_capacity)
    }

    pub fn with_capacity(state: AgendaState, history_capacity: usize) -> Self {
        let history = SnapshotHistory::new(state.clone(), history_capacity);
        Self {
            state,
            history,
            dirty: false,
        }
    }

    pub fn state(&self) -> &AgendaState {
        &self.state
    }

    pub fn info(&self) -> &MeetingInfo {
        &self.state.info
    }

    pub fn agenda(&self) -> &[AgendaItem] {
        self.state.agenda.items()
    }

    /// Derived start times for the current list and meeting start time.
    pub fn schedule(&self) -> Vec<ScheduledItem<'_>> {
        propagate(self.state.info.time.as_str(), self.state.agenda.items()).collect()
    }

    /// Whether edits happened since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Replaces the live state and restarts history (load/reset paths).
    pub fn replace_state(&mut self, state: AgendaState) {
        self.history.reset(state.clone());
        self.state = state;
        self.dirty = false;
    }

    /// Inserts a placeholder row and returns its new ID.
    ///
    /// # Errors
    /// - Returns `EditError::IndexOutOfBounds` when `index > len`.
    pub fn insert_item(
        &mut self,
        index: usize,
        is_section_header: bool,
    ) -> Result<AgendaItemId, EditError> {
        let id = self.state.agenda.insert_at(index, is_section_header)?.id;
        self.commit("agenda_insert");
        Ok(id)
    }

    /// Removes one row by ID. Returns `None` when absent.
    pub fn delete_item(&mut self, id: AgendaItemId) -> Option<AgendaItem> {
        let removed = self.state.agenda.delete_by_id(id)?;
        self.commit("agenda_delete");
        Some(removed)
    }

    pub fn move_item(&mut self, index: usize, direction: MoveDirection) -> bool {
        let moved = self.state.agenda.move_adjacent(index, direction);
        self.commit_if("agenda_move", moved)
    }

    pub fn update_item(&mut self, id: AgendaItemId, update: AgendaFieldUpdate) -> bool {
        let changed = self.state.agenda.update_field(id, update);
        self.commit_if("agenda_update", changed)
    }

    /// Replaces one meeting field. Editing `MeetingField::Time` reseeds the
    /// running clock for every row.
    pub fn update_meeting(&mut self, field: MeetingField, value: impl Into<String>) -> bool {
        let changed = self.state.info.set_field(field, value);
        self.commit_if("meeting_update", changed)
    }

    /// Renames the officer at `index`. Roles are fixed.
    pub fn set_officer_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        let name = name.into();
        let changed = match self.state.officers.get_mut(index) {
            Some(officer) if officer.name != name => {
                officer.name = name;
                true
            }
            _ => false,
        };
        self.commit_if("officer_update", changed)
    }

    /// Appends a reminder and returns its index.
    pub fn add_reminder(&mut self, text: impl Into<String>) -> usize {
        self.state.reminders.push(text.into());
        self.commit("reminder_add");
        self.state.reminders.len() - 1
    }

    pub fn update_reminder(&mut self, index: usize, text: impl Into<String>) -> bool {
        let text = text.into();
        let changed = match self.state.reminders.get_mut(index) {
            Some(reminder) if *reminder != text => {
                *reminder = text;
                true
            }
            _ => false,
        };
        self.commit_if("reminder_update", changed)
    }

    pub fn remove_reminder(&mut self, index: usize) -> Option<String> {
        if index >= self.state.reminders.len() {
            return None;
        }
        let removed = self.state.reminders.remove(index);
        self.commit("reminder_remove");
        Some(removed)
    }

    /// Restores the previous snapshot. Returns `false` at the oldest one.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            debug!("event=history_undo module=session status=noop");
            return false;
        };
        self.state = snapshot.clone();
        self.dirty = true;
        debug!("event=history_undo module=session status=ok");
        true
    }

    /// Re-applies the next snapshot. Returns `false` at the newest one.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            debug!("event=history_redo module=session status=noop");
            return false;
        };
        self.state = snapshot.clone();
        self.dirty = true;
        debug!("event=history_redo module=session status=ok");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn commit_if(&mut self, event: &str, changed: bool) -> bool {
        if changed {
            self.commit(event);
        }
        changed
    }

    fn commit(&mut self, event: &str) {
        self.history.record(self.state.clone());
        self.dirty = true;
        debug!(
            "event={} module=session status=ok rows={} snapshots={}",
            event,
            self.state.agenda.len(),
            self.history.len()
        );
    }
}
