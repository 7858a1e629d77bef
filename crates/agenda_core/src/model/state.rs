//! Full editable agenda state.
//!
//! `AgendaState` is the snapshot unit for undo/redo and the aggregate that
//! the store persists as four independently keyed blobs.

use crate::editor::agenda_list::AgendaList;
use crate::model::defaults::{
    default_agenda, default_meeting_info, default_officers, default_reminders,
};
use crate::model::meeting::MeetingInfo;
use crate::model::officer::Officer;
use serde::{Deserialize, Serialize};

/// Complete editable state of one agenda page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaState {
    pub info: MeetingInfo,
    pub agenda: AgendaList,
    pub officers: Vec<Officer>,
    pub reminders: Vec<String>,
}

impl AgendaState {
    /// Builds the hard-coded first-launch state.
    ///
    /// Agenda row IDs are freshly generated on every call.
    pub fn defaults() -> Self {
        Self {
            info: default_meeting_info(),
            agenda: AgendaList::from_fresh(default_agenda()),
            officers: default_officers(),
            reminders: default_reminders(),
        }
    }
}

impl Default for AgendaState {
    fn default() -> Self {
        Self::defaults()
    }
}
