//! Agenda row model.
//!
//! # Responsibility
//! - Define one printed agenda row (timed activity or section header).
//!
//! # Invariants
//! - `id` is stable and never reused for another row.
//! - Section headers never consume the running clock, even when they carry
//!   duration text.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one agenda row.
pub type AgendaItemId = Uuid;

/// Placeholder label for a freshly inserted timed row.
pub const NEW_ACTIVITY_LABEL: &str = "New Activity";
/// Placeholder label for a freshly inserted section header.
pub const NEW_SECTION_LABEL: &str = "NEW SESSION";
/// Duration assigned to a freshly inserted timed row.
pub const NEW_ACTIVITY_DURATION: &str = "5m";

/// One row of the printed agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Stable row identity, independent of position.
    pub id: AgendaItemId,
    /// Free-text activity label. Headers render it as a banner.
    pub activity: String,
    /// Free-text assignee label, may be empty.
    pub role: String,
    /// Free-text duration expression such as `5m`. May be empty.
    pub duration: String,
    /// Marks a divider row that does not advance the clock.
    #[serde(default)]
    pub is_section_header: bool,
}

impl AgendaItem {
    /// Creates a timed activity row with a generated stable ID.
    pub fn activity(
        activity: impl Into<String>,
        role: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            activity: activity.into(),
            role: role.into(),
            duration: duration.into(),
            is_section_header: false,
        }
    }

    /// Creates a section header row with a generated stable ID.
    pub fn section(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            activity: label.into(),
            role: String::new(),
            duration: String::new(),
            is_section_header: true,
        }
    }

    /// Creates the placeholder row used by list insertion.
    pub fn placeholder(is_section_header: bool) -> Self {
        if is_section_header {
            Self::section(NEW_SECTION_LABEL)
        } else {
            Self::activity(NEW_ACTIVITY_LABEL, "", NEW_ACTIVITY_DURATION)
        }
    }

    /// Returns the same row with a header duration attached.
    ///
    /// Header durations are informational only and never counted.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Returns whether this row advances the running clock.
    pub fn is_timed(&self) -> bool {
        !self.is_section_header && !self.duration.trim().is_empty()
    }
}

/// Single-field replacement applied by `AgendaList::update_field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaFieldUpdate {
    Activity(String),
    Role(String),
    Duration(String),
    SectionHeader(bool),
}

impl AgendaFieldUpdate {
    /// Stable field label for logging.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Activity(_) => "activity",
            Self::Role(_) => "role",
            Self::Duration(_) => "duration",
            Self::SectionHeader(_) => "is_section_header",
        }
    }

    pub(crate) fn apply(self, item: &mut AgendaItem) -> bool {
        match self {
            Self::Activity(value) => replace_if_changed(&mut item.activity, value),
            Self::Role(value) => replace_if_changed(&mut item.role, value),
            Self::Duration(value) => replace_if_changed(&mut item.duration, value),
            Self::SectionHeader(value) => {
                let changed = item.is_section_header != value;
                item.is_section_header = value;
                changed
            }
        }
    }
}

fn replace_if_changed(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
