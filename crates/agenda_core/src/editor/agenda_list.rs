//! Agenda list editor over an ordered `Vec<AgendaItem>`.

use crate::editor::{EditError, MoveDirection};
use crate::model::agenda::{AgendaFieldUpdate, AgendaItem, AgendaItemId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered agenda rows with identity-preserving edits.
///
/// Serialized as a plain array; decoding rejects duplicate IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AgendaItem>", into = "Vec<AgendaItem>")]
pub struct AgendaList {
    items: Vec<AgendaItem>,
}

impl AgendaList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing rows.
    ///
    /// # Errors
    /// - Returns `EditError::DuplicateId` when two rows share an ID.
    pub fn from_items(items: Vec<AgendaItem>) -> Result<Self, EditError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(EditError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Wraps rows whose IDs were all generated in this process.
    pub(crate) fn from_fresh(items: Vec<AgendaItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[AgendaItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<AgendaItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: AgendaItemId) -> Option<&AgendaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position_of(&self, id: AgendaItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Inserts a placeholder row at `index` (`0..=len`).
    ///
    /// # Errors
    /// - Returns `EditError::IndexOutOfBounds` when `index > len`.
    pub fn insert_at(
        &mut self,
        index: usize,
        is_section_header: bool,
    ) -> Result<&AgendaItem, EditError> {
        let len = self.items.len();
        if index > len {
            return Err(EditError::IndexOutOfBounds { index, len });
        }

        let item = AgendaItem::placeholder(is_section_header);
        debug!(
            "event=agenda_insert module=editor status=ok index={} id={} section_header={}",
            index, item.id, is_section_header
        );
        self.items.insert(index, item);
        Ok(&self.items[index])
    }

    /// Removes the row with `id`. Returns `None` when no row matches.
    pub fn delete_by_id(&mut self, id: AgendaItemId) -> Option<AgendaItem> {
        let Some(index) = self.position_of(id) else {
            debug!("event=agenda_delete module=editor status=not_found id={id}");
            return None;
        };
        debug!("event=agenda_delete module=editor status=ok index={index} id={id}");
        Some(self.items.remove(index))
    }

    /// Swaps the row at `index` with its neighbour.
    ///
    /// Returns `false` without changes when either position is out of range.
    pub fn move_adjacent(&mut self, index: usize, direction: MoveDirection) -> bool {
        let Some(target) = direction.target(index, self.items.len()) else {
            debug!(
                "event=agenda_move module=editor status=noop index={} direction={}",
                index,
                direction.label()
            );
            return false;
        };
        self.items.swap(index, target);
        debug!(
            "event=agenda_move module=editor status=ok index={} target={} direction={}",
            index,
            target,
            direction.label()
        );
        true
    }

    /// Replaces one field of the row with `id`.
    ///
    /// Returns `false` when no row matches or the value is unchanged.
    pub fn update_field(&mut self, id: AgendaItemId, update: AgendaFieldUpdate) -> bool {
        let field = update.field_name();
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=agenda_update module=editor status=not_found id={id} field={field}");
            return false;
        };
        update.apply(item)
    }
}

impl TryFrom<Vec<AgendaItem>> for AgendaList {
    type Error = EditError;

    fn try_from(value: Vec<AgendaItem>) -> Result<Self, Self::Error> {
        Self::from_items(value)
    }
}

impl From<AgendaList> for Vec<AgendaItem> {
    fn from(value: AgendaList) -> Self {
        value.items
    }
}
