use crate::domain::model::MemberRow;
use crate::domain::ports::{Field, Modal, RowId, ViewPort};
use std::collections::{HashMap, HashSet};

/// A page held in memory: fields, event checkboxes, member rows and modals.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    fields: HashMap<Field, String>,
    events: Vec<(String, bool)>,
    rows: Vec<(RowId, MemberRow)>,
    next_row_id: RowId,
    open_modals: HashSet<Modal>,
}

impl MemoryView {
    /// A view offering these events, all unchecked.
    pub fn new<I, T>(events: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            events: events.into_iter().map(|e| (e.into(), false)).collect(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: Field, value: &str) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn row(&self, id: RowId) -> Option<&MemberRow> {
        self.rows.iter().find(|(row_id, _)| *row_id == id).map(|(_, row)| row)
    }

    /// Edits a row in place, as typing into it would.
    pub fn row_mut(&mut self, id: RowId) -> Option<&mut MemberRow> {
        self.rows
            .iter_mut()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, row)| row)
    }

    pub fn checked_events(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl ViewPort for MemoryView {
    fn field(&self, field: Field) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_field(&mut self, field: Field, value: &str) {
        self.fields.insert(field, value.to_string());
    }

    fn events(&self) -> Vec<(String, bool)> {
        self.events.clone()
    }

    fn set_event_checked(&mut self, event: &str, checked: bool) {
        if let Some(entry) = self.events.iter_mut().find(|(name, _)| name == event) {
            entry.1 = checked;
        }
    }

    fn rows(&self) -> Vec<(RowId, MemberRow)> {
        self.rows.clone()
    }

    fn add_row(&mut self, row: MemberRow) -> RowId {
        let id = self.next_row_id;
        self.next_row_id += 1;
        self.rows.push((id, row));
        id
    }

    fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|(row_id, _)| *row_id != id);
        self.rows.len() != before
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn set_modal(&mut self, modal: Modal, open: bool) {
        if open {
            self.open_modals.insert(modal);
        } else {
            self.open_modals.remove(&modal);
        }
    }

    fn is_modal_open(&self, modal: Modal) -> bool {
        self.open_modals.contains(&modal)
    }
}
