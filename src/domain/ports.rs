use crate::domain::model::MemberRow;
use crate::utils::error::Result;

/// Handle of one editable member row, stable until the row is removed.
pub type RowId = u64;

/// Free-text inputs of the RSVP form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FamilyName,
    ContactPhone,
    City,
    Date,
    Time,
    Transport,
}

impl Field {
    pub const TRIP: [Field; 4] = [Field::City, Field::Date, Field::Time, Field::Transport];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    Rsvp,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// What the form reads from and writes to the page.
pub trait ViewPort {
    fn field(&self, field: Field) -> String;
    fn set_field(&mut self, field: Field, value: &str);

    /// Every event checkbox in display order, with its checked state.
    fn events(&self) -> Vec<(String, bool)>;
    fn set_event_checked(&mut self, event: &str, checked: bool);

    /// Member rows in display order.
    fn rows(&self) -> Vec<(RowId, MemberRow)>;
    fn add_row(&mut self, row: MemberRow) -> RowId;
    /// Returns false when no row has this id.
    fn remove_row(&mut self, id: RowId) -> bool;
    fn clear_rows(&mut self);

    fn row_count(&self) -> usize {
        self.rows().len()
    }

    fn set_modal(&mut self, modal: Modal, open: bool);
    fn is_modal_open(&self, modal: Modal) -> bool;
}

/// Synchronous string store, the shape of the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

pub trait ConfigProvider {
    fn storage_key(&self) -> &str;
    fn events(&self) -> &[String];
    fn default_events(&self) -> &[String];
    fn family_name(&self) -> &str;
    fn contact_phone(&self) -> &str;
}
