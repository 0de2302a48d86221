pub mod dispatch;
pub mod navigator;
pub mod rsvp_form;
pub mod theme;

pub use crate::domain::model::{AgeGroup, MemberRow, Overall, PartyMember, RsvpDraft};
pub use crate::domain::ports::{
    ConfigProvider, Field, KeyValueStore, Modal, Notifier, RowId, Severity, ViewPort,
};
pub use crate::utils::error::Result;
