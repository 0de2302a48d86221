pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{FileStore, MemoryStore, MemoryView, RecordingNotifier, TracingNotifier};
pub use crate::core::dispatch::{Trigger, TriggerTable};
pub use crate::core::navigator::{Navigator, Screen};
pub use crate::core::rsvp_form::{validate, FormSettings, RsvpForm};
pub use crate::core::theme::{Theme, ThemePreference};
pub use domain::model::{PartyMember, RsvpDraft};
pub use utils::error::{Result, RsvpError};
