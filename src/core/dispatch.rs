use crate::core::rsvp_form::RsvpForm;
use crate::core::{KeyValueStore, Notifier, RowId, ViewPort};
use crate::utils::error::{Result, RsvpError};
use std::collections::HashMap;

/// A UI event the RSVP page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    OpenRsvp,
    CloseRsvp,
    CloseSuccess,
    Escape,
    AddMember,
    RemoveMember(RowId),
    SaveDraft,
    /// Ctrl+S / Cmd+S
    SaveShortcut,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    OpenRsvp,
    CloseRsvp,
    CloseSuccess,
    Escape,
    AddMember,
    RemoveMember,
    SaveDraft,
    SaveShortcut,
    Submit,
}

impl Trigger {
    pub fn kind(&self) -> TriggerKind {
        match self {
            Trigger::OpenRsvp => TriggerKind::OpenRsvp,
            Trigger::CloseRsvp => TriggerKind::CloseRsvp,
            Trigger::CloseSuccess => TriggerKind::CloseSuccess,
            Trigger::Escape => TriggerKind::Escape,
            Trigger::AddMember => TriggerKind::AddMember,
            Trigger::RemoveMember(_) => TriggerKind::RemoveMember,
            Trigger::SaveDraft => TriggerKind::SaveDraft,
            Trigger::SaveShortcut => TriggerKind::SaveShortcut,
            Trigger::Submit => TriggerKind::Submit,
        }
    }

    /// The member row a trigger acts on, if any.
    pub fn target_row(&self) -> Option<RowId> {
        match self {
            Trigger::RemoveMember(row) => Some(*row),
            _ => None,
        }
    }
}

pub type Handler<V, S, N> = fn(&mut RsvpForm<V, S, N>, Option<RowId>) -> Result<()>;

/// Maps each trigger kind to the form operation it runs. Built once per page.
pub struct TriggerTable<V: ViewPort, S: KeyValueStore, N: Notifier> {
    handlers: HashMap<TriggerKind, Handler<V, S, N>>,
}

impl<V: ViewPort, S: KeyValueStore, N: Notifier> TriggerTable<V, S, N> {
    pub fn new() -> Self {
        let mut handlers: HashMap<TriggerKind, Handler<V, S, N>> = HashMap::new();
        handlers.insert(TriggerKind::OpenRsvp, open_rsvp::<V, S, N>);
        handlers.insert(TriggerKind::CloseRsvp, close_rsvp::<V, S, N>);
        handlers.insert(TriggerKind::CloseSuccess, close_success::<V, S, N>);
        handlers.insert(TriggerKind::Escape, escape::<V, S, N>);
        handlers.insert(TriggerKind::AddMember, add_member::<V, S, N>);
        handlers.insert(TriggerKind::RemoveMember, remove_member::<V, S, N>);
        handlers.insert(TriggerKind::SaveDraft, save_draft::<V, S, N>);
        handlers.insert(TriggerKind::SaveShortcut, save_draft::<V, S, N>);
        handlers.insert(TriggerKind::Submit, submit::<V, S, N>);
        Self { handlers }
    }

    pub fn handles(&self, kind: TriggerKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn dispatch(&self, form: &mut RsvpForm<V, S, N>, trigger: Trigger) -> Result<()> {
        let handler = self
            .handlers
            .get(&trigger.kind())
            .ok_or_else(|| RsvpError::UnhandledTriggerError(format!("{:?}", trigger.kind())))?;

        tracing::debug!("Dispatching {:?}", trigger);
        handler(form, trigger.target_row())
    }
}

impl<V: ViewPort, S: KeyValueStore, N: Notifier> Default for TriggerTable<V, S, N> {
    fn default() -> Self {
        Self::new()
    }
}

fn open_rsvp<V: ViewPort, S: KeyValueStore, N: Notifier>(
    form: &mut RsvpForm<V, S, N>,
    _: Option<RowId>,
) -> Result<()> {
    form.open_rsvp();
    Ok(())
}

fn close_rsvp<V: ViewPort, S: KeyValueStore, N: Notifier>(
    form: &mut RsvpForm<V, S, N>,
    _: Option<RowId>,
) -> Result<()> {
    form.close_rsvp();
    Ok(())
}

fn close_success<V: ViewPort, S: KeyValueStore, N: Notifier>(
    form: &mut RsvpForm<V, S, N>,
    _: Option<RowId>,
) -> Result<()> {
    form.close_success();
    Ok(())
}

fn escape<V: ViewPort, S: KeyValueStore, N: Notifier>(
    form: &mut RsvpForm<V, S, N>,
    _: Option<RowId>,
) -> Result<()> {
    form.escape();
    Ok(())
}

fn add_member<V: ViewPort, S: KeyValueStore, N: Notifier>(
    form: &mut RsvpForm<V, S, N>,
    _: Option<RowId>,
) -> Result<()> {
    form.add_member(None);
    Ok(())
}

fn remove_member<V: ViewPort, S: KeyValueStore, N: Notifier>(
    form: &mut RsvpForm<V, S, N>,
    row: Option<RowId>,
) -> Result<()> {
    row.map_or(Ok(()), |row| form.remove_member(row))
}

fn save_draft<V: ViewPort, S: KeyValueStore, N: Notifier>(
    form: &mut RsvpForm<V, S, N>,
    _: Option<RowId>,
) -> Result<()> {
    form.save_draft().map(|_| ())
}

fn submit<V: ViewPort, S: KeyValueStore, N: Notifier>(
    form: &mut RsvpForm<V, S, N>,
    _: Option<RowId>,
) -> Result<()> {
    form.submit().map(|_| ())
}
