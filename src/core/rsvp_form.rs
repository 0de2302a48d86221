use crate::core::{
    ConfigProvider, Field, KeyValueStore, MemberRow, Modal, Notifier, Overall, PartyMember, RowId,
    RsvpDraft, Severity, ViewPort,
};
use crate::utils::error::{Result, RsvpError};

pub const STORAGE_KEY: &str = "vplanit_rsvp";
pub const DEFAULT_EVENTS: [&str; 2] = ["Haldi", "Wedding"];

const SAVED_MESSAGE: &str = "Draft saved successfully!";
const LOADED_MESSAGE: &str = "Draft loaded from previous session";
const SHORTCUT_TIP: &str = "Tip: Use Ctrl+S to save draft";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub storage_key: String,
    /// Events re-checked after a submission.
    pub default_events: Vec<String>,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            default_events: DEFAULT_EVENTS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl FormSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            storage_key: config.storage_key().to_string(),
            default_events: config.default_events().to_vec(),
        }
    }
}

/// Checks a snapshot and returns every violation, in rule order.
///
/// The per-row check only fires for drafts built by hand: snapshots taken
/// from the form have already dropped nameless rows.
pub fn validate(draft: &RsvpDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if draft.family_name.is_empty() {
        errors.push("Family name is required".to_string());
    }
    if draft.members.is_empty() {
        errors.push("Add at least one guest".to_string());
    }
    for (i, member) in draft.members.iter().enumerate() {
        if member.name.is_empty() {
            errors.push(format!("Guest name missing in row {}", i + 1));
        }
    }

    errors
}

/// The RSVP form: reads view state into drafts and writes drafts back.
pub struct RsvpForm<V: ViewPort, S: KeyValueStore, N: Notifier> {
    view: V,
    store: S,
    notifier: N,
    settings: FormSettings,
}

impl<V: ViewPort, S: KeyValueStore, N: Notifier> RsvpForm<V, S, N> {
    pub fn new(view: V, store: S, notifier: N, settings: FormSettings) -> Self {
        Self {
            view,
            store,
            notifier,
            settings,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn into_parts(self) -> (V, S, N) {
        (self.view, self.store, self.notifier)
    }

    /// Page start-up: seed a row, restore any stored draft, hint at the shortcut.
    pub fn init(&mut self) -> Option<RsvpDraft> {
        self.ensure_one_row();
        let payload = self.read_payload();
        let stored = payload.is_some();

        let draft = payload.and_then(|payload| self.restore(&payload));
        self.ensure_one_row();

        if !stored {
            self.notifier.notify(SHORTCUT_TIP, Severity::Info);
        }
        draft
    }

    pub fn collect_snapshot(&self) -> RsvpDraft {
        let selected_events = self
            .view
            .events()
            .into_iter()
            .filter(|(_, checked)| *checked)
            .map(|(name, _)| name)
            .collect();

        let members: Vec<PartyMember> = self
            .view
            .rows()
            .iter()
            .map(|(_, row)| row.to_member())
            .filter(|member| !member.name.is_empty())
            .collect();

        RsvpDraft {
            family_name: self.view.field(Field::FamilyName).trim().to_string(),
            contact_phone: self.view.field(Field::ContactPhone).trim().to_string(),
            selected_events,
            overall: Overall {
                city: self.view.field(Field::City).trim().to_string(),
                date: self.view.field(Field::Date),
                time: self.view.field(Field::Time),
                transport: self.view.field(Field::Transport),
            },
            members,
        }
    }

    pub fn save_draft(&mut self) -> Result<RsvpDraft> {
        let draft = self.checked_snapshot()?;
        self.persist(&draft)?;

        tracing::info!(
            "Saved RSVP draft for '{}' with {} guest(s)",
            draft.family_name,
            draft.members.len()
        );
        self.notifier.notify(SAVED_MESSAGE, Severity::Info);
        Ok(draft)
    }

    /// Persists under the draft key, then swaps to the confirmation modal and
    /// resets everything except the family's identity fields.
    pub fn submit(&mut self) -> Result<RsvpDraft> {
        let draft = self.checked_snapshot()?;
        self.persist(&draft)?;

        tracing::info!(
            "Submitted RSVP for '{}': {} guest(s), events [{}]",
            draft.family_name,
            draft.members.len(),
            draft.selected_events.join(", ")
        );

        self.view.set_modal(Modal::Rsvp, false);
        self.view.set_modal(Modal::Success, true);
        self.reset_after_submit();
        Ok(draft)
    }

    pub fn load_draft(&mut self) -> Option<RsvpDraft> {
        let draft = self
            .read_payload()
            .and_then(|payload| self.restore(&payload));
        self.ensure_one_row();
        draft
    }

    pub fn add_member(&mut self, prefill: Option<&PartyMember>) -> RowId {
        let row = prefill.map(MemberRow::from).unwrap_or_else(MemberRow::blank);
        self.view.add_row(row)
    }

    pub fn remove_member(&mut self, row: RowId) -> Result<()> {
        if self.view.row_count() <= 1 {
            let err = RsvpError::MinimumGuestError;
            self.notifier.notify(&err.to_string(), Severity::Error);
            return Err(err);
        }

        if !self.view.remove_row(row) {
            return Err(RsvpError::UnknownRowError(row));
        }
        Ok(())
    }

    pub fn open_rsvp(&mut self) {
        self.view.set_modal(Modal::Rsvp, true);
    }

    pub fn close_rsvp(&mut self) {
        self.view.set_modal(Modal::Rsvp, false);
    }

    pub fn close_success(&mut self) {
        self.view.set_modal(Modal::Success, false);
    }

    /// Closes whichever modals are open.
    pub fn escape(&mut self) {
        for modal in [Modal::Rsvp, Modal::Success] {
            if self.view.is_modal_open(modal) {
                self.view.set_modal(modal, false);
            }
        }
    }

    fn read_payload(&self) -> Option<String> {
        match self.store.get(&self.settings.storage_key) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Could not read stored draft: {}", e);
                None
            }
        }
    }

    fn restore(&mut self, payload: &str) -> Option<RsvpDraft> {
        let draft = match RsvpDraft::from_json(payload) {
            Ok(draft) => draft,
            Err(e) => {
                let err = RsvpError::DeserializationError(e);
                tracing::warn!("Ignoring stored draft: {}", err);
                return None;
            }
        };

        self.apply_draft(&draft);
        tracing::debug!(
            "Restored draft with {} guest(s) and {} event(s)",
            draft.members.len(),
            draft.selected_events.len()
        );
        self.notifier.notify(LOADED_MESSAGE, Severity::Info);
        Some(draft)
    }

    fn checked_snapshot(&mut self) -> Result<RsvpDraft> {
        let draft = self.collect_snapshot();
        let messages = validate(&draft);

        if !messages.is_empty() {
            let err = RsvpError::ValidationError { messages };
            tracing::warn!("RSVP validation failed: {}", err);
            self.notifier.notify(&err.to_string(), Severity::Error);
            return Err(err);
        }

        Ok(draft)
    }

    fn persist(&mut self, draft: &RsvpDraft) -> Result<()> {
        let payload = draft.to_json()?;
        self.store.set(&self.settings.storage_key, &payload)?;
        tracing::debug!(
            "Wrote {} bytes under '{}'",
            payload.len(),
            self.settings.storage_key
        );
        Ok(())
    }

    fn apply_draft(&mut self, draft: &RsvpDraft) {
        for (event, _) in self.view.events() {
            let checked = draft.attends(&event);
            self.view.set_event_checked(&event, checked);
        }

        self.view.set_field(Field::City, &draft.overall.city);
        self.view.set_field(Field::Date, &draft.overall.date);
        self.view.set_field(Field::Time, &draft.overall.time);
        self.view.set_field(Field::Transport, &draft.overall.transport);

        self.view.clear_rows();
        for member in &draft.members {
            self.add_member(Some(member));
        }
        self.ensure_one_row();
    }

    fn reset_after_submit(&mut self) {
        for field in Field::TRIP {
            self.view.set_field(field, "");
        }

        for (event, _) in self.view.events() {
            let checked = self.settings.default_events.contains(&event);
            self.view.set_event_checked(&event, checked);
        }

        self.view.clear_rows();
        self.add_member(None);
    }

    fn ensure_one_row(&mut self) {
        if self.view.row_count() == 0 {
            self.add_member(None);
        }
    }
}
