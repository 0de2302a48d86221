use vplanit_rsvp::core::{
    AgeGroup, Field, KeyValueStore, MemberRow, Modal, Overall, Severity, ViewPort,
};
use vplanit_rsvp::{
    validate, FormSettings, MemoryStore, MemoryView, PartyMember, RecordingNotifier, RsvpDraft,
    RsvpError, RsvpForm,
};

type TestForm = RsvpForm<MemoryView, MemoryStore, RecordingNotifier>;

const EVENTS: [&str; 4] = ["Haldi", "Mehendi", "Wedding", "Reception"];

fn page() -> MemoryView {
    MemoryView::new(EVENTS)
}

fn form_with(view: MemoryView, store: MemoryStore) -> TestForm {
    let mut form = RsvpForm::new(view, store, RecordingNotifier::new(), FormSettings::default());
    form.init();
    form
}

fn fresh_form() -> TestForm {
    form_with(page(), MemoryStore::new())
}

fn first_row(form: &TestForm) -> u64 {
    form.view().rows()[0].0
}

fn fill_row(form: &mut TestForm, id: u64, name: &str, age: AgeGroup, accommodation: bool) {
    let row = form.view_mut().row_mut(id).expect("row exists");
    row.name = name.to_string();
    row.age = age;
    row.accommodation = accommodation;
}

fn stored(form: &TestForm) -> Option<String> {
    form.store().get("vplanit_rsvp").unwrap()
}

#[test]
fn test_init_seeds_one_blank_row_and_shows_tip() {
    let form = fresh_form();

    let rows = form.view().rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1, MemberRow::blank());
    assert_eq!(
        form.notifier().messages(Severity::Info),
        vec!["Tip: Use Ctrl+S to save draft"]
    );
}

#[test]
fn test_collect_snapshot_reads_view_and_drops_blank_rows() {
    let mut form = fresh_form();
    let view = form.view_mut();
    view.set_field(Field::FamilyName, "  Shah Family ");
    view.set_field(Field::ContactPhone, " +91 98200 00000");
    view.set_field(Field::City, " Udaipur ");
    view.set_field(Field::Date, "2026-12-04");
    view.set_field(Field::Time, "18:30");
    view.set_field(Field::Transport, "Train");
    view.set_event_checked("Haldi", true);
    view.set_event_checked("Wedding", true);

    let first = first_row(&form);
    fill_row(&mut form, first, "  Riya Shah ", AgeGroup::Adult, false);
    form.add_member(None);
    let third = form.add_member(None);
    fill_row(&mut form, third, "Kabir Shah", AgeGroup::Child, true);
    let fourth = form.add_member(None);
    fill_row(&mut form, fourth, "    ", AgeGroup::Adult, true);

    let draft = form.collect_snapshot();
    assert_eq!(draft.family_name, "Shah Family");
    assert_eq!(draft.contact_phone, "+91 98200 00000");
    assert_eq!(draft.selected_events, vec!["Haldi", "Wedding"]);
    assert_eq!(
        draft.overall,
        Overall {
            city: "Udaipur".to_string(),
            date: "2026-12-04".to_string(),
            time: "18:30".to_string(),
            transport: "Train".to_string(),
        }
    );
    assert_eq!(
        draft.members,
        vec![
            PartyMember::new("Riya Shah", true, false),
            PartyMember::new("Kabir Shah", false, true),
        ]
    );
    assert!(draft.members.iter().all(|m| !m.name.trim().is_empty()));
}

#[test]
fn test_save_valid_draft_persists_exact_snapshot() {
    let mut form = fresh_form();
    form.view_mut().set_field(Field::FamilyName, "Shah Family");
    form.view_mut().set_event_checked("Wedding", true);
    let first = first_row(&form);
    fill_row(&mut form, first, "Riya Shah", AgeGroup::Adult, false);

    let snapshot = form.collect_snapshot();
    assert!(validate(&snapshot).is_empty());

    let saved = form.save_draft().unwrap();
    assert_eq!(saved, snapshot);

    let persisted = RsvpDraft::from_json(&stored(&form).unwrap()).unwrap();
    assert_eq!(persisted, snapshot);
    assert_eq!(persisted.members, vec![PartyMember::new("Riya Shah", true, false)]);
    assert_eq!(persisted.selected_events, vec!["Wedding"]);
    assert!(form
        .notifier()
        .messages(Severity::Info)
        .contains(&"Draft saved successfully!"));
}

#[test]
fn test_save_with_only_blank_rows_is_rejected() {
    let mut form = fresh_form();
    form.view_mut().set_field(Field::FamilyName, "Shah Family");

    let err = form.save_draft().unwrap_err();
    match err {
        RsvpError::ValidationError { messages } => {
            assert_eq!(messages, vec!["Add at least one guest".to_string()])
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(stored(&form).is_none());
    assert_eq!(
        form.notifier().messages(Severity::Error),
        vec!["Add at least one guest"]
    );
}

#[test]
fn test_save_joins_every_message_into_one_notice() {
    let mut form = fresh_form();

    assert!(form.save_draft().is_err());
    assert_eq!(
        form.notifier().messages(Severity::Error),
        vec!["Family name is required • Add at least one guest"]
    );
    assert!(stored(&form).is_none());
}

#[test]
fn test_remove_last_row_is_rejected() {
    let mut form = fresh_form();
    let only = first_row(&form);

    let err = form.remove_member(only).unwrap_err();
    assert!(matches!(err, RsvpError::MinimumGuestError));
    assert_eq!(form.view().row_count(), 1);
    assert_eq!(
        form.notifier().messages(Severity::Error),
        vec!["At least one guest is required"]
    );
}

#[test]
fn test_remove_row_shrinks_list_by_one() {
    let mut form = fresh_form();
    let first = first_row(&form);
    let second = form.add_member(None);
    form.add_member(None);
    assert_eq!(form.view().row_count(), 3);

    form.remove_member(second).unwrap();
    assert_eq!(form.view().row_count(), 2);
    form.remove_member(first).unwrap();
    assert_eq!(form.view().row_count(), 1);

    assert!(matches!(
        form.remove_member(second),
        Err(RsvpError::MinimumGuestError)
    ));
}

#[test]
fn test_remove_unknown_row() {
    let mut form = fresh_form();
    form.add_member(None);

    assert!(matches!(
        form.remove_member(999),
        Err(RsvpError::UnknownRowError(999))
    ));
    assert_eq!(form.view().row_count(), 2);
}

#[test]
fn test_submit_persists_and_resets_transient_fields() {
    let mut form = fresh_form();
    form.open_rsvp();
    let view = form.view_mut();
    view.set_field(Field::FamilyName, "Shah Family");
    view.set_field(Field::ContactPhone, "+91 98200 00000");
    view.set_field(Field::City, "Udaipur");
    view.set_field(Field::Date, "2026-12-04");
    view.set_field(Field::Time, "18:30");
    view.set_field(Field::Transport, "Flight");
    view.set_event_checked("Mehendi", true);
    view.set_event_checked("Reception", true);
    let first = first_row(&form);
    fill_row(&mut form, first, "Riya Shah", AgeGroup::Adult, true);
    let second = form.add_member(None);
    fill_row(&mut form, second, "Kabir Shah", AgeGroup::Child, true);

    let submitted = form.submit().unwrap();
    assert_eq!(submitted.members.len(), 2);

    let persisted = RsvpDraft::from_json(&stored(&form).unwrap()).unwrap();
    assert_eq!(persisted, submitted);

    let view = form.view();
    assert!(!view.is_modal_open(Modal::Rsvp));
    assert!(view.is_modal_open(Modal::Success));
    for field in Field::TRIP {
        assert_eq!(view.field(field), "");
    }
    assert_eq!(view.checked_events(), vec!["Haldi", "Wedding"]);
    let rows = view.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1, MemberRow::blank());

    // Identity stays for a second edit in the same session.
    assert_eq!(view.field(Field::FamilyName), "Shah Family");
    assert_eq!(view.field(Field::ContactPhone), "+91 98200 00000");
}

#[test]
fn test_invalid_submit_changes_nothing() {
    let mut form = fresh_form();
    form.open_rsvp();
    form.view_mut().set_field(Field::City, "Jaipur");
    form.view_mut().set_event_checked("Reception", true);

    assert!(matches!(
        form.submit(),
        Err(RsvpError::ValidationError { .. })
    ));
    assert!(form.view().is_modal_open(Modal::Rsvp));
    assert!(!form.view().is_modal_open(Modal::Success));
    assert_eq!(form.view().field(Field::City), "Jaipur");
    assert_eq!(form.view().checked_events(), vec!["Reception"]);
    assert!(stored(&form).is_none());
}

#[test]
fn test_round_trip_through_a_reload() {
    let mut form = fresh_form();
    let view = form.view_mut();
    view.set_field(Field::FamilyName, "Mehta");
    view.set_field(Field::City, "Goa");
    view.set_field(Field::Date, "2026-11-20");
    view.set_event_checked("Reception", true);
    view.set_event_checked("Haldi", true);
    let first = first_row(&form);
    fill_row(&mut form, first, "Anil Mehta", AgeGroup::Adult, true);
    let second = form.add_member(None);
    fill_row(&mut form, second, "Tara Mehta", AgeGroup::Child, false);
    let original = form.save_draft().unwrap();

    let (_, store, _) = form.into_parts();
    let mut reloaded = RsvpForm::new(page(), store, RecordingNotifier::new(), FormSettings::default());
    let restored = reloaded.init().expect("draft restored");

    assert_eq!(restored.family_name, original.family_name);
    assert_eq!(restored.overall, original.overall);
    assert_eq!(restored.members, original.members);
    let mut restored_events = restored.selected_events.clone();
    let mut original_events = original.selected_events.clone();
    restored_events.sort();
    original_events.sort();
    assert_eq!(restored_events, original_events);

    // The view is repopulated too.
    let view = reloaded.view();
    assert_eq!(view.field(Field::City), "Goa");
    assert_eq!(view.field(Field::Date), "2026-11-20");
    assert_eq!(view.checked_events(), vec!["Haldi", "Reception"]);
    let rows: Vec<MemberRow> = view.rows().into_iter().map(|(_, row)| row).collect();
    assert_eq!(
        rows,
        vec![
            MemberRow {
                name: "Anil Mehta".to_string(),
                age: AgeGroup::Adult,
                accommodation: true
            },
            MemberRow {
                name: "Tara Mehta".to_string(),
                age: AgeGroup::Child,
                accommodation: false
            },
        ]
    );
    assert_eq!(
        reloaded.notifier().messages(Severity::Info),
        vec!["Draft loaded from previous session"]
    );
}

#[test]
fn test_malformed_draft_is_treated_as_absent() {
    let mut store = MemoryStore::new();
    store.set("vplanit_rsvp", "{not json").unwrap();

    let mut form = RsvpForm::new(page(), store, RecordingNotifier::new(), FormSettings::default());
    assert!(form.init().is_none());

    let rows = form.view().rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1, MemberRow::blank());
    assert!(form.notifier().messages(Severity::Error).is_empty());
    // A payload exists, so no first-visit tip either.
    assert!(form.notifier().messages(Severity::Info).is_empty());
}

#[test]
fn test_load_draft_without_rows_seeds_a_blank_one() {
    let mut store = MemoryStore::new();
    store
        .set(
            "vplanit_rsvp",
            r#"{"familyName":"Rao","selectedEvents":["Wedding"],"members":[]}"#,
        )
        .unwrap();

    let mut form = RsvpForm::new(page(), store, RecordingNotifier::new(), FormSettings::default());
    let draft = form.load_draft().unwrap();

    assert!(draft.members.is_empty());
    assert_eq!(form.view().row_count(), 1);
    assert_eq!(form.view().checked_events(), vec!["Wedding"]);
}

#[test]
fn test_load_does_not_overwrite_prefilled_identity() {
    let mut store = MemoryStore::new();
    store
        .set(
            "vplanit_rsvp",
            r#"{"familyName":"Old Name","contactPhone":"111","members":[{"name":"A","isAdult":true,"accommodation":false}]}"#,
        )
        .unwrap();

    let view = page().with_field(Field::FamilyName, "Shah Family");
    let form = form_with(view, store);

    assert_eq!(form.view().field(Field::FamilyName), "Shah Family");
    assert_eq!(form.view().field(Field::ContactPhone), "");
}

#[test]
fn test_custom_storage_key_and_defaults() {
    let settings = FormSettings {
        storage_key: "shah_rsvp".to_string(),
        default_events: vec!["Reception".to_string()],
    };
    let mut form = RsvpForm::new(page(), MemoryStore::new(), RecordingNotifier::new(), settings);
    form.init();
    form.view_mut().set_field(Field::FamilyName, "Shah Family");
    let first = first_row(&form);
    fill_row(&mut form, first, "Riya Shah", AgeGroup::Adult, false);

    form.submit().unwrap();

    assert!(form.store().get("shah_rsvp").unwrap().is_some());
    assert!(form.store().get("vplanit_rsvp").unwrap().is_none());
    assert_eq!(form.view().checked_events(), vec!["Reception"]);
}

#[test]
fn test_escape_closes_open_modals() {
    let mut form = fresh_form();
    form.open_rsvp();
    form.view_mut().set_modal(Modal::Success, true);

    form.escape();
    assert!(!form.view().is_modal_open(Modal::Rsvp));
    assert!(!form.view().is_modal_open(Modal::Success));
}

#[test]
fn test_draft_with_null_fields_is_still_restored() {
    let mut store = MemoryStore::new();
    store
        .set(
            "vplanit_rsvp",
            r#"{"familyName":null,"selectedEvents":["Wedding"],
                "overall":{"city":null,"date":"2026-12-04"},
                "members":[{"name":"Riya","isAdult":null,"accommodation":true}]}"#,
        )
        .unwrap();

    let mut form = RsvpForm::new(page(), store, RecordingNotifier::new(), FormSettings::default());
    let draft = form.init().expect("draft restored");

    assert_eq!(draft.family_name, "");
    assert_eq!(form.view().checked_events(), vec!["Wedding"]);
    assert_eq!(form.view().field(Field::Date), "2026-12-04");
    assert_eq!(form.view().field(Field::City), "");
    let rows = form.view().rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].1,
        MemberRow {
            name: "Riya".to_string(),
            age: AgeGroup::Child,
            accommodation: true
        }
    );
}

/// Counts reads so start-up cost against a slow store stays visible.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    reads: std::cell::Cell<usize>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> vplanit_rsvp::Result<Option<String>> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> vplanit_rsvp::Result<()> {
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> vplanit_rsvp::Result<()> {
        self.inner.remove(key)
    }
}

#[test]
fn test_init_reads_the_store_once() {
    let mut empty = RsvpForm::new(
        page(),
        CountingStore::default(),
        RecordingNotifier::new(),
        FormSettings::default(),
    );
    assert!(empty.init().is_none());
    assert_eq!(empty.store().reads.get(), 1);
    assert_eq!(
        empty.notifier().messages(Severity::Info),
        vec!["Tip: Use Ctrl+S to save draft"]
    );

    let mut store = CountingStore::default();
    store
        .set("vplanit_rsvp", r#"{"familyName":"Shah Family","members":[{"name":"Riya"}]}"#)
        .unwrap();
    let mut saved = RsvpForm::new(page(), store, RecordingNotifier::new(), FormSettings::default());
    assert!(saved.init().is_some());
    assert_eq!(saved.store().reads.get(), 1);
    assert_eq!(
        saved.notifier().messages(Severity::Info),
        vec!["Draft loaded from previous session"]
    );
}
