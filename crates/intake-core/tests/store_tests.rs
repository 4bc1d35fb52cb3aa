use intake_core::{
    models::{
        AppointmentPatch, CompletedSteps, DocumentEntry, FormPayload, PayloadPatch,
        PersonalInfoField, PersonalInfoPatch,
    },
    store::{COMPLETED_STEPS_KEY, FORM_PAYLOAD_KEY},
    FormStateStore, SqliteBackend,
};
use tempfile::NamedTempFile;

/// Helper function to create a store over a temporary SQLite file
fn create_test_store() -> (NamedTempFile, FormStateStore) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let backend = SqliteBackend::open(temp_file.path()).expect("Failed to open state file");
    (temp_file, FormStateStore::new(backend))
}

#[test]
fn test_save_and_load_round_trip() {
    let (_temp_file, mut store) = create_test_store();

    let mut payload = FormPayload::default();
    payload.merge(PayloadPatch::notes("Bring passport"));
    payload.merge(PayloadPatch::services(["urgent", "apostille"]));
    payload.merge(PayloadPatch::documents(vec![DocumentEntry {
        name: "deed.pdf".to_string(),
        byte_size: 48_213,
        mime_type: "application/pdf".to_string(),
        local_handle: "/home/ada/deed.pdf".into(),
    }]));
    payload.merge(PayloadPatch::appointment(AppointmentPatch {
        date: Some(Some(jiff::civil::date(2026, 11, 3))),
        time: Some(Some(jiff::civil::time(14, 30, 0, 0))),
        timezone: Some("Europe/Berlin".to_string()),
    }));
    for (field, value) in [
        (PersonalInfoField::FirstName, "Ada"),
        (PersonalInfoField::LastName, "Lovelace"),
        (PersonalInfoField::Email, "ada@example.com"),
        (PersonalInfoField::PostalCode, "NW1 6XE"),
    ] {
        payload.merge(PayloadPatch::personal_info(PersonalInfoPatch::field(
            field, value,
        )));
    }
    store
        .try_save(FORM_PAYLOAD_KEY, &payload)
        .expect("Failed to save payload");

    let loaded: FormPayload = store
        .try_load(FORM_PAYLOAD_KEY)
        .expect("Failed to load payload")
        .expect("Payload should exist");
    assert_eq!(loaded, payload);
    assert_eq!(loaded.appointment.date, Some(jiff::civil::date(2026, 11, 3)));
    assert_eq!(loaded.appointment.time, Some(jiff::civil::time(14, 30, 0, 0)));
    assert_eq!(loaded.documents[0].byte_size, 48_213);
    assert!(store.saved_at(FORM_PAYLOAD_KEY).is_some());

    let completed: CompletedSteps = [1, 2, 3].into_iter().collect();
    store.save(COMPLETED_STEPS_KEY, &completed);
    assert_eq!(
        store.load(COMPLETED_STEPS_KEY, CompletedSteps::default()),
        completed
    );
}

#[test]
fn test_values_survive_reopening() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let backend = SqliteBackend::open(temp_file.path()).expect("Failed to open state file");
        let mut store = FormStateStore::new(backend);
        store.save("router.location", "/book-appointment");
    }

    let backend = SqliteBackend::open(temp_file.path()).expect("Failed to reopen state file");
    let store = FormStateStore::new(backend);
    assert_eq!(
        store.load("router.location", String::new()),
        "/book-appointment"
    );
}

#[test]
fn test_missing_key_loads_default() {
    let (_temp_file, store) = create_test_store();
    let loaded = store.load(FORM_PAYLOAD_KEY, FormPayload::default());
    assert_eq!(loaded, FormPayload::default());
    assert!(!store.contains(FORM_PAYLOAD_KEY));
    assert!(store.saved_at(FORM_PAYLOAD_KEY).is_none());
}

#[test]
fn test_corrupt_value_loads_default() {
    let (_temp_file, mut store) = create_test_store();
    store.save(FORM_PAYLOAD_KEY, "not a payload");

    assert!(store.try_load::<FormPayload>(FORM_PAYLOAD_KEY).is_err());
    let loaded = store.load(FORM_PAYLOAD_KEY, FormPayload::default());
    assert_eq!(loaded, FormPayload::default());
}

#[test]
fn test_clear_removes_key() {
    let (_temp_file, mut store) = create_test_store();
    store.save(FORM_PAYLOAD_KEY, &FormPayload::default());
    assert!(store.contains(FORM_PAYLOAD_KEY));

    store.clear(FORM_PAYLOAD_KEY);
    assert!(!store.contains(FORM_PAYLOAD_KEY));

    // Clearing twice is fine.
    store
        .try_clear(FORM_PAYLOAD_KEY)
        .expect("Clearing a missing key should succeed");
}
