// tests/store_test.rs — Integration test: SQLite session store

use wellmate::core::types::{Gender, Language, PatientInfo, Session};
use wellmate::store::schema;
use wellmate::store::session::{PAST_CONSULTATIONS_KEY, PATIENT_INFO_KEY};
use wellmate::store::{KeyValueStore, SessionStore, SqliteStore};

fn test_store() -> SessionStore {
    SessionStore::new(Box::new(SqliteStore::in_memory().unwrap()))
}

#[test]
fn test_patient_info_stored_as_json() {
    let store = test_store();
    store
        .save_patient_info(&PatientInfo {
            name: "Ada".into(),
            age: 36,
            gender: Gender::Female,
            language: Language::Chinese,
            phone: String::new(),
        })
        .unwrap();

    let raw = store.raw().get(PATIENT_INFO_KEY).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["gender"], "Female");
    assert_eq!(v["language"], "Chinese");
}

#[test]
fn test_upsert_updates_timestamp_row() {
    let sqlite = SqliteStore::in_memory().unwrap();
    sqlite.set("k", "1").unwrap();
    sqlite.set("k", "2").unwrap();

    let (count, value): (i64, String) = sqlite
        .conn()
        .query_row("SELECT COUNT(*), MAX(value) FROM kv WHERE key = 'k'", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(value, "2");
}

#[test]
fn test_schema_version() {
    let sqlite = SqliteStore::in_memory().unwrap();
    assert_eq!(schema::current_version(sqlite.conn()).unwrap(), 1);
}

#[test]
fn test_legacy_history_untouched_by_session_changes() {
    let store = test_store();
    store
        .raw()
        .set(PAST_CONSULTATIONS_KEY, r#"[{"timestamp":1,"messages":[]}]"#)
        .unwrap();
    store.save_session(&Session::guest(1)).unwrap();
    store.clear_session().unwrap();
    assert_eq!(store.past_consultations().unwrap().len(), 1);
}
