// src/store/mod.rs — Persistent key-value namespace
//
// One flat namespace, no atomicity across keys. Callers tolerate partial
// writes (e.g. `sessionId` cleared while `patientInfo` remains).

pub mod memory;
pub mod schema;
pub mod session;
pub mod sqlite;

pub use memory::MemoryStore;
pub use session::SessionStore;
pub use sqlite::SqliteStore;

use crate::infra::errors::WellmateError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, WellmateError>;
    fn set(&self, key: &str, value: &str) -> Result<(), WellmateError>;
    fn remove(&self, key: &str) -> Result<(), WellmateError>;
}
