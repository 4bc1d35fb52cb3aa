//! Durable key/value persistence for the in-progress form.
//!
//! [`FormStateStore`] is the typed front of a [`StateBackend`]. Its public
//! [`load`](FormStateStore::load), [`save`](FormStateStore::save) and
//! [`clear`](FormStateStore::clear) never fail from the caller's point of
//! view: unreadable or corrupt values load as the supplied default and write
//! failures are logged and dropped. The `try_*` variants expose the
//! underlying [`Result`] so the failure modes stay testable.

use jiff::Timestamp;
use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// Key holding the serialized [`crate::models::FormPayload`].
pub const FORM_PAYLOAD_KEY: &str = "intake.form_payload";

/// Key holding the serialized [`crate::models::CompletedSteps`].
pub const COMPLETED_STEPS_KEY: &str = "intake.completed_steps";

/// Key marking that a user profile was already applied to the payload.
pub const PROFILE_APPLIED_KEY: &str = "intake.profile_applied";

/// Raw string storage underneath the typed store.
pub trait StateBackend {
    /// Returns the raw value stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// When `key` was last written.
    fn saved_at(&self, key: &str) -> Result<Option<Timestamp>>;
}

/// Typed, failure-tolerant key/value store.
pub struct FormStateStore {
    backend: Box<dyn StateBackend>,
}

impl FormStateStore {
    /// Wraps a backend.
    pub fn new(backend: impl StateBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Reads and parses the value under `key`.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.read(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Returns the stored value, or `default` if it is missing, unreadable or
    /// fails to parse.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!("Discarding stored value for '{key}': {e}");
                default
            }
        }
    }

    /// Serializes and writes `value` under `key`.
    pub fn try_save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.write(key, &raw)
    }

    /// Persists `value` under `key`; failures are logged, never returned.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            warn!("Failed to persist '{key}', continuing in memory: {e}");
        }
    }

    /// Removes the value under `key`.
    pub fn try_clear(&mut self, key: &str) -> Result<()> {
        self.backend.remove(key)
    }

    /// Removes the value under `key`; failures are logged, never returned.
    pub fn clear(&mut self, key: &str) {
        if let Err(e) = self.try_clear(key) {
            warn!("Failed to clear '{key}': {e}");
        }
    }

    /// Whether a value is currently stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.backend.read(key), Ok(Some(_)))
    }

    /// When `key` was last written, if known.
    pub fn saved_at(&self, key: &str) -> Option<Timestamp> {
        self.backend.saved_at(key).ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::error::IntakeError;

    /// Backend that reads fine but rejects every write.
    #[derive(Default)]
    struct ReadOnlyBackend {
        values: BTreeMap<String, String>,
    }

    impl StateBackend for ReadOnlyBackend {
        fn read(&self, key: &str) -> Result<Option<String>> {
            Ok(self.values.get(key).cloned())
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(IntakeError::Configuration {
                message: "quota exceeded".to_string(),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(IntakeError::Configuration {
                message: "read only".to_string(),
            })
        }

        fn saved_at(&self, _key: &str) -> Result<Option<Timestamp>> {
            Ok(None)
        }
    }

    #[test]
    fn test_load_missing_returns_default() {
        let store = FormStateStore::in_memory();
        assert_eq!(store.load("nothing", 7u32), 7);
        assert!(!store.contains("nothing"));
    }

    #[test]
    fn test_corrupt_value_loads_as_default() {
        let mut backend = MemoryBackend::default();
        backend.write("k", "{not json").expect("memory write");
        let store = FormStateStore::new(backend);

        assert!(matches!(
            store.try_load::<Vec<u32>>("k"),
            Err(IntakeError::Serialization { .. })
        ));
        assert_eq!(store.load("k", vec![1u32]), vec![1]);
    }

    #[test]
    fn test_foreign_shape_loads_as_default() {
        let mut store = FormStateStore::in_memory();
        store.save("k", "a string, not a list");
        assert_eq!(store.load::<Vec<u32>>("k", Vec::new()), Vec::<u32>::new());
    }

    #[test]
    fn test_write_failures_are_swallowed_but_visible_to_try_save() {
        let mut store = FormStateStore::new(ReadOnlyBackend::default());

        assert!(store.try_save("k", &1u32).is_err());
        store.save("k", &1u32);
        store.clear("k");
        assert_eq!(store.load("k", 0u32), 0);
    }

    #[test]
    fn test_clear_removes_value() {
        let mut store = FormStateStore::in_memory();
        store.save("k", &vec![1u32, 2]);
        assert!(store.contains("k"));
        assert!(store.saved_at("k").is_some());

        store.clear("k");
        assert!(!store.contains("k"));
        assert!(store.saved_at("k").is_none());
    }
}
