//! In-process backend for tests and throwaway sessions.

use std::collections::HashMap;

use jiff::Timestamp;

use super::StateBackend;
use crate::error::Result;

/// Backend that keeps values in a map for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, (String, Timestamp)>,
}

impl StateBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|(value, _)| value.clone()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .insert(key.to_string(), (value.to_string(), Timestamp::now()));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn saved_at(&self, key: &str) -> Result<Option<Timestamp>> {
        Ok(self.entries.get(key).map(|(_, at)| *at))
    }
}
