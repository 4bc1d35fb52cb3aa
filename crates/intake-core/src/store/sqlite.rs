//! SQLite backend: one row per key in the `form_state` table.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use super::StateBackend;
use crate::error::{IntakeError, Result, StorageResultExt};

const SELECT_VALUE_SQL: &str = "SELECT value FROM form_state WHERE key = ?1";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM form_state WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO form_state (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM form_state WHERE key = ?1";
const HAS_UPDATED_AT_COLUMN_SQL: &str =
    "SELECT COUNT(*) FROM pragma_table_info('form_state') WHERE name = 'updated_at'";

/// Persists wizard state in a SQLite file.
pub struct SqliteBackend {
    connection: Connection,
}

impl SqliteBackend {
    /// Opens (or creates) the state file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open state database")?;
        Self::with_connection(connection)
    }

    /// A private in-memory database, mostly useful in tests.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()
            .storage_context("Failed to open in-memory state database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        let backend = Self { connection };
        backend.initialize_schema()?;
        Ok(backend)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .storage_context("Failed to initialize state schema")?;

        self.apply_migrations()
    }

    /// State files written before write timestamps were tracked lack the
    /// `updated_at` column.
    fn apply_migrations(&self) -> Result<()> {
        let has_updated_at: bool = self
            .connection
            .query_row(HAS_UPDATED_AT_COLUMN_SQL, [], |row| row.get(0))
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_updated_at {
            self.connection
                .execute(
                    "ALTER TABLE form_state ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .storage_context("Failed to add updated_at column to form_state")?;
        }

        Ok(())
    }
}

impl StateBackend for SqliteBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read state value")
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .storage_context("Failed to write state value")?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_VALUE_SQL, params![key])
            .storage_context("Failed to delete state value")?;
        Ok(())
    }

    fn saved_at(&self, key: &str) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_UPDATED_AT_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read state timestamp")?;

        match raw {
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => raw.parse::<Timestamp>().map(Some).map_err(|e| {
                IntakeError::storage("Invalid state timestamp").with_source(
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)),
                )
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let mut backend = SqliteBackend::open_in_memory().expect("in-memory database");

        assert_eq!(backend.read("k").expect("read"), None);
        backend.write("k", "[1,2]").expect("write");
        assert_eq!(backend.read("k").expect("read").as_deref(), Some("[1,2]"));

        backend.write("k", "[3]").expect("overwrite");
        assert_eq!(backend.read("k").expect("read").as_deref(), Some("[3]"));
        assert!(backend.saved_at("k").expect("saved_at").is_some());

        backend.remove("k").expect("remove");
        backend.remove("k").expect("remove missing key");
        assert_eq!(backend.read("k").expect("read"), None);
    }
}
