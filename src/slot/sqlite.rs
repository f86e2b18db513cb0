//! A persistence slot stored as a row in a SQLite key-value table.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, PersistenceSlot};

/// Create the key-value table used by [SqliteSlot].
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_slot_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS slot (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// A persistence slot backed by a SQLite database.
///
/// Each slot is one row keyed by its name, so several slots can share a
/// database.
#[derive(Debug, Clone)]
pub struct SqliteSlot {
    key: String,
    connection: Arc<Mutex<Connection>>,
}

impl SqliteSlot {
    /// Create a slot named `key` and make sure the backing table exists.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the table could not be created, or
    /// [Error::SlotLockError] if the connection lock is poisoned.
    pub fn new(key: &str, connection: Arc<Mutex<Connection>>) -> Result<Self, Error> {
        {
            let connection = connection.lock().map_err(|_| Error::SlotLockError)?;
            create_slot_table(&connection)?;
        }

        Ok(Self {
            key: key.to_owned(),
            connection,
        })
    }
}

impl PersistenceSlot for SqliteSlot {
    fn name(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, Error> {
        let connection = self.connection.lock().map_err(|_| Error::SlotLockError)?;

        connection
            .query_row(
                "SELECT value FROM slot WHERE key = ?1",
                [&self.key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn write(&self, payload: &str) -> Result<(), Error> {
        let connection = self.connection.lock().map_err(|_| Error::SlotLockError)?;

        connection
            .execute(
                "INSERT INTO slot (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                (&self.key, payload),
            )
            .map_err(|error| Error::PersistenceWrite(error.to_string()))?;

        Ok(())
    }
}
