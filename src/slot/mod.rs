//! Persistence slots: a single named key-value entry holding the serialized
//! transaction list.
//!
//! A slot only supports reading the whole payload and replacing it.
//!
//! - [MemorySlot]: in-process storage, shared between clones
//! - [SqliteSlot]: a row in a SQLite key-value table (`sqlite` feature)
//! - [LocalStorageSlot]: the browser's `localStorage` (`web` feature)

use std::sync::{Arc, Mutex};

use crate::Error;

#[cfg(feature = "web")]
mod local_storage;
#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "web")]
pub use local_storage::LocalStorageSlot;
#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteSlot, create_slot_table};

/// A durable key-value entry that holds the whole persisted payload.
pub trait PersistenceSlot {
    /// The key the payload is stored under.
    fn name(&self) -> &str;

    /// Read the payload.
    ///
    /// Returns `Ok(None)` if nothing has been written to the slot yet.
    ///
    /// # Errors
    /// Returns an error if the backend could not be read.
    fn read(&self) -> Result<Option<String>, Error>;

    /// Replace the payload.
    ///
    /// The write must be complete when this function returns.
    ///
    /// # Errors
    /// Returns an error if the backend rejected the write. The previous
    /// payload must still be readable in that case.
    fn write(&self, payload: &str) -> Result<(), Error>;
}

/// An in-memory persistence slot.
///
/// Clones share the same payload.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    name: String,
    payload: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            payload: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a slot that already holds `payload`.
    pub fn with_payload(name: &str, payload: &str) -> Self {
        Self {
            name: name.to_owned(),
            payload: Arc::new(Mutex::new(Some(payload.to_owned()))),
        }
    }
}

impl PersistenceSlot for MemorySlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>, Error> {
        self.payload
            .lock()
            .map(|payload| payload.clone())
            .map_err(|_| Error::SlotLockError)
    }

    fn write(&self, payload: &str) -> Result<(), Error> {
        let mut slot = self.payload.lock().map_err(|_| Error::SlotLockError)?;
        *slot = Some(payload.to_owned());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{MemorySlot, PersistenceSlot};

    #[test]
    fn new_slot_is_empty() {
        let slot = MemorySlot::new("transactions");

        assert_eq!(slot.read(), Ok(None));
        assert_eq!(slot.name(), "transactions");
    }

    #[test]
    fn write_replaces_payload() {
        let slot = MemorySlot::with_payload("transactions", "[]");

        slot.write("[1]").unwrap();

        assert_eq!(slot.read(), Ok(Some("[1]".to_owned())));
    }

    #[test]
    fn clones_share_payload() {
        let slot = MemorySlot::new("transactions");
        let other = slot.clone();

        slot.write("payload").unwrap();

        assert_eq!(other.read(), Ok(Some("payload".to_owned())));
    }
}
