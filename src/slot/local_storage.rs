//! Browser persistence slot using `localStorage`.

use gloo_storage::{LocalStorage, Storage};

use crate::{Error, PersistenceSlot};

/// A persistence slot stored under a single key in the browser's
/// `localStorage`.
///
/// The payload is stored as-is, so the entry holds the JSON array of
/// transactions directly.
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    /// Create a slot stored under `key`.
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_owned(),
        }
    }
}

impl PersistenceSlot for LocalStorageSlot {
    fn name(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, Error> {
        LocalStorage::raw()
            .get_item(&self.key)
            .map_err(|error| Error::PersistenceRead(format!("{error:?}")))
    }

    fn write(&self, payload: &str) -> Result<(), Error> {
        LocalStorage::raw()
            .set_item(&self.key, payload)
            .map_err(|error| Error::PersistenceWrite(format!("{error:?}")))
    }
}

#[cfg(test)]
mod tests {
    use crate::{LocalStorageSlot, PersistenceSlot};

    #[test]
    fn name_is_storage_key() {
        let slot = LocalStorageSlot::new("transactions");

        assert_eq!(slot.name(), "transactions");
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use gloo_storage::{LocalStorage, Storage};
        use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

        use crate::{LocalStorageSlot, PersistenceSlot};

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn read_returns_none_before_first_write() {
            LocalStorage::delete("local-storage-slot-empty");
            let slot = LocalStorageSlot::new("local-storage-slot-empty");

            assert_eq!(slot.read(), Ok(None));
        }

        #[wasm_bindgen_test]
        fn write_replaces_payload() {
            let slot = LocalStorageSlot::new("local-storage-slot-write");

            slot.write("[]").unwrap();
            slot.write("[1]").unwrap();

            assert_eq!(slot.read(), Ok(Some("[1]".to_owned())));
            LocalStorage::delete("local-storage-slot-write");
        }
    }
}
