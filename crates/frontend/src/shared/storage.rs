use contracts::shared::storage::{KeyValueStorage, StorageError};
use web_sys::window;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// `window.localStorage`: survives restarts.
    Local,
    /// `window.sessionStorage`: discarded with the tab.
    Session,
}

/// `KeyValueStorage` over the browser's Web Storage.
///
/// When the area is unavailable (private mode, sandboxed frame) reads are
/// absent and writes fail with `StorageError::Unavailable`.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = window()?;
        match self.area {
            StorageArea::Local => window.local_storage().ok()?,
            StorageArea::Session => window.session_storage().ok()?,
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
