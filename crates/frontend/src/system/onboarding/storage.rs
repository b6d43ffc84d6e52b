use contracts::system::onboarding::{ProgressStorage, StorageError};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Onboarding progress record kept in the browser's localStorage.
#[derive(Debug, Clone)]
pub struct LocalStorageBackend {
    key: String,
}

impl LocalStorageBackend {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ProgressStorage for LocalStorageBackend {
    fn load(&self) -> Option<String> {
        get_local_storage()?.get_item(&self.key).ok()?
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(&self.key, raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
