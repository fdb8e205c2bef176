use web_sys::Storage;

use crate::error::{self, SiteError};

/// Persistent string key-value store backing the visitor's preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, SiteError> {
        let storage = error::window()?
            .local_storage()?
            .ok_or(SiteError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage.set_item(key, value)?;
        Ok(())
    }
}
