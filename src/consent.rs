use log::{debug, warn};

use crate::error::SiteError;
use crate::storage::PreferenceStore;

pub const CONSENT_KEY: &str = "cookie-consent";
pub const ANALYTICS_KEY: &str = "cookie-analytics";
pub const MARKETING_KEY: &str = "cookie-marketing";

/// The visitor's stored choice about optional cookie categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentRecord {
    Unset,
    All,
    Custom { analytics: bool, marketing: bool },
}

impl ConsentRecord {
    pub fn load(store: &dyn PreferenceStore) -> Result<Self, SiteError> {
        let record = match store.get(CONSENT_KEY)?.as_deref() {
            None | Some("") => ConsentRecord::Unset,
            Some("all") => ConsentRecord::All,
            Some("custom") => ConsentRecord::Custom {
                analytics: read_flag(store, ANALYTICS_KEY)?,
                marketing: read_flag(store, MARKETING_KEY)?,
            },
            Some(other) => {
                // Unknown value; ask again rather than guess.
                warn!("Unrecognised {} value {:?}", CONSENT_KEY, other);
                ConsentRecord::Unset
            }
        };
        Ok(record)
    }

    pub fn save(&self, store: &dyn PreferenceStore) -> Result<(), SiteError> {
        match *self {
            ConsentRecord::Unset => {}
            ConsentRecord::All => store.set(CONSENT_KEY, "all")?,
            ConsentRecord::Custom { analytics, marketing } => {
                store.set(CONSENT_KEY, "custom")?;
                store.set(ANALYTICS_KEY, &analytics.to_string())?;
                store.set(MARKETING_KEY, &marketing.to_string())?;
            }
        }
        debug!("Saved cookie consent {:?}", self);
        Ok(())
    }

    pub fn needs_banner(&self) -> bool {
        matches!(self, ConsentRecord::Unset)
    }
}

fn read_flag(store: &dyn PreferenceStore, key: &str) -> Result<bool, SiteError> {
    Ok(store.get(key)?.as_deref() == Some("true"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn first_visit_shows_banner() {
        let store = MemoryStore::default();
        let record = ConsentRecord::load(&store).unwrap();
        assert_eq!(record, ConsentRecord::Unset);
        assert!(record.needs_banner());
    }

    #[test]
    fn accept_all_survives_reload() {
        let store = MemoryStore::default();
        ConsentRecord::All.save(&store).unwrap();

        let reloaded = ConsentRecord::load(&store).unwrap();
        assert_eq!(reloaded, ConsentRecord::All);
        assert!(!reloaded.needs_banner());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn custom_choice_persists_exact_flags() {
        let store = MemoryStore::default();
        ConsentRecord::Custom { analytics: true, marketing: false }
            .save(&store)
            .unwrap();

        assert_eq!(store.get(CONSENT_KEY).unwrap().as_deref(), Some("custom"));
        assert_eq!(store.get(ANALYTICS_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(store.get(MARKETING_KEY).unwrap().as_deref(), Some("false"));
        assert_eq!(store.len(), 3);
        assert_eq!(
            ConsentRecord::load(&store).unwrap(),
            ConsentRecord::Custom { analytics: true, marketing: false }
        );
    }

    #[test]
    fn unknown_value_asks_again() {
        let store = MemoryStore::default();
        store.set(CONSENT_KEY, "maybe").unwrap();
        assert!(ConsentRecord::load(&store).unwrap().needs_banner());
    }

    #[test]
    fn saving_unset_writes_nothing() {
        let store = MemoryStore::default();
        ConsentRecord::Unset.save(&store).unwrap();
        assert_eq!(store.len(), 0);
    }
}
