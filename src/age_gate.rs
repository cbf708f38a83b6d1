use log::{error, info};

use crate::config::AGE_VERIFIED_KEY;
use crate::storage::KeyValueStore;

/// Remembers whether the visitor has confirmed they are of drinking age.
#[derive(Clone, Debug, PartialEq)]
pub struct AgeGate<S> {
    verified: bool,
    storage: S,
}

impl<S: KeyValueStore> AgeGate<S> {
    /// Unreadable storage counts as not verified.
    pub fn load(storage: S) -> Self {
        let verified = match storage.get(AGE_VERIFIED_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                error!("Could not read age verification: {}", e);
                false
            }
        };
        Self { verified, storage }
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn confirm(&mut self) {
        self.verified = true;
        info!("Age confirmed");
        if let Err(e) = self.storage.set(AGE_VERIFIED_KEY, "true") {
            error!("Could not save age verification: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn fresh_visitor_is_not_verified() {
        assert!(!AgeGate::load(MemoryStorage::new()).is_verified());
        let other = MemoryStorage::with_entry(AGE_VERIFIED_KEY, "yes");
        assert!(!AgeGate::load(other).is_verified());
    }

    #[test]
    fn confirmation_persists() {
        let storage = MemoryStorage::new();
        AgeGate::load(storage.clone()).confirm();
        assert!(AgeGate::load(storage).is_verified());
    }

    #[test]
    fn confirmation_survives_storage_failure_for_the_session() {
        let storage = MemoryStorage::new();
        storage.fail_writes();
        let mut gate = AgeGate::load(storage.clone());
        gate.confirm();
        assert!(gate.is_verified());
        assert_eq!(storage.raw(AGE_VERIFIED_KEY), None);
    }
}
