//! Profile catalogue
//!
//! Keyed lookup from a unit-type identifier to its posture-dependent
//! capability profiles. Built once at startup by the composition root
//! and handed out as a shared read-only reference; the registry has no
//! mutation API after construction.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::profile::CapabilityProfile;
use crate::core::types::ProfileKey;
use crate::forces::posture::Posture;

/// The posture-dependent capability variants for one unit type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitTypeEntry {
    /// Standard fighting configuration (all dug-in and deployed postures)
    pub deployed: CapabilityProfile,
    /// Mounted configuration, used while Mobile
    pub mounted: Option<CapabilityProfile>,
    /// Transport configuration, used while Embarked; also drives
    /// embarkation prerequisite checks
    pub transport: Option<CapabilityProfile>,
}

impl UnitTypeEntry {
    /// Which profile variant is active in a given posture
    ///
    /// `None` means the unit type has no configuration for that posture,
    /// which callers recomputing movement treat as a fatal setup error.
    pub fn active_profile(&self, posture: Posture) -> Option<&CapabilityProfile> {
        match posture {
            Posture::Embarked => self.transport.as_ref(),
            Posture::Mobile => self.mounted.as_ref(),
            _ => Some(&self.deployed),
        }
    }

    /// The transport profile consulted by embarkation checks
    pub fn embarked_profile(&self) -> Option<&CapabilityProfile> {
        self.transport.as_ref()
    }
}

/// Immutable keyed catalogue of unit-type capability data
#[derive(Debug, Clone, Default)]
pub struct ProfileCatalog {
    entries: AHashMap<ProfileKey, UnitTypeEntry>,
}

impl ProfileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used only while assembling the catalogue
    pub fn with_entry(mut self, key: ProfileKey, entry: UnitTypeEntry) -> Self {
        self.entries.insert(key, entry);
        self
    }

    pub fn lookup(&self, key: &ProfileKey) -> Option<&UnitTypeEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::profile::{CombatRating, TransportKind};

    fn entry_with_all_variants() -> UnitTypeEntry {
        UnitTypeEntry {
            deployed: CapabilityProfile::new(
                "deployed",
                4.0,
                TransportKind::Ground,
                CombatRating::new(8, 10).unwrap(),
            ),
            mounted: Some(CapabilityProfile::new(
                "mounted",
                8.0,
                TransportKind::Ground,
                CombatRating::new(6, 6).unwrap(),
            )),
            transport: Some(CapabilityProfile::new(
                "airlift",
                20.0,
                TransportKind::FixedWing,
                CombatRating::new(0, 2).unwrap(),
            )),
        }
    }

    #[test]
    fn test_active_profile_selection() {
        let entry = entry_with_all_variants();

        assert_eq!(entry.active_profile(Posture::Fortified).unwrap().name, "deployed");
        assert_eq!(entry.active_profile(Posture::Deployed).unwrap().name, "deployed");
        assert_eq!(entry.active_profile(Posture::Mobile).unwrap().name, "mounted");
        assert_eq!(entry.active_profile(Posture::Embarked).unwrap().name, "airlift");
    }

    #[test]
    fn test_missing_variants_resolve_to_none() {
        let mut entry = entry_with_all_variants();
        entry.mounted = None;
        entry.transport = None;

        assert!(entry.active_profile(Posture::Mobile).is_none());
        assert!(entry.active_profile(Posture::Embarked).is_none());
        assert!(entry.active_profile(Posture::Deployed).is_some());
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog =
            ProfileCatalog::new().with_entry(ProfileKey::from("RIFLE_BN"), entry_with_all_variants());

        assert!(catalog.lookup(&ProfileKey::from("RIFLE_BN")).is_some());
        assert!(catalog.lookup(&ProfileKey::from("MISSING")).is_none());
        assert_eq!(catalog.len(), 1);
    }
}
