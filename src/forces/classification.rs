//! Unit classification
//!
//! The classification is fixed at unit creation and never changes.
//! It gates which posture transitions are legal and which embarkation
//! prerequisites apply.

use serde::{Deserialize, Serialize};

/// Branch/type classification for a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitClass {
    Infantry,
    Mechanized,
    Tank,
    Airborne,
    AirMobile,
    Marine,
    SpecialForces,
    FixedWing,
    Helicopter,
    /// HQ, depot or other immobile installation
    Base,
}

impl UnitClass {
    /// Can this class ever change deployment posture?
    ///
    /// Fixed-wing aircraft and immobile installations never redeploy.
    pub fn can_change_posture(self) -> bool {
        !matches!(self, UnitClass::FixedWing | UnitClass::Base)
    }

    /// Paratroop family: embarkation requires an airbase
    pub fn is_airborne_family(self) -> bool {
        matches!(self, UnitClass::Airborne)
    }

    /// Amphibious family: embarkation requires a port
    pub fn is_marine_family(self) -> bool {
        matches!(self, UnitClass::Marine)
    }

    /// Helicopter-lifted family: embarkation requires helicopter transport
    pub fn is_air_mobile_family(self) -> bool {
        matches!(self, UnitClass::AirMobile)
    }
}

impl std::fmt::Display for UnitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UnitClass::Infantry => "Infantry",
            UnitClass::Mechanized => "Mechanized",
            UnitClass::Tank => "Tank",
            UnitClass::Airborne => "Airborne",
            UnitClass::AirMobile => "Air Mobile",
            UnitClass::Marine => "Marine",
            UnitClass::SpecialForces => "Special Forces",
            UnitClass::FixedWing => "Fixed-Wing",
            UnitClass::Helicopter => "Helicopter",
            UnitClass::Base => "Base",
        };
        write!(f, "{}", name)
    }
}
