//! Embarkation prerequisites
//!
//! Evaluated only when the target posture is Embarked. Which checks
//! apply depends on the unit's classification and on what kind of lift
//! its transport profile provides.

use crate::catalog::{TransportKind, UnitTypeEntry};
use crate::deploy::error::DeployError;
use crate::forces::{Unit, UnitClass};

/// Classification-specific embarkation checks
///
/// The unit must have a transport profile at all. Airborne troops load
/// at airbases; special forces only need an airbase when their lift is
/// fixed-wing (helicopter-inserted teams load anywhere); marines load
/// at ports; air-mobile troops require helicopter lift specifically.
pub fn special_embarkment_checks(
    unit: &Unit,
    entry: &UnitTypeEntry,
    on_airbase: bool,
    on_port: bool,
) -> Result<(), DeployError> {
    let Some(transport) = entry.embarked_profile() else {
        return Err(DeployError::NoTransportAvailable);
    };

    if unit.class.is_airborne_family() && !on_airbase {
        return Err(DeployError::AirbaseRequired);
    }

    if unit.class == UnitClass::SpecialForces
        && transport.transport == TransportKind::FixedWing
        && !on_airbase
    {
        return Err(DeployError::AirbaseRequired);
    }

    if unit.class.is_marine_family() && !on_port {
        return Err(DeployError::PortRequired);
    }

    if unit.class.is_air_mobile_family() && transport.transport != TransportKind::Helicopter {
        return Err(DeployError::WrongTransportKind(TransportKind::Helicopter));
    }

    Ok(())
}
