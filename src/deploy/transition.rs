//! Posture transitions
//!
//! `try_deploy_up` moves a unit one step up the posture ladder, with
//! one intentional special case: a unit abandoning a Fortified or
//! Entrenched position always lands at Deployed. De-fortifying is a
//! full tear-down, not a one-step adjustment, so entrenched units
//! cannot reach HastyDefense or beyond in a single action.

use crate::catalog::ProfileCatalog;
use crate::core::config::config;
use crate::deploy::embark::special_embarkment_checks;
use crate::deploy::error::DeployError;
use crate::forces::{Posture, Unit};

/// Attempt to move the unit one posture up the ladder
///
/// Preconditions are checked in order and the first failure wins; a
/// refused transition leaves the unit untouched. On success the supply
/// cost, action spend, movement recomputation and mobile-bonus update
/// are all applied together, and the new posture is returned.
pub fn try_deploy_up(
    unit: &mut Unit,
    catalog: &ProfileCatalog,
    on_airbase: bool,
    on_port: bool,
) -> Result<Posture, DeployError> {
    // Embarked is terminal for upward movement
    let Some(target) = unit.posture.next_up() else {
        return Err(DeployError::AlreadyEmbarked);
    };

    can_change_to_state(unit, target)?;

    let entry = catalog
        .lookup(&unit.profile_key)
        .ok_or_else(|| DeployError::UnknownProfile(unit.profile_key.to_string()))?;

    if target == Posture::Embarked {
        special_embarkment_checks(unit, entry, on_airbase, on_port)?;
    }

    // Abandoning a dug-in position collapses straight to Deployed
    let new_posture = if matches!(unit.posture, Posture::Fortified | Posture::Entrenched) {
        Posture::Deployed
    } else {
        target
    };

    let cfg = config();
    let old_posture = unit.posture;

    unit.supply.consume(cfg.supply_transition_cost);
    unit.actions.spend();
    unit.posture = new_posture;
    recompute_movement(unit, catalog);

    if new_posture == Posture::Mobile {
        unit.movement.apply_bonus(cfg.mobile_movement_bonus);
        unit.mobile_bonus_applied = true;
    } else {
        // The bonus is not subtracted back out: the recomputation above
        // already rebuilt max movement from the new profile. Only the
        // persisted marker is cleared.
        unit.mobile_bonus_applied = false;
    }

    tracing::debug!(
        unit = %unit.name,
        from = %old_posture,
        to = %new_posture,
        movement = unit.movement.current(),
        "posture change"
    );

    Ok(new_posture)
}

/// Downward posture regression has no defined rule set
///
/// Kept as an explicit failure rather than invented semantics; flagged
/// for product clarification.
pub fn try_deploy_down(_unit: &mut Unit) -> Result<Posture, DeployError> {
    Err(DeployError::NotImplemented)
}

/// General legality checks for a posture change
///
/// Failure reasons, first match wins: no-op target, non-transitioning
/// classification, critical supply, static-operations restriction,
/// exhausted action budget.
///
/// # Panics
///
/// Panics if the unit is destroyed. Callers must never ask a destroyed
/// unit to redeploy; that is an upstream bug, not a rule violation.
pub fn can_change_to_state(unit: &Unit, target: Posture) -> Result<(), DeployError> {
    if target == unit.posture {
        return Err(DeployError::AlreadyInPosture(target));
    }

    assert!(
        !unit.destroyed,
        "posture change attempted on destroyed unit {:?} ({})",
        unit.id, unit.name
    );

    if !unit.class.can_change_posture() {
        return Err(DeployError::ClassCannotRedeploy(unit.class));
    }

    let cfg = config();
    if unit.supply.days() <= cfg.critical_supply_threshold {
        return Err(DeployError::SupplyTooLow {
            current: unit.supply.days(),
            threshold: cfg.critical_supply_threshold,
        });
    }

    if unit.efficiency.is_static_operations()
        && (unit.posture.is_defensive() || target == Posture::Mobile)
    {
        return Err(DeployError::StaticOperationsOnly);
    }

    if unit.actions.remaining() == 0 {
        return Err(DeployError::NoActionsRemaining);
    }

    Ok(())
}

/// Rebuild the movement pool from the active profile for the unit's
/// current posture, preserving the spent fraction
///
/// # Panics
///
/// Panics if no active profile resolves; that is a broken catalogue,
/// not a recoverable condition.
pub fn recompute_movement(unit: &mut Unit, catalog: &ProfileCatalog) {
    let entry = catalog.lookup(&unit.profile_key).unwrap_or_else(|| {
        panic!(
            "no catalogue entry for {} while recomputing movement",
            unit.profile_key
        )
    });
    let profile = entry.active_profile(unit.posture).unwrap_or_else(|| {
        panic!(
            "no active capability profile for {} in posture {}",
            unit.profile_key, unit.posture
        )
    });

    unit.movement.rescale_to(profile.movement_points);
}
