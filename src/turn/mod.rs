//! Turn-resolution driver hooks
//!
//! The surrounding game loop owns turn order and scheduling; these
//! helpers are the only per-turn bookkeeping the unit-state systems
//! need from it.

use crate::core::config::config;
use crate::core::types::Turn;
use crate::experience::NotificationSink;
use crate::forces::Unit;

/// Start-of-turn reset for one unit
///
/// Refills the deployment-action budget from config.
pub fn start_turn(unit: &mut Unit, game_turn: Turn) {
    unit.actions.reset(config().actions_per_turn);
    tracing::debug!(game_turn, unit = %unit.name, "turn start");
}

/// Award post-combat experience through the unit's ladder
pub fn award_combat_experience(
    unit: &mut Unit,
    points: i32,
    sink: &mut dyn NotificationSink,
) -> bool {
    unit.award_experience(points, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CapabilityProfile, CombatRating, TransportKind, UnitTypeEntry};
    use crate::core::types::{ProfileKey, TemplateId};
    use crate::experience::{ExperienceLevel, RecordingSink};
    use crate::forces::UnitClass;

    fn unit() -> Unit {
        let entry = UnitTypeEntry {
            deployed: CapabilityProfile::new(
                "Rifle Bn",
                4.0,
                TransportKind::Ground,
                CombatRating::new(8, 10).unwrap(),
            ),
            mounted: None,
            transport: None,
        };
        Unit::new(
            "1st Rifle Bn",
            "US",
            UnitClass::Infantry,
            ProfileKey::from("RIFLE_BN"),
            TemplateId::from("US_RIFLE_BN"),
            &entry,
            100,
        )
    }

    #[test]
    fn test_start_turn_refills_actions() {
        let mut unit = unit();
        unit.actions.reset(0);

        start_turn(&mut unit, 1);
        assert_eq!(unit.actions.remaining(), config().actions_per_turn);
    }

    #[test]
    fn test_award_forwards_to_ladder() {
        let mut unit = unit();
        let mut sink = RecordingSink::default();

        unit.experience.set_experience(45);
        assert!(award_combat_experience(&mut unit, 10, &mut sink));
        assert_eq!(unit.experience.level(), ExperienceLevel::Green);
        assert_eq!(sink.advancements(), 1);

        assert!(!award_combat_experience(&mut unit, 0, &mut sink));
    }
}
