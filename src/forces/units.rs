//! The unit entity
//!
//! A unit bundles the persisted state the deployment, experience and
//! intelligence subsystems operate on. All fields are plain data; the
//! save layer serialises the struct as-is.

use serde::{Deserialize, Serialize};

use crate::catalog::{ProfileCatalog, TemplateRegistry, UnitTypeEntry};
use crate::core::error::{FrontlineError, Result};
use crate::core::types::{ProfileKey, TemplateId, UnitId};
use crate::experience::{ExperienceState, NotificationSink, UnitEvent};
use crate::forces::classification::UnitClass;
use crate::forces::efficiency::EfficiencyLevel;
use crate::forces::posture::Posture;
use crate::forces::resources::{ActionBudget, MovementPoints, SupplyPool};

/// Default days of supply for a freshly raised unit
pub const INITIAL_SUPPLY_DAYS: f32 = 7.0;

/// A single maneuver unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub nationality: String,
    /// Immutable for the unit's lifetime
    pub class: UnitClass,
    pub profile_key: ProfileKey,
    pub template_id: TemplateId,

    // Tactical state
    pub posture: Posture,
    pub movement: MovementPoints,
    pub supply: SupplyPool,
    pub actions: ActionBudget,
    /// True exactly while the Mobile movement bonus is in effect.
    /// Persisted because max movement is modified additively and the
    /// save layer must be able to tell the bonus was active.
    pub mobile_bonus_applied: bool,

    // Readiness
    pub experience: ExperienceState,
    pub efficiency: EfficiencyLevel,

    // Strength
    pub current_hp: u32,
    pub max_hp: u32,
    pub destroyed: bool,
}

impl Unit {
    /// Raise a new unit at full strength in the default posture
    ///
    /// Initial movement comes from the deployed capability profile of
    /// `entry`, matching the default `Deployed` posture.
    pub fn new(
        name: impl Into<String>,
        nationality: impl Into<String>,
        class: UnitClass,
        profile_key: ProfileKey,
        template_id: TemplateId,
        entry: &UnitTypeEntry,
        max_hp: u32,
    ) -> Self {
        let actions = crate::core::config::config().actions_per_turn;
        Self {
            id: UnitId::new(),
            name: name.into(),
            nationality: nationality.into(),
            class,
            profile_key,
            template_id,
            posture: Posture::default(),
            movement: MovementPoints::full(entry.deployed.movement_points),
            supply: SupplyPool::new(INITIAL_SUPPLY_DAYS),
            actions: ActionBudget::new(actions),
            mobile_bonus_applied: false,
            experience: ExperienceState::default(),
            efficiency: EfficiencyLevel::default(),
            current_hp: max_hp,
            max_hp,
            destroyed: false,
        }
    }

    /// Raise a unit from loaded scenario data
    ///
    /// Resolves `profile_key` and `template_id` against the catalogues
    /// so a bad key surfaces at creation rather than mid-game.
    #[allow(clippy::too_many_arguments)]
    pub fn muster(
        name: impl Into<String>,
        nationality: impl Into<String>,
        class: UnitClass,
        profile_key: ProfileKey,
        template_id: TemplateId,
        catalog: &ProfileCatalog,
        templates: &TemplateRegistry,
        max_hp: u32,
    ) -> Result<Self> {
        let entry = catalog
            .lookup(&profile_key)
            .ok_or_else(|| FrontlineError::UnknownProfile(profile_key.to_string()))?;
        if templates.lookup(&template_id).is_none() {
            return Err(FrontlineError::UnknownTemplate(template_id.to_string()));
        }
        Ok(Self::new(
            name,
            nationality,
            class,
            profile_key,
            template_id,
            entry,
            max_hp,
        ))
    }

    /// Award combat-earned experience; fires a level-advancement
    /// notification through `sink` when a threshold is crossed
    pub fn award_experience(&mut self, points: i32, sink: &mut dyn NotificationSink) -> bool {
        self.experience.add_experience(self.id, points, sink)
    }

    /// Combat-effectiveness multiplier from the experience ladder
    pub fn combat_multiplier(&self) -> f32 {
        crate::experience::combat_multiplier(self.experience.level())
    }

    /// Apply damage; marks the unit destroyed at zero strength
    pub fn apply_damage(&mut self, amount: u32, sink: &mut dyn NotificationSink) {
        if self.destroyed || amount == 0 {
            return;
        }
        self.current_hp = self.current_hp.saturating_sub(amount);
        sink.notify(UnitEvent::Damaged {
            unit: self.id,
            amount,
        });
        if self.current_hp == 0 {
            self.destroyed = true;
            tracing::info!(unit = %self.name, "unit destroyed");
        }
    }

    /// Restore strength up to max; destroyed units cannot be repaired
    pub fn repair(&mut self, amount: u32, sink: &mut dyn NotificationSink) {
        if self.destroyed || amount == 0 {
            return;
        }
        let restored = (self.current_hp + amount).min(self.max_hp) - self.current_hp;
        if restored == 0 {
            return;
        }
        self.current_hp += restored;
        sink.notify(UnitEvent::Repaired {
            unit: self.id,
            amount: restored,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CapabilityProfile, CombatRating, EquipmentTemplate, TransportKind};
    use crate::experience::RecordingSink;

    fn test_entry() -> UnitTypeEntry {
        UnitTypeEntry {
            deployed: CapabilityProfile::new(
                "Rifle Bn",
                4.0,
                TransportKind::Ground,
                CombatRating::new(8, 10).unwrap(),
            ),
            mounted: None,
            transport: None,
        }
    }

    fn test_unit() -> Unit {
        Unit::new(
            "1st Rifle Bn",
            "US",
            UnitClass::Infantry,
            ProfileKey::from("RIFLE_BN"),
            TemplateId::from("US_RIFLE_BN"),
            &test_entry(),
            100,
        )
    }

    fn test_catalogues() -> (ProfileCatalog, TemplateRegistry) {
        let catalog =
            ProfileCatalog::new().with_entry(ProfileKey::from("RIFLE_BN"), test_entry());
        let templates = TemplateRegistry::new().with_template(EquipmentTemplate::new(
            TemplateId::from("US_RIFLE_BN"),
            "US Rifle Battalion",
            [("REG".to_string(), 800)],
        ));
        (catalog, templates)
    }

    #[test]
    fn test_muster_resolves_both_catalogues() {
        let (catalog, templates) = test_catalogues();
        let unit = Unit::muster(
            "1st Rifle Bn",
            "US",
            UnitClass::Infantry,
            ProfileKey::from("RIFLE_BN"),
            TemplateId::from("US_RIFLE_BN"),
            &catalog,
            &templates,
            100,
        )
        .unwrap();
        assert_eq!(unit.movement.max(), 4.0);
        assert_eq!(unit.posture, Posture::Deployed);
    }

    #[test]
    fn test_muster_rejects_unknown_keys() {
        let (catalog, templates) = test_catalogues();

        let bad_profile = Unit::muster(
            "1st Rifle Bn",
            "US",
            UnitClass::Infantry,
            ProfileKey::from("NOPE"),
            TemplateId::from("US_RIFLE_BN"),
            &catalog,
            &templates,
            100,
        );
        assert!(matches!(bad_profile, Err(FrontlineError::UnknownProfile(key)) if key == "NOPE"));

        let bad_template = Unit::muster(
            "1st Rifle Bn",
            "US",
            UnitClass::Infantry,
            ProfileKey::from("RIFLE_BN"),
            TemplateId::from("NOPE"),
            &catalog,
            &templates,
            100,
        );
        assert!(
            matches!(bad_template, Err(FrontlineError::UnknownTemplate(id)) if id == "NOPE")
        );
    }

    #[test]
    fn test_new_unit_starts_deployed_and_full() {
        let unit = test_unit();
        assert_eq!(unit.posture, Posture::Deployed);
        assert_eq!(unit.movement.current(), 4.0);
        assert_eq!(unit.movement.max(), 4.0);
        assert!(!unit.mobile_bonus_applied);
        assert!(!unit.destroyed);
    }

    #[test]
    fn test_damage_to_zero_destroys() {
        let mut unit = test_unit();
        let mut sink = RecordingSink::default();

        unit.apply_damage(40, &mut sink);
        assert_eq!(unit.current_hp, 60);
        assert!(!unit.destroyed);

        unit.apply_damage(100, &mut sink);
        assert_eq!(unit.current_hp, 0);
        assert!(unit.destroyed);
        assert_eq!(sink.events.len(), 2);
    }

    #[test]
    fn test_repair_clamps_to_max_and_skips_destroyed() {
        let mut unit = test_unit();
        let mut sink = RecordingSink::default();

        unit.apply_damage(30, &mut sink);
        unit.repair(100, &mut sink);
        assert_eq!(unit.current_hp, unit.max_hp);

        unit.apply_damage(200, &mut sink);
        assert!(unit.destroyed);
        unit.repair(10, &mut sink);
        assert_eq!(unit.current_hp, 0);
    }

    #[test]
    fn test_unit_round_trips_through_serde() {
        let unit = test_unit();
        let json = serde_json::to_string(&unit).unwrap();
        let back: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, unit.id);
        assert_eq!(back.posture, unit.posture);
        assert_eq!(back.mobile_bonus_applied, unit.mobile_bonus_applied);
    }
}
