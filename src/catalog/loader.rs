//! Load the profile catalogue and equipment templates from TOML
//!
//! Scenario data lives in a single TOML document with `[profiles.*]`
//! and `[templates.*]` tables. The core never reads files itself; this
//! loader is the thin layer the composition root calls once at startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::profile::{CapabilityProfile, CombatRating, TransportKind};
use crate::catalog::registry::{ProfileCatalog, UnitTypeEntry};
use crate::catalog::template::{EquipmentTemplate, TemplateRegistry};
use crate::core::error::Result;
use crate::core::types::{ProfileKey, TemplateId};

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    profiles: BTreeMap<String, RawEntry>,
    #[serde(default)]
    templates: BTreeMap<String, RawTemplate>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    deployed: RawProfile,
    mounted: Option<RawProfile>,
    transport: Option<RawProfile>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    name: String,
    movement: f32,
    attack: u8,
    defense: u8,
    #[serde(default)]
    transport: TransportKind,
}

#[derive(Debug, Deserialize)]
struct RawTemplate {
    name: String,
    #[serde(default)]
    equipment: BTreeMap<String, u32>,
}

fn build_profile(raw: &RawProfile) -> Result<CapabilityProfile> {
    Ok(CapabilityProfile::new(
        raw.name.clone(),
        raw.movement,
        raw.transport,
        CombatRating::new(raw.attack, raw.defense)?,
    ))
}

/// Parse a scenario document into a catalogue and template registry
pub fn load_scenario_str(text: &str) -> Result<(ProfileCatalog, TemplateRegistry)> {
    let file: ScenarioFile = toml::from_str(text)?;

    let mut catalog = ProfileCatalog::new();
    for (key, raw) in &file.profiles {
        let entry = UnitTypeEntry {
            deployed: build_profile(&raw.deployed)?,
            mounted: raw.mounted.as_ref().map(build_profile).transpose()?,
            transport: raw.transport.as_ref().map(build_profile).transpose()?,
        };
        catalog = catalog.with_entry(ProfileKey(key.clone()), entry);
    }

    let mut templates = TemplateRegistry::new();
    for (id, raw) in &file.templates {
        templates = templates.with_template(EquipmentTemplate::new(
            TemplateId(id.clone()),
            raw.name.clone(),
            raw.equipment.iter().map(|(k, v)| (k.clone(), *v)),
        ));
    }

    tracing::info!(
        profiles = catalog.len(),
        templates = templates.len(),
        "scenario data loaded"
    );

    Ok((catalog, templates))
}

/// Load a scenario document from disk
pub fn load_scenario_file(path: &Path) -> Result<(ProfileCatalog, TemplateRegistry)> {
    let text = fs::read_to_string(path)?;
    load_scenario_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[profiles.TANK_BN.deployed]
name = "Tank Battalion"
movement = 6.0
attack = 14
defense = 12

[profiles.TANK_BN.mounted]
name = "Tank Battalion (road march)"
movement = 10.0
attack = 6
defense = 6

[templates.SOV_TANK_BN]
name = "Soviet Tank Battalion"

[templates.SOV_TANK_BN.equipment]
TANK = 40
REG = 1000
"#;

    #[test]
    fn test_load_sample_scenario() {
        let (catalog, templates) = load_scenario_str(SAMPLE).unwrap();

        let entry = catalog.lookup(&ProfileKey::from("TANK_BN")).unwrap();
        assert_eq!(entry.deployed.movement_points, 6.0);
        assert_eq!(entry.deployed.rating.attack(), 14);
        assert!(entry.mounted.is_some());
        assert!(entry.transport.is_none());

        let template = templates.lookup(&TemplateId::from("SOV_TANK_BN")).unwrap();
        assert_eq!(template.max_count("TANK"), 40);
        assert_eq!(template.max_count("REG"), 1000);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let bad = r#"
[profiles.X.deployed]
name = "X"
movement = 1.0
attack = 99
defense = 1
"#;
        assert!(load_scenario_str(bad).is_err());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(load_scenario_str("not [ valid").is_err());
    }
}
