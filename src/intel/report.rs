//! Intelligence report types
//!
//! A report is a transient, per-query view of an enemy unit. Nothing
//! here is persisted; every query regenerates the report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::forces::{EfficiencyLevel, Posture};
use crate::experience::ExperienceLevel;

/// How well the observer has spotted the target, worst to best
///
/// Each tier reveals a superset of the previous tier's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpottingQuality {
    /// Tier 0: not spotted, no report at all
    NotSpotted,
    /// Tier 1: name, nationality and posture only
    Minimal,
    /// Tier 2: equipment visible through a wide error band
    Poor,
    /// Tier 3: narrow error band, readiness revealed
    Good,
    /// Tier 4: exact counts
    Perfect,
}

impl SpottingQuality {
    /// Are equipment buckets visible at this tier?
    pub fn reveals_equipment(self) -> bool {
        self >= SpottingQuality::Poor
    }

    /// Are experience and efficiency revealed at this tier?
    pub fn reveals_readiness(self) -> bool {
        self >= SpottingQuality::Good
    }

    /// Relative error band applied to bucket counts, `None` when exact
    pub fn error_band(self) -> Option<f64> {
        let cfg = crate::core::config::config();
        match self {
            SpottingQuality::Poor => Some(cfg.poor_spotting_error),
            SpottingQuality::Good => Some(cfg.good_spotting_error),
            _ => None,
        }
    }
}

/// Display category aggregating several underlying equipment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentBucket {
    Men,
    Tanks,
    Afvs,
    Artillery,
    AirDefense,
    Helicopters,
    Trucks,
}

impl std::fmt::Display for EquipmentBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EquipmentBucket::Men => "Men",
            EquipmentBucket::Tanks => "Tanks",
            EquipmentBucket::Afvs => "AFVs",
            EquipmentBucket::Artillery => "Artillery",
            EquipmentBucket::AirDefense => "Air Defense",
            EquipmentBucket::Helicopters => "Helicopters",
            EquipmentBucket::Trucks => "Trucks",
        };
        write!(f, "{}", name)
    }
}

/// Equipment-id prefix to display bucket, first match wins
///
/// Many-to-one by design; prefixes with no entry here are deliberately
/// invisible in reports.
const BUCKET_PREFIXES: &[(&str, EquipmentBucket)] = &[
    ("REG", EquipmentBucket::Men),
    ("INF", EquipmentBucket::Men),
    ("ENG", EquipmentBucket::Men),
    ("TANK", EquipmentBucket::Tanks),
    ("APC", EquipmentBucket::Afvs),
    ("IFV", EquipmentBucket::Afvs),
    ("RCN", EquipmentBucket::Afvs),
    ("ART", EquipmentBucket::Artillery),
    ("MRL", EquipmentBucket::Artillery),
    ("MORT", EquipmentBucket::Artillery),
    ("SAM", EquipmentBucket::AirDefense),
    ("AAA", EquipmentBucket::AirDefense),
    ("HELO", EquipmentBucket::Helicopters),
    ("TRK", EquipmentBucket::Trucks),
];

/// The display bucket for an equipment identifier, if any
pub fn bucket_for(equipment_id: &str) -> Option<EquipmentBucket> {
    BUCKET_PREFIXES
        .iter()
        .find(|(prefix, _)| equipment_id.starts_with(prefix))
        .map(|(_, bucket)| *bucket)
}

/// Distorted view of one unit, as seen by an observing faction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelReport {
    pub unit_name: String,
    pub nationality: String,
    pub posture: Posture,
    /// Revealed from Good spotting upward
    pub experience: Option<ExperienceLevel>,
    /// Revealed from Good spotting upward
    pub efficiency: Option<EfficiencyLevel>,
    /// Aggregated equipment counts; buckets that would show below 1
    /// are omitted entirely, never present as zero
    pub buckets: BTreeMap<EquipmentBucket, u32>,
}
