//! Fog-of-war report generation
//!
//! Produces a distorted equipment summary of one unit for an observing
//! faction. Distortion is drawn fresh on every query; callers that need
//! replay determinism pass a seeded RNG.

use std::collections::BTreeMap;

use rand::Rng;

use crate::catalog::TemplateRegistry;
use crate::core::types::TemplateId;
use crate::experience::ExperienceLevel;
use crate::forces::{EfficiencyLevel, Posture};
use crate::intel::report::{bucket_for, EquipmentBucket, IntelReport, SpottingQuality};

/// Generate an intelligence report for one observed unit
///
/// Returns `None` only when the unit is not spotted at all. A missing
/// template degrades to a metadata-only report (logged, not an error).
/// Equipment counts are scaled by current strength, aggregated into
/// display buckets, then distorted by one independent draw per bucket
/// within the tier's error band. Buckets that round below 1 are
/// omitted.
#[allow(clippy::too_many_arguments)]
pub fn generate_report(
    templates: &TemplateRegistry,
    template_id: &TemplateId,
    unit_name: &str,
    nationality: &str,
    posture: Posture,
    current_hp: u32,
    max_hp: u32,
    experience: ExperienceLevel,
    efficiency: EfficiencyLevel,
    quality: SpottingQuality,
    rng: &mut impl Rng,
) -> Option<IntelReport> {
    if quality == SpottingQuality::NotSpotted {
        return None;
    }

    let mut report = IntelReport {
        unit_name: unit_name.to_string(),
        nationality: nationality.to_string(),
        posture,
        experience: None,
        efficiency: None,
        buckets: BTreeMap::new(),
    };

    if quality.reveals_readiness() {
        report.experience = Some(experience);
        report.efficiency = Some(efficiency);
    }

    if !quality.reveals_equipment() {
        return Some(report);
    }

    let Some(template) = templates.lookup(template_id) else {
        tracing::warn!(
            template = %template_id,
            unit = unit_name,
            "equipment template missing, report degraded to metadata"
        );
        return Some(report);
    };

    // Scale template maxima by remaining strength
    let strength_ratio = current_hp.max(1) as f64 / max_hp.max(1) as f64;

    let mut exact: BTreeMap<EquipmentBucket, f64> = BTreeMap::new();
    for (equipment_id, max_count) in template.counts() {
        let scaled = max_count as f64 * strength_ratio;
        if scaled <= 0.0 {
            continue;
        }
        let Some(bucket) = bucket_for(equipment_id) else {
            continue; // Unmapped equipment never appears in reports
        };
        *exact.entry(bucket).or_insert(0.0) += scaled;
    }

    for (bucket, count) in exact {
        let observed = match quality.error_band() {
            Some(band) => {
                // One draw per bucket: fair-coin direction, uniform magnitude
                let magnitude = rng.gen_range(0.0..band);
                let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                count * (1.0 + direction * magnitude)
            }
            None => count,
        };

        let rounded = observed.round();
        if rounded >= 1.0 {
            report.buckets.insert(bucket, rounded as u32);
        }
    }

    Some(report)
}
