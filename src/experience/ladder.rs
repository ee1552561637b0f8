//! Experience ladder
//!
//! Accumulated points map to a discrete level through a fixed monotonic
//! threshold table; the level keys a combat-effectiveness multiplier.
//! Points and level are always updated together so they can never drift.

use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::core::types::UnitId;
use crate::experience::events::{NotificationSink, UnitEvent};

/// Experience level, six rungs from Raw to Elite
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    Raw,
    Green,
    Regular,
    Seasoned,
    Veteran,
    Elite,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 6] = [
        ExperienceLevel::Raw,
        ExperienceLevel::Green,
        ExperienceLevel::Regular,
        ExperienceLevel::Seasoned,
        ExperienceLevel::Veteran,
        ExperienceLevel::Elite,
    ];

    /// Index into the threshold/multiplier tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next rung up, or `None` at Elite
    pub fn next(self) -> Option<ExperienceLevel> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Minimum points for this level
    pub fn threshold(self) -> u32 {
        config().experience_thresholds[self.index()]
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExperienceLevel::Raw => "Raw",
            ExperienceLevel::Green => "Green",
            ExperienceLevel::Regular => "Regular",
            ExperienceLevel::Seasoned => "Seasoned",
            ExperienceLevel::Veteran => "Veteran",
            ExperienceLevel::Elite => "Elite",
        };
        write!(f, "{}", name)
    }
}

/// The unique level for a point total: the highest rung whose
/// threshold the total meets
pub fn level_for(points: u32) -> ExperienceLevel {
    let mut level = ExperienceLevel::Raw;
    for candidate in ExperienceLevel::ALL {
        if points >= candidate.threshold() {
            level = candidate;
        }
    }
    level
}

/// Point ceiling: the top rung's threshold
pub fn ceiling() -> u32 {
    config().experience_thresholds[ExperienceLevel::ALL.len() - 1]
}

/// Combat-effectiveness multiplier for a level (pure table lookup)
pub fn combat_multiplier(level: ExperienceLevel) -> f32 {
    config().experience_multipliers[level.index()]
}

/// Per-unit experience state: points and their derived level
///
/// Fields are private so the pair can only change through the methods
/// below, which keep `level == level_for(points)` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExperienceState {
    points: u32,
    level: ExperienceLevel,
}

impl ExperienceState {
    /// Restore persisted state; the level is re-derived from the
    /// points, not trusted from the save
    pub fn from_points(points: u32) -> Self {
        let points = points.min(ceiling());
        Self {
            points,
            level: level_for(points),
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn level(&self) -> ExperienceLevel {
        self.level
    }

    /// Award combat-earned experience
    ///
    /// Rejects non-positive input. The gain is clamped to the
    /// per-action maximum and the running total to the ladder ceiling.
    /// Crossing a threshold fires one advancement notification; this
    /// path never lowers the level.
    pub fn add_experience(
        &mut self,
        unit: UnitId,
        points: i32,
        sink: &mut dyn NotificationSink,
    ) -> bool {
        if points <= 0 {
            return false;
        }

        let gain = (points as u32).min(config().max_experience_gain);
        let total = self.points.saturating_add(gain).min(ceiling());
        let new_level = level_for(total);

        let old_level = self.level;
        self.points = total;
        self.level = new_level;

        if new_level != old_level {
            sink.notify(UnitEvent::LevelAdvanced {
                unit,
                from: old_level,
                to: new_level,
            });
        }
        true
    }

    /// Direct assignment (scenario scripting, save restoration)
    ///
    /// Clamps to [0, ceiling], updates points and level together, and
    /// fires no notifications. Returns the stored point total.
    pub fn set_experience(&mut self, points: i32) -> u32 {
        let clamped = points.clamp(0, ceiling() as i32) as u32;
        if clamped == self.points {
            return self.points;
        }
        self.points = clamped;
        self.level = level_for(clamped);
        self.points
    }

    /// Points still needed for the next rung, 0 at the top
    pub fn points_to_next_level(&self) -> u32 {
        match self.level.next() {
            Some(next) => next.threshold().saturating_sub(self.points),
            None => 0,
        }
    }

    /// Progress through the current rung, clamped to [0, 1]
    ///
    /// 1.0 at the top level, and whenever the bracketing thresholds
    /// coincide (degenerate-ladder guard).
    pub fn progress_fraction(&self) -> f32 {
        let current_min = self.level.threshold();
        let Some(next) = self.level.next() else {
            return 1.0;
        };
        let next_min = next.threshold();
        if next_min <= current_min {
            return 1.0;
        }
        let fraction = (self.points - current_min) as f32 / (next_min - current_min) as f32;
        fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experience::events::RecordingSink;

    #[test]
    fn test_level_for_matches_thresholds() {
        assert_eq!(level_for(0), ExperienceLevel::Raw);
        assert_eq!(level_for(49), ExperienceLevel::Raw);
        assert_eq!(level_for(50), ExperienceLevel::Green);
        assert_eq!(level_for(150), ExperienceLevel::Regular);
        assert_eq!(level_for(750), ExperienceLevel::Elite);
        assert_eq!(level_for(9999), ExperienceLevel::Elite);
    }

    #[test]
    fn test_add_rejects_non_positive() {
        let mut state = ExperienceState::from_points(45);
        let mut sink = RecordingSink::default();

        assert!(!state.add_experience(UnitId::new(), 0, &mut sink));
        assert!(!state.add_experience(UnitId::new(), -5, &mut sink));
        assert_eq!(state.points(), 45);
        assert_eq!(state.level(), ExperienceLevel::Raw);
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_crossing_green_threshold_notifies_once() {
        let mut state = ExperienceState::from_points(45);
        let mut sink = RecordingSink::default();

        assert!(state.add_experience(UnitId::new(), 10, &mut sink));
        assert_eq!(state.points(), 55);
        assert_eq!(state.level(), ExperienceLevel::Green);
        assert_eq!(sink.advancements(), 1);
    }

    #[test]
    fn test_gain_is_clamped_per_action() {
        let mut state = ExperienceState::default();
        let mut sink = RecordingSink::default();

        state.add_experience(UnitId::new(), 10_000, &mut sink);
        assert_eq!(state.points(), config().max_experience_gain);
    }

    #[test]
    fn test_total_is_clamped_to_ceiling() {
        let mut state = ExperienceState::from_points(ceiling() - 5);
        let mut sink = RecordingSink::default();

        state.add_experience(UnitId::new(), 25, &mut sink);
        assert_eq!(state.points(), ceiling());
        assert_eq!(state.level(), ExperienceLevel::Elite);

        // Stays pinned at the ceiling
        state.add_experience(UnitId::new(), 25, &mut sink);
        assert_eq!(state.points(), ceiling());
    }

    #[test]
    fn test_set_experience_clamps_and_is_silent() {
        let mut state = ExperienceState::default();

        assert_eq!(state.set_experience(-10), 0);
        assert_eq!(state.set_experience(200), 200);
        assert_eq!(state.level(), ExperienceLevel::Regular);
        assert_eq!(state.set_experience(100_000), ceiling());
        assert_eq!(state.level(), ExperienceLevel::Elite);
    }

    #[test]
    fn test_set_experience_short_circuits() {
        let mut state = ExperienceState::from_points(60);
        assert_eq!(state.set_experience(60), 60);
        assert_eq!(state.level(), ExperienceLevel::Green);
    }

    #[test]
    fn test_level_always_derived_from_points() {
        let mut state = ExperienceState::default();
        let mut sink = RecordingSink::default();

        for step in [3, 25, 25, 17, 25, 25, 25, 25] {
            state.add_experience(UnitId::new(), step, &mut sink);
            assert_eq!(state.level(), level_for(state.points()));
        }
        state.set_experience(499);
        assert_eq!(state.level(), level_for(state.points()));
    }

    #[test]
    fn test_points_to_next_level() {
        let state = ExperienceState::from_points(45);
        assert_eq!(state.points_to_next_level(), 5);

        let top = ExperienceState::from_points(ceiling());
        assert_eq!(top.points_to_next_level(), 0);
    }

    #[test]
    fn test_progress_fraction() {
        let state = ExperienceState::from_points(25);
        assert!((state.progress_fraction() - 0.5).abs() < 1e-6);

        let top = ExperienceState::from_points(ceiling());
        assert_eq!(top.progress_fraction(), 1.0);
    }

    #[test]
    fn test_multiplier_is_monotonic() {
        let mut previous = 0.0;
        for level in ExperienceLevel::ALL {
            let multiplier = combat_multiplier(level);
            assert!(multiplier > previous);
            previous = multiplier;
        }
    }
}
