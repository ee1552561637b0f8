//! Game rules configuration with documented constants
//!
//! All tunable values for the unit-state systems are collected here.
//! Scenario files can override any of them via TOML; the core logic
//! never hard-codes these numbers.

use serde::Deserialize;

/// Configuration for deployment, experience and intelligence rules
///
/// Defaults are the standard-scenario tuning. Changing them affects
/// game balance, not core logic.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    // === DEPLOYMENT ===
    /// Days of supply consumed by every successful posture change
    ///
    /// Redeployment burns fuel and stores. At the default (0.5), a unit
    /// with a week of supply can afford many transitions before supply
    /// becomes the limiting factor.
    pub supply_transition_cost: f32,

    /// Supply level (days) at or below which redeployment is refused
    ///
    /// Units at critical supply hold position; they cannot afford the
    /// fuel expenditure of a posture change.
    pub critical_supply_threshold: f32,

    /// Movement points added to current and max when entering Mobile
    ///
    /// Additive, never multiplicative. Removed implicitly by the next
    /// profile recomputation when the unit leaves Mobile.
    pub mobile_movement_bonus: f32,

    /// Deployment actions granted at the start of each turn
    ///
    /// Each successful posture change spends exactly one.
    pub actions_per_turn: u32,

    // === EXPERIENCE ===
    /// Cap on experience gained from a single award
    ///
    /// Prevents one lopsided engagement from flooding a unit with
    /// points; progression stays gradual.
    pub max_experience_gain: u32,

    /// Minimum points for each experience level, Raw through Elite
    ///
    /// Must be strictly increasing and start at 0. The top entry is
    /// also the ceiling: accumulated points never exceed it.
    pub experience_thresholds: [u32; 6],

    /// Combat-effectiveness multiplier per experience level
    pub experience_multipliers: [f32; 6],

    // === INTELLIGENCE ===
    /// Relative error band for Poor spotting quality (0.30 = ±30%)
    pub poor_spotting_error: f64,

    /// Relative error band for Good spotting quality (0.10 = ±10%)
    pub good_spotting_error: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            // Deployment
            supply_transition_cost: 0.5,
            critical_supply_threshold: 2.0,
            mobile_movement_bonus: 2.0,
            actions_per_turn: 1,

            // Experience (Raw, Green, Regular, Seasoned, Veteran, Elite)
            max_experience_gain: 25,
            experience_thresholds: [0, 50, 150, 300, 500, 750],
            experience_multipliers: [0.7, 0.85, 1.0, 1.1, 1.25, 1.4],

            // Intelligence
            poor_spotting_error: 0.30,
            good_spotting_error: 0.10,
        }
    }
}

impl RulesConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; absent fields keep their defaults
    pub fn from_toml_str(text: &str) -> crate::core::error::Result<Self> {
        let config: RulesConfig = toml::from_str(text)?;
        config
            .validate()
            .map_err(crate::core::error::FrontlineError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.experience_thresholds[0] != 0 {
            return Err(format!(
                "experience_thresholds must start at 0, got {}",
                self.experience_thresholds[0]
            ));
        }

        for pair in self.experience_thresholds.windows(2) {
            if pair[1] <= pair[0] {
                return Err(format!(
                    "experience_thresholds must be strictly increasing ({} then {})",
                    pair[0], pair[1]
                ));
            }
        }

        if self.supply_transition_cost < 0.0 || self.critical_supply_threshold < 0.0 {
            return Err("Supply constants must be non-negative".into());
        }

        if self.actions_per_turn == 0 {
            return Err("actions_per_turn must be at least 1".into());
        }

        for band in [self.poor_spotting_error, self.good_spotting_error] {
            if !(0.0..1.0).contains(&band) {
                return Err(format!("Spotting error band {} outside [0, 1)", band));
            }
        }

        if self.good_spotting_error > self.poor_spotting_error {
            return Err(format!(
                "good_spotting_error ({}) should be <= poor_spotting_error ({})",
                self.good_spotting_error, self.poor_spotting_error
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<RulesConfig> = OnceLock::new();

/// Get the global rules config (initializes with defaults if not set)
pub fn config() -> &'static RulesConfig {
    CONFIG.get_or_init(RulesConfig::default)
}

/// Set the global rules config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: RulesConfig) -> Result<(), RulesConfig> {
    CONFIG.set(config)
}
