//! Capability profiles
//!
//! Immutable combat/movement statistics for a unit type in one of its
//! posture-dependent configurations (deployed, mounted, transport).

use serde::{Deserialize, Serialize};

use crate::core::error::{FrontlineError, Result};

/// Upper bound for attack ratings
pub const MAX_ATTACK_RATING: u8 = 50;

/// Upper bound for defense ratings
pub const MAX_DEFENSE_RATING: u8 = 50;

/// Attack/defense value pair with independently validated ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRating {
    attack: u8,
    defense: u8,
}

impl CombatRating {
    pub fn new(attack: u8, defense: u8) -> Result<Self> {
        if attack > MAX_ATTACK_RATING {
            return Err(FrontlineError::InvalidRating(format!(
                "attack {} exceeds maximum {}",
                attack, MAX_ATTACK_RATING
            )));
        }
        if defense > MAX_DEFENSE_RATING {
            return Err(FrontlineError::InvalidRating(format!(
                "defense {} exceeds maximum {}",
                defense, MAX_DEFENSE_RATING
            )));
        }
        Ok(Self { attack, defense })
    }

    pub fn attack(&self) -> u8 {
        self.attack
    }

    pub fn defense(&self) -> u8 {
        self.defense
    }
}

/// What kind of lift a transport configuration provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    #[default]
    Ground,
    FixedWing,
    Helicopter,
    Naval,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TransportKind::Ground => "ground",
            TransportKind::FixedWing => "fixed-wing",
            TransportKind::Helicopter => "helicopter",
            TransportKind::Naval => "naval",
        };
        write!(f, "{}", name)
    }
}

/// Immutable capability data for one posture-dependent configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityProfile {
    pub name: String,
    pub movement_points: f32,
    pub transport: TransportKind,
    pub rating: CombatRating,
}

impl CapabilityProfile {
    pub fn new(
        name: impl Into<String>,
        movement_points: f32,
        transport: TransportKind,
        rating: CombatRating,
    ) -> Self {
        Self {
            name: name.into(),
            movement_points,
            transport,
            rating,
        }
    }

    /// Copy with a different display name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}
