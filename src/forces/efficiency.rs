//! Operational readiness (efficiency)
//!
//! An independent axis from experience: a veteran unit can still be
//! worn down to static operations by attrition and fatigue.

use serde::{Deserialize, Serialize};

/// Operational-readiness tier, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyLevel {
    /// Can hold position only; redeployment heavily restricted
    StaticOperations,
    /// Reduced tempo operations
    Degraded,
    /// Normal operations
    Operational,
    /// Full tempo operations
    #[default]
    FullyOperational,
}

impl EfficiencyLevel {
    /// Is this the lowest readiness tier?
    pub fn is_static_operations(self) -> bool {
        matches!(self, EfficiencyLevel::StaticOperations)
    }
}

impl std::fmt::Display for EfficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EfficiencyLevel::StaticOperations => "Static Operations",
            EfficiencyLevel::Degraded => "Degraded",
            EfficiencyLevel::Operational => "Operational",
            EfficiencyLevel::FullyOperational => "Fully Operational",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_operations_is_lowest() {
        assert!(EfficiencyLevel::StaticOperations < EfficiencyLevel::Degraded);
        assert!(EfficiencyLevel::Degraded < EfficiencyLevel::Operational);
        assert!(EfficiencyLevel::Operational < EfficiencyLevel::FullyOperational);
        assert!(EfficiencyLevel::StaticOperations.is_static_operations());
        assert!(!EfficiencyLevel::Degraded.is_static_operations());
    }
}
