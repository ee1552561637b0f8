//! Tactical deployment postures
//!
//! Every unit is in exactly one posture at all times. Posture changes
//! move one step along a fixed ladder; there are no arbitrary jumps.

use serde::{Deserialize, Serialize};

/// A unit's tactical deployment state, ordered from most dug-in to
/// fully loaded on transport.
///
/// The derived `Ord` matches the ladder ordering; transitions are
/// expressed through [`Posture::next_up`], never through raw ordinal
/// arithmetic, so an out-of-range step cannot produce an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Posture {
    /// Fully fortified position, maximum defensive benefit
    Fortified,
    /// Dug in, but less developed than Fortified
    Entrenched,
    /// Quickly scraped positions
    HastyDefense,
    /// Standing deployment, ready to fight or move
    #[default]
    Deployed,
    /// Mounted and moving, movement bonus applies
    Mobile,
    /// Loaded onto transport (aircraft, helicopters, ships)
    Embarked,
}

impl Posture {
    /// The next posture up the ladder, or `None` at the top
    pub fn next_up(self) -> Option<Posture> {
        match self {
            Posture::Fortified => Some(Posture::Entrenched),
            Posture::Entrenched => Some(Posture::HastyDefense),
            Posture::HastyDefense => Some(Posture::Deployed),
            Posture::Deployed => Some(Posture::Mobile),
            Posture::Mobile => Some(Posture::Embarked),
            Posture::Embarked => None,
        }
    }

    /// Is this one of the dug-in defensive postures?
    pub fn is_defensive(self) -> bool {
        matches!(
            self,
            Posture::Fortified | Posture::Entrenched | Posture::HastyDefense
        )
    }
}

impl std::fmt::Display for Posture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Posture::Fortified => "Fortified",
            Posture::Entrenched => "Entrenched",
            Posture::HastyDefense => "Hasty Defense",
            Posture::Deployed => "Deployed",
            Posture::Mobile => "Mobile",
            Posture::Embarked => "Embarked",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_totally_ordered() {
        assert!(Posture::Fortified < Posture::Entrenched);
        assert!(Posture::Entrenched < Posture::HastyDefense);
        assert!(Posture::HastyDefense < Posture::Deployed);
        assert!(Posture::Deployed < Posture::Mobile);
        assert!(Posture::Mobile < Posture::Embarked);
    }

    #[test]
    fn test_next_up_walks_whole_ladder() {
        let mut posture = Posture::Fortified;
        let mut steps = 0;
        while let Some(next) = posture.next_up() {
            assert!(next > posture);
            posture = next;
            steps += 1;
        }
        assert_eq!(posture, Posture::Embarked);
        assert_eq!(steps, 5);
    }

    #[test]
    fn test_embarked_is_terminal() {
        assert_eq!(Posture::Embarked.next_up(), None);
    }

    #[test]
    fn test_defensive_postures() {
        assert!(Posture::Fortified.is_defensive());
        assert!(Posture::Entrenched.is_defensive());
        assert!(Posture::HastyDefense.is_defensive());
        assert!(!Posture::Deployed.is_defensive());
        assert!(!Posture::Mobile.is_defensive());
        assert!(!Posture::Embarked.is_defensive());
    }
}
