use thiserror::Error;

use crate::catalog::TransportKind;
use crate::forces::{Posture, UnitClass};

/// Recoverable reasons a posture change can be refused
///
/// None of these mutate the unit; callers surface the message to the
/// player and carry on. Contract violations (destroyed unit, missing
/// active profile) panic instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeployError {
    #[error("unit is already embarked")]
    AlreadyEmbarked,

    #[error("unit is already in {0}")]
    AlreadyInPosture(Posture),

    #[error("{0} units cannot change deployment state")]
    ClassCannotRedeploy(UnitClass),

    #[error("supply too low to redeploy ({current:.1} days on hand, need more than {threshold:.1})")]
    SupplyTooLow { current: f32, threshold: f32 },

    #[error("unit is limited to static operations")]
    StaticOperationsOnly,

    #[error("no deployment action remaining this turn")]
    NoActionsRemaining,

    #[error("no transport profile available for embarkation")]
    NoTransportAvailable,

    #[error("embarkation requires an airbase")]
    AirbaseRequired,

    #[error("embarkation requires a port")]
    PortRequired,

    #[error("embarkation requires {0} transport")]
    WrongTransportKind(TransportKind),

    #[error("downward redeployment is not implemented")]
    NotImplemented,

    #[error("unknown profile key: {0}")]
    UnknownProfile(String),
}
