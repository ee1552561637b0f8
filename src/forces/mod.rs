pub mod classification;
pub mod efficiency;
pub mod posture;
pub mod resources;
pub mod units;

pub use classification::UnitClass;
pub use efficiency::EfficiencyLevel;
pub use posture::Posture;
pub use resources::{ActionBudget, MovementPoints, SupplyPool};
pub use units::Unit;
