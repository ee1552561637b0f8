pub mod loader;
pub mod profile;
pub mod registry;
pub mod template;

pub use loader::{load_scenario_file, load_scenario_str};
pub use profile::{CapabilityProfile, CombatRating, TransportKind};
pub use registry::{ProfileCatalog, UnitTypeEntry};
pub use template::{EquipmentTemplate, TemplateRegistry};
