pub mod embark;
pub mod error;
pub mod transition;

pub use embark::special_embarkment_checks;
pub use error::DeployError;
pub use transition::{can_change_to_state, recompute_movement, try_deploy_down, try_deploy_up};
