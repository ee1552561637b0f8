pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, RulesConfig};
pub use error::{FrontlineError, Result};
pub use types::{ProfileKey, TemplateId, UnitId};
