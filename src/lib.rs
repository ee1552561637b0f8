//! Frontline - Operational Wargame Unit State

pub mod catalog;
pub mod core;
pub mod deploy;
pub mod experience;
pub mod forces;
pub mod intel;
pub mod turn;
