pub mod generator;
pub mod report;

pub use generator::generate_report;
pub use report::{bucket_for, EquipmentBucket, IntelReport, SpottingQuality};
