pub mod events;
pub mod ladder;

pub use events::{LogSink, NotificationSink, RecordingSink, UnitEvent};
pub use ladder::{ceiling, combat_multiplier, level_for, ExperienceLevel, ExperienceState};
