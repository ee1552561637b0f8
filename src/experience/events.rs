//! Notification events emitted by the unit-state systems
//!
//! Fire-and-forget: the core never consumes a return value from the
//! sink. The UI layer subscribes for message-log entries.

use crate::core::types::UnitId;
use crate::experience::ladder::ExperienceLevel;

/// Observer-visible unit events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitEvent {
    /// Combat-earned experience crossed a ladder threshold
    LevelAdvanced {
        unit: UnitId,
        from: ExperienceLevel,
        to: ExperienceLevel,
    },
    Damaged {
        unit: UnitId,
        amount: u32,
    },
    Repaired {
        unit: UnitId,
        amount: u32,
    },
}

/// Fire-and-forget notification sink
pub trait NotificationSink {
    fn notify(&mut self, event: UnitEvent);
}

/// Sink that writes events to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, event: UnitEvent) {
        match event {
            UnitEvent::LevelAdvanced { unit, from, to } => {
                tracing::info!(?unit, %from, %to, "unit advanced in experience");
            }
            UnitEvent::Damaged { unit, amount } => {
                tracing::debug!(?unit, amount, "unit took damage");
            }
            UnitEvent::Repaired { unit, amount } => {
                tracing::debug!(?unit, amount, "unit repaired");
            }
        }
    }
}

/// Sink that records events for inspection in tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<UnitEvent>,
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, event: UnitEvent) {
        self.events.push(event);
    }
}

impl RecordingSink {
    /// Count of level-advancement events recorded
    pub fn advancements(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, UnitEvent::LevelAdvanced { .. }))
            .count()
    }
}
