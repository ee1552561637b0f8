//! Per-unit resource pools
//!
//! Movement points, supply days and the per-turn deployment-action
//! budget. Invariants: `0 <= current <= max` for movement, supply and
//! actions never go negative.

use serde::{Deserialize, Serialize};

/// Movement-point pool
///
/// `max` is always derived from the active capability profile; it is
/// never set independently of a profile recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementPoints {
    current: f32,
    max: f32,
}

impl MovementPoints {
    /// Fresh pool at full capacity
    pub fn full(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Fraction of the pool remaining, 1.0 for an empty-capacity pool
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            1.0
        } else {
            self.current / self.max
        }
    }

    /// Switch to a new maximum, preserving the current/max ratio
    ///
    /// A unit that had spent half its movement still has half after the
    /// recomputation; transitions never grant free movement.
    pub fn rescale_to(&mut self, new_max: f32) {
        let ratio = self.ratio();
        self.max = new_max.max(0.0);
        self.current = (self.max * ratio).clamp(0.0, self.max);
    }

    /// Additively raise both current and max (the Mobile bonus)
    ///
    /// Current is clamped to [0, max] afterwards.
    pub fn apply_bonus(&mut self, bonus: f32) {
        self.max = (self.max + bonus).max(0.0);
        self.current = (self.current + bonus).clamp(0.0, self.max);
    }

    /// Spend movement, saturating at zero
    pub fn spend(&mut self, amount: f32) {
        self.current = (self.current - amount.max(0.0)).max(0.0);
    }
}

/// Days of supply on hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplyPool {
    days: f32,
}

impl SupplyPool {
    pub fn new(days: f32) -> Self {
        Self { days: days.max(0.0) }
    }

    pub fn days(&self) -> f32 {
        self.days
    }

    /// Consume supply, saturating at zero
    pub fn consume(&mut self, days: f32) {
        self.days = (self.days - days.max(0.0)).max(0.0);
    }

    /// Top up supply
    pub fn replenish(&mut self, days: f32) {
        self.days += days.max(0.0);
    }
}

/// Per-turn deployment-action budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBudget {
    remaining: u32,
}

impl ActionBudget {
    pub fn new(actions: u32) -> Self {
        Self { remaining: actions }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Spend one action; false if none remain
    pub fn spend(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Start-of-turn reset
    pub fn reset(&mut self, actions: u32) {
        self.remaining = actions;
    }
}
