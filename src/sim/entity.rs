//! Capabilities shared by the combatants
//!
//! Time is health: both player and boss own a [`TimePool`] that drains
//! passively and on hits.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A depleting time-value that doubles as health
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePool {
    time: f32,
    /// Value shown as a full bar on the HUD
    full: f32,
    alive: bool,
}

impl TimePool {
    pub fn new(start: f32, full: f32) -> Self {
        let time = start.max(0.0);
        Self {
            time,
            full,
            alive: time > 0.0,
        }
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_full(&mut self, full: f32) {
        self.full = full;
    }

    /// Remaining time as a 0..=1 fraction of a full bar
    pub fn fraction(&self) -> f32 {
        if self.full <= 0.0 {
            return 0.0;
        }
        (self.time / self.full).clamp(0.0, 1.0)
    }

    /// Subtract `amount`, clamping at zero.
    ///
    /// Returns true only on the call that brings the pool to zero; later
    /// calls on an empty pool are no-ops.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive || amount <= 0.0 {
            return false;
        }
        self.time -= amount;
        if self.time <= 0.0 {
            self.time = 0.0;
            self.alive = false;
            return true;
        }
        false
    }

    /// Add `amount`, capped at `max`. Dead pools stay dead.
    pub fn heal(&mut self, amount: f32, max: f32) {
        if !self.alive || amount <= 0.0 {
            return;
        }
        self.time = (self.time + amount).min(max);
    }

    /// Trim the pool down to `max` (after the cap itself was lowered)
    pub fn cap(&mut self, max: f32) {
        self.time = self.time.min(max.max(0.0));
    }
}

/// Anything that occupies a point in the world
pub trait Positioned {
    fn position(&self) -> Vec3;
}

/// Straight-line distance between two world objects
pub fn distance_between(a: &impl Positioned, b: &impl Positioned) -> f32 {
    a.position().distance(b.position())
}

/// Anything that loses time when hit
pub trait Damageable {
    fn time_pool(&self) -> &TimePool;
    fn time_pool_mut(&mut self) -> &mut TimePool;

    fn time_left(&self) -> f32 {
        self.time_pool().time()
    }

    fn is_alive(&self) -> bool {
        self.time_pool().is_alive()
    }

    /// Fill level of the HUD bar
    fn time_fraction(&self) -> f32 {
        self.time_pool().fraction()
    }

    /// Returns true on the hit that empties the pool
    fn take_damage(&mut self, amount: f32) -> bool {
        self.time_pool_mut().take_damage(amount)
    }
}

/// Handle to a loaded 3D model, owned by the loop and lent to draw code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelHandle {
    Loaded(u32),
    #[default]
    Missing,
}

impl ModelHandle {
    /// Missing models are drawn as primitive shapes instead
    pub fn uses_fallback_shape(&self) -> bool {
        matches!(self, ModelHandle::Missing)
    }
}

/// Model handles for every drawable kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets {
    pub arena: ModelHandle,
    pub player: ModelHandle,
    pub boss: ModelHandle,
    pub tomato: ModelHandle,
}
