//! Fixed-capacity projectile pools
//!
//! Boss and player shots live in separate pools so each pool only ever
//! collides against its own valid target.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::consts::*;

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Boss,
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub active: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            radius: PROJECTILE_RADIUS,
            active: false,
        }
    }
}

impl Projectile {
    /// Activate at `from`, heading straight for `to` at `speed`
    pub fn launch(&mut self, from: Vec3, to: Vec3, speed: f32) {
        self.position = from;
        self.velocity = (to - from).normalize_or_zero() * speed;
        self.active = true;
    }

    /// Advance; deactivates once outside the arena volume
    pub fn update(&mut self, dt: f32, arena: &Arena) {
        if !self.active {
            return;
        }
        self.position += self.velocity * dt;
        if self.out_of_bounds(arena) {
            self.active = false;
        }
    }

    pub fn out_of_bounds(&self, arena: &Arena) -> bool {
        self.position.y < 0.0
            || self.position.y > PROJECTILE_CEILING
            || !arena.contains(self.position, 0.0)
    }

    /// Sphere-sphere contact with a target of radius `target_radius`
    pub fn hits(&self, target: Vec3, target_radius: f32) -> bool {
        let reach = self.radius + target_radius;
        self.active && self.position.distance_squared(target) <= reach * reach
    }

    #[inline]
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Pool of projectiles owned by one side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectilePool {
    pub owner: Owner,
    slots: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new(owner: Owner, capacity: usize) -> Self {
        Self {
            owner,
            slots: vec![Projectile::default(); capacity],
        }
    }

    /// Fire from the first free slot. Returns None when the pool is exhausted.
    pub fn launch(&mut self, from: Vec3, to: Vec3, speed: f32) -> Option<usize> {
        let index = self.slots.iter().position(|p| !p.active)?;
        self.slots[index].launch(from, to, speed);
        Some(index)
    }

    pub fn update(&mut self, dt: f32, arena: &Arena) {
        for projectile in &mut self.slots {
            projectile.update(dt, arena);
        }
    }

    /// Deactivate every projectile touching the target; returns how many hit
    pub fn collide(&mut self, target: Vec3, target_radius: f32) -> usize {
        let mut hits = 0;
        for projectile in self.slots.iter_mut().filter(|p| p.hits(target, target_radius)) {
            projectile.deactivate();
            hits += 1;
        }
        hits
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    pub fn clear(&mut self) {
        for projectile in &mut self.slots {
            projectile.deactivate();
        }
    }

    /// Active projectiles only
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().filter(|p| p.active)
    }
}
