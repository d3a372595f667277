//! Healing pickups
//!
//! Every few seconds a coin flip may drop a tomato somewhere on the arena
//! floor. Tomatoes rot after a while; walking into one heals the player.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tomato {
    pub position: Vec3,
    pub radius: f32,
    /// Seconds until it rots
    pub lifetime: f32,
    pub active: bool,
}

impl Default for Tomato {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            radius: TOMATO_RADIUS,
            lifetime: 0.0,
            active: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomatoPool {
    slots: Vec<Tomato>,
    spawn_timer: f32,
}

impl Default for TomatoPool {
    fn default() -> Self {
        Self::new(MAX_TOMATOES)
    }
}

impl TomatoPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Tomato::default(); capacity],
            spawn_timer: 0.0,
        }
    }

    /// Age every tomato, then roll for a new one when the spawn timer fires.
    /// Returns the spawn position, if any.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        lifetime: f32,
        arena: &Arena,
        rng: &mut R,
    ) -> Option<Vec3> {
        for tomato in self.slots.iter_mut().filter(|t| t.active) {
            tomato.lifetime -= dt;
            if tomato.lifetime <= 0.0 {
                tomato.active = false;
            }
        }

        self.spawn_timer += dt;
        if self.spawn_timer < TOMATO_SPAWN_INTERVAL {
            return None;
        }
        self.spawn_timer = 0.0;
        if !rng.random_bool(0.5) {
            return None;
        }
        let spot = arena.random_point(rng, TOMATO_SPAWN_MARGIN);
        let position = Vec3::new(spot.x, arena.floor_y + TOMATO_RADIUS, spot.y);
        self.spawn(position, lifetime)
    }

    /// Place a tomato in the first free slot; None when the pool is full
    pub fn spawn(&mut self, position: Vec3, lifetime: f32) -> Option<Vec3> {
        let slot = self.slots.iter_mut().find(|t| !t.active)?;
        *slot = Tomato {
            position,
            radius: TOMATO_RADIUS,
            lifetime,
            active: true,
        };
        log::debug!("Tomato spawned at ({:.0}, {:.0})", position.x, position.z);
        Some(position)
    }

    /// Consume every tomato within reach of the player; returns how many
    pub fn collect(&mut self, player_pos: Vec3, player_radius: f32) -> usize {
        let mut collected = 0;
        for tomato in self.slots.iter_mut().filter(|t| t.active) {
            let reach = tomato.radius + player_radius;
            if tomato.position.distance_squared(player_pos) <= reach * reach {
                tomato.active = false;
                collected += 1;
            }
        }
        collected
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|t| t.active).count()
    }

    pub fn clear(&mut self) {
        for tomato in &mut self.slots {
            tomato.active = false;
        }
        self.spawn_timer = 0.0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tomato> {
        self.slots.iter().filter(|t| t.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_tomato_rots() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(1);
        // Single slot, so the spawn roll can never add a second tomato
        let mut pool = TomatoPool::new(1);
        pool.spawn(Vec3::new(0.0, 17.0, 0.0), 8.0);
        pool.update(7.9, 8.0, &arena, &mut rng);
        assert_eq!(pool.active_count(), 1);
        pool.update(0.2, 8.0, &arena, &mut rng);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_spawn_rolls_on_interval() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut pool = TomatoPool::default();
        let mut spawned = 0;
        // 100 intervals; a fair coin lands heads at least once in practice
        for _ in 0..100 {
            assert!(pool.update(1.0, 2.0, &arena, &mut rng).is_none());
            assert!(pool.update(1.0, 2.0, &arena, &mut rng).is_none());
            if let Some(pos) = pool.update(1.0, 2.0, &arena, &mut rng) {
                spawned += 1;
                assert!(arena.contains(pos, TOMATO_SPAWN_MARGIN - 1e-3));
                assert_eq!(pos.y, ARENA_FLOOR_Y + TOMATO_RADIUS);
            }
        }
        assert!(spawned > 0);
        assert!(pool.active_count() <= MAX_TOMATOES);
    }

    #[test]
    fn test_pool_caps_at_capacity() {
        let mut pool = TomatoPool::new(2);
        assert!(pool.spawn(Vec3::ZERO, 8.0).is_some());
        assert!(pool.spawn(Vec3::X, 8.0).is_some());
        assert!(pool.spawn(Vec3::Z, 8.0).is_none());
    }

    #[test]
    fn test_collect_within_reach() {
        let mut pool = TomatoPool::default();
        pool.spawn(Vec3::new(10.0, 17.0, 0.0), 8.0);
        pool.spawn(Vec3::new(200.0, 17.0, 0.0), 8.0);
        assert_eq!(pool.collect(Vec3::new(0.0, 15.0, 0.0), 6.67), 1);
        assert_eq!(pool.active_count(), 1);
    }
}
