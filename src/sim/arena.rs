//! Circular arena boundary
//!
//! One model serves every containment check: player movement, pushback
//! re-clamping, camera clamping, projectile bounds and pickup spawning.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::ground;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Center on the XZ plane
    pub center: Vec2,
    pub radius: f32,
    /// Height of the floor surface
    pub floor_y: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            center: ARENA_CENTER,
            radius: ARENA_RADIUS,
            floor_y: ARENA_FLOOR_Y,
        }
    }
}

impl Arena {
    /// Horizontal distance from the arena center
    #[inline]
    pub fn distance_from_center(&self, pos: Vec3) -> f32 {
        (ground(pos) - self.center).length()
    }

    /// Whether `pos` lies within the circle shrunk by `margin`
    pub fn contains(&self, pos: Vec3, margin: f32) -> bool {
        self.distance_from_center(pos) <= (self.radius - margin).max(0.0)
    }

    /// Pull `pos` back inside the circle shrunk by `margin`. Y is untouched.
    pub fn clamp(&self, pos: Vec3, margin: f32) -> Vec3 {
        let limit = (self.radius - margin).max(0.0);
        let offset = ground(pos) - self.center;
        if offset.length() <= limit {
            return pos;
        }
        let inside = self.center + offset.normalize_or_zero() * limit;
        Vec3::new(inside.x, pos.y, inside.y)
    }

    /// Uniform random point on the floor disc shrunk by `margin`
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R, margin: f32) -> Vec2 {
        let limit = (self.radius - margin).max(0.0);
        let theta = rng.random_range(0.0..std::f32::consts::TAU);
        // sqrt keeps the density uniform over the area
        let r = limit * rng.random::<f32>().sqrt();
        self.center + Vec2::new(theta.cos(), theta.sin()) * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamp_inside_is_noop() {
        let arena = Arena::default();
        let pos = Vec3::new(10.0, 15.0, 30.0);
        assert_eq!(arena.clamp(pos, 5.0), pos);
    }

    #[test]
    fn test_clamp_pulls_back_to_rim() {
        let arena = Arena::default();
        let pos = Vec3::new(1000.0, 42.0, ARENA_CENTER.y);
        let clamped = arena.clamp(pos, 10.0);
        assert!((arena.distance_from_center(clamped) - (ARENA_RADIUS - 10.0)).abs() < 1e-3);
        assert_eq!(clamped.y, 42.0);
        assert!(clamped.x > 0.0);
    }

    #[test]
    fn test_clamp_respects_center_offset() {
        let arena = Arena::default();
        // Straight "down" in Z from the offset center
        let clamped = arena.clamp(Vec3::new(0.0, 0.0, -1000.0), 0.0);
        assert!((clamped.z - (ARENA_CENTER.y - ARENA_RADIUS)).abs() < 1e-3);
    }

    #[test]
    fn test_random_points_stay_inside() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = arena.random_point(&mut rng, TOMATO_SPAWN_MARGIN);
            assert!((p - arena.center).length() <= ARENA_RADIUS - TOMATO_SPAWN_MARGIN + 1e-3);
        }
    }
}
