//! Axis-aligned boxes and pushback resolution
//!
//! Player and boss are boxes; everything else (projectiles, tomatoes) uses
//! sphere distance tests. Resolution always pushes box `a` out of box `b`
//! along the axis of least penetration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` extending `half_extents` along each axis
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Same center, every face pushed out by `amount`
    pub fn grown(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(amount),
            max: self.max + Vec3::splat(amount),
        }
    }

    /// True iff all three axis intervals overlap (touching counts)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Separation axis picked by a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Result of resolving two boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pushback {
    /// Whether the boxes intersected
    pub hit: bool,
    /// Translation to apply to box `a`
    pub offset: Vec3,
    /// Axis the offset lies on (None on a miss)
    pub axis: Option<Axis>,
}

impl Pushback {
    pub fn miss() -> Self {
        Self {
            hit: false,
            offset: Vec3::ZERO,
            axis: None,
        }
    }

    fn along(axis: Axis, overlap: f32, a_center: f32, b_center: f32) -> Self {
        // Push a away from b's center
        let amount = if a_center < b_center { -overlap } else { overlap };
        let offset = match axis {
            Axis::X => Vec3::new(amount, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, amount, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, amount),
        };
        Self {
            hit: true,
            offset,
            axis: Some(axis),
        }
    }
}

/// Penetration depth of `a` into `b` on one axis
#[inline]
fn overlap_1d(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> f32 {
    if a_max < b_max { a_max - b_min } else { b_max - a_min }
}

/// Ground-locked resolution: separates on X or Z only, never Y.
///
/// Picks the axis with the smaller overlap. When the X and Z overlaps are
/// equal the Z axis wins.
pub fn resolve_horizontal(a: &Aabb, b: &Aabb) -> Pushback {
    if !a.intersects(b) {
        return Pushback::miss();
    }

    let ca = a.center();
    let cb = b.center();
    let overlap_x = overlap_1d(a.min.x, a.max.x, b.min.x, b.max.x);
    let overlap_z = overlap_1d(a.min.z, a.max.z, b.min.z, b.max.z);

    if overlap_x < overlap_z {
        Pushback::along(Axis::X, overlap_x, ca.x, cb.x)
    } else {
        Pushback::along(Axis::Z, overlap_z, ca.z, cb.z)
    }
}

/// Full 3D resolution considering all three axes.
///
/// Ties fall through X → Y → Z, so an all-equal overlap resolves on Z.
pub fn resolve_3d(a: &Aabb, b: &Aabb) -> Pushback {
    if !a.intersects(b) {
        return Pushback::miss();
    }

    let ca = a.center();
    let cb = b.center();
    let overlap_x = overlap_1d(a.min.x, a.max.x, b.min.x, b.max.x);
    let overlap_y = overlap_1d(a.min.y, a.max.y, b.min.y, b.max.y);
    let overlap_z = overlap_1d(a.min.z, a.max.z, b.min.z, b.max.z);

    if overlap_x < overlap_y && overlap_x < overlap_z {
        Pushback::along(Axis::X, overlap_x, ca.x, cb.x)
    } else if overlap_y < overlap_z {
        Pushback::along(Axis::Y, overlap_y, ca.y, cb.y)
    } else {
        Pushback::along(Axis::Z, overlap_z, ca.z, cb.z)
    }
}
