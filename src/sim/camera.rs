//! Third-person orbit camera
//!
//! The orbit is a spherical offset around the player: yaw spins around Y,
//! pitch lifts the camera, distance zooms. In overview mode the camera
//! sits at a fixed vantage point instead.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::consts::*;
use crate::settings::Settings;
use crate::wrap_degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Follows the player, steered by the pointer
    #[default]
    Orbit,
    /// Fixed high-angle view of the whole arena
    Overview,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub distance: f32,
    /// Degrees around the player, [0, 360)
    pub yaw: f32,
    /// Degrees above the horizon, clamped to [CAMERA_MIN_PITCH, CAMERA_MAX_PITCH]
    pub pitch: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        let mut rig = Self {
            mode: CameraMode::Orbit,
            distance: CAMERA_DISTANCE,
            yaw: CAMERA_YAW,
            pitch: CAMERA_PITCH,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
        };
        rig.place(PLAYER_SPAWN, None);
        rig
    }
}

/// Offset from the orbit center for the given distance/yaw/pitch (degrees)
pub fn orbit_offset(distance: f32, yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    let horizontal = distance * pitch.cos();
    Vec3::new(
        horizontal * yaw.sin(),
        distance * pitch.sin(),
        horizontal * yaw.cos(),
    )
}

impl CameraRig {
    /// Orbit defaults around the player spawn
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Switch orbit/overview; either way the orbit state starts fresh
    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            CameraMode::Orbit => CameraMode::Overview,
            CameraMode::Overview => CameraMode::Orbit,
        };
        let player = self.target - Vec3::Y * CAMERA_LOOK_OFFSET;
        self.reset();
        self.mode = next;
        match next {
            CameraMode::Orbit => self.place(player, None),
            CameraMode::Overview => {
                self.position = OVERVIEW_POSITION;
                self.target = OVERVIEW_TARGET;
            }
        }
        log::debug!("Camera mode {:?}", self.mode);
    }

    /// Apply this frame's pointer and wheel input, then re-aim at the player
    pub fn update(
        &mut self,
        player_pos: Vec3,
        pointer_delta: Vec2,
        wheel: f32,
        settings: &Settings,
        arena: &Arena,
    ) {
        if self.mode == CameraMode::Overview {
            self.position = OVERVIEW_POSITION;
            self.target = OVERVIEW_TARGET;
            return;
        }

        let sensitivity = settings.mouse_sensitivity;
        self.yaw = wrap_degrees(self.yaw - pointer_delta.x * sensitivity);
        self.pitch = (self.pitch + pointer_delta.y * sensitivity)
            .clamp(CAMERA_MIN_PITCH, CAMERA_MAX_PITCH);
        self.distance = (self.distance - wheel * CAMERA_ZOOM_STEP)
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);

        self.place(player_pos, Some(arena));
    }

    /// Position on the orbit, optionally kept inside the arena circle
    fn place(&mut self, player_pos: Vec3, arena: Option<&Arena>) {
        self.target = player_pos + Vec3::Y * CAMERA_LOOK_OFFSET;
        let position = player_pos + orbit_offset(self.distance, self.yaw, self.pitch);
        self.position = match arena {
            Some(arena) => arena.clamp(position, 0.0),
            None => position,
        };
    }

    /// Ground-plane forward of the view, unit length
    pub fn forward(&self) -> Vec3 {
        let look = self.target - self.position;
        let flat = Vec3::new(look.x, 0.0, look.z);
        if flat.length_squared() > 1e-6 {
            return flat.normalize();
        }
        // Looking straight down: fall back to the orbit heading
        let yaw = self.yaw.to_radians();
        Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
    }

    /// Ground-plane right of the view, unit length
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or_zero()
    }
}
