//! Player movement, dash and containment
//!
//! Movement is camera-relative and ground-locked; vertical motion is plain
//! gravity against the arena floor.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::arena::Arena;
use super::entity::{Damageable, Positioned, TimePool};
use crate::consts::*;
use crate::settings::Settings;

/// Directional keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveControls {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

impl MoveControls {
    /// Unit ground-plane direction from the camera basis, or zero with no keys held.
    ///
    /// The basis is flattened and renormalized first so a steep camera pitch
    /// never slows the player down.
    pub fn direction(&self, forward: Vec3, right: Vec3) -> Vec3 {
        let forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
        let right = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();

        let mut dir = Vec3::ZERO;
        if self.forward {
            dir += forward;
        }
        if self.back {
            dir -= forward;
        }
        if self.right {
            dir += right;
        }
        if self.left {
            dir -= right;
        }
        dir.normalize_or_zero()
    }
}

/// Dash burst state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    pub active: bool,
    /// Seconds left in the current burst
    pub remaining: f32,
    /// Seconds until the next dash is allowed
    pub cooldown: f32,
    /// 0..=MAX_STAMINA
    pub stamina: f32,
    pub direction: Vec3,
}

impl Default for Dash {
    fn default() -> Self {
        Self {
            active: false,
            remaining: 0.0,
            cooldown: 0.0,
            stamina: MAX_STAMINA,
            direction: Vec3::X,
        }
    }
}

impl Dash {
    pub fn ready(&self) -> bool {
        !self.active && self.cooldown <= 0.0
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub half_extents: Vec3,
    pub time: TimePool,
    /// Current walk speed (copied from settings each frame)
    pub speed: f32,
    pub vertical_velocity: f32,
    /// Last non-zero movement direction, used for dashes without input
    pub facing: Vec3,
    pub dash: Dash,
    /// Seconds until the next shot
    pub shot_cooldown: f32,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        let max = settings.player_max_time;
        Self {
            position: PLAYER_SPAWN,
            half_extents: PLAYER_HALF_EXTENTS,
            time: TimePool::new(settings.player_starting_time.min(max), max),
            speed: settings.player_speed,
            vertical_velocity: 0.0,
            facing: Vec3::X,
            dash: Dash::default(),
            shot_cooldown: 0.0,
        }
    }

    pub fn reset(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.half_extents)
    }

    /// Sphere radius used against projectiles
    pub fn approx_radius(&self) -> f32 {
        (self.half_extents.x + self.half_extents.z) * 0.5
    }

    /// Horizontal margin keeping the whole box inside the arena
    fn arena_margin(&self) -> f32 {
        self.half_extents.x.max(self.half_extents.z)
    }

    pub fn heal(&mut self, amount: f32, settings: &Settings) {
        self.time.heal(amount, settings.player_max_time);
    }

    /// Start a dash along `direction` (or the facing when zero).
    ///
    /// Always succeeds once the cooldown is over. Missing stamina is paid
    /// for in time instead; the returned value is that time penalty.
    pub fn try_dash(&mut self, direction: Vec3) -> Option<f32> {
        if !self.dash.ready() || !self.time.is_alive() {
            return None;
        }

        let direction = Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero();
        let direction = if direction == Vec3::ZERO { self.facing } else { direction };

        let shortfall = (DASH_STAMINA_COST - self.dash.stamina).max(0.0);
        let penalty = shortfall * DASH_TIME_PER_STAMINA;
        self.dash.stamina = (self.dash.stamina - DASH_STAMINA_COST).max(0.0);
        self.dash.active = true;
        self.dash.remaining = DASH_DURATION;
        self.dash.direction = direction;
        self.time.take_damage(penalty);

        log::debug!("Dash started, time penalty {penalty:.2}");
        Some(penalty)
    }

    /// Move for one frame. A dash in progress replaces walking.
    pub fn update(
        &mut self,
        controls: &MoveControls,
        cam_forward: Vec3,
        cam_right: Vec3,
        arena: &Arena,
        settings: &Settings,
        dt: f32,
    ) {
        self.speed = settings.player_speed;
        self.time.set_full(settings.player_max_time);
        self.time.cap(settings.player_max_time);
        self.shot_cooldown = (self.shot_cooldown - dt).max(0.0);

        let direction = controls.direction(cam_forward, cam_right);
        if direction != Vec3::ZERO {
            self.facing = direction;
        }

        if self.dash.active {
            let step = dt.min(self.dash.remaining);
            self.position += self.dash.direction * (self.speed + DASH_EXTRA_SPEED) * step;
            self.dash.remaining -= dt;
            if self.dash.remaining <= 0.0 {
                self.dash.active = false;
                self.dash.remaining = 0.0;
                self.dash.cooldown = DASH_COOLDOWN;
            }
        } else {
            let speed = if controls.sprint {
                self.speed * SPRINT_MULTIPLIER
            } else {
                self.speed
            };
            self.position += direction * speed * dt;
            self.dash.cooldown = (self.dash.cooldown - dt).max(0.0);
            self.dash.stamina = (self.dash.stamina + STAMINA_REGEN * dt).min(MAX_STAMINA);
        }

        self.position = arena.clamp(self.position, self.arena_margin());

        self.vertical_velocity -= GRAVITY * dt;
        self.position.y += self.vertical_velocity * dt;
        let floor = arena.floor_y + self.half_extents.y;
        if self.position.y <= floor {
            self.position.y = floor;
            self.vertical_velocity = 0.0;
        }
    }

    /// Apply a collision pushback, then put the player back inside the arena
    pub fn apply_pushback(&mut self, offset: Vec3, arena: &Arena) {
        self.position = arena.clamp(self.position + offset, self.arena_margin());
    }

    /// Start the shot cooldown if a shot is allowed now
    pub fn try_shoot(&mut self) -> bool {
        if self.shot_cooldown > 0.0 || !self.time.is_alive() {
            return false;
        }
        self.shot_cooldown = PLAYER_SHOT_COOLDOWN;
        true
    }

    /// Melee reach box
    pub fn melee_box(&self) -> Aabb {
        self.aabb().grown(MELEE_REACH)
    }
}

impl Positioned for Player {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl Damageable for Player {
    fn time_pool(&self) -> &TimePool {
        &self.time
    }

    fn time_pool_mut(&mut self) -> &mut TimePool {
        &mut self.time
    }
}
