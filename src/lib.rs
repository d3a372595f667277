//! Time Master - A 3D arena boss fight where time is health
//!
//! Core modules:
//! - `sim`: Deterministic simulation (boss brain, collisions, camera, game loop)
//! - `settings`: Live-tunable gameplay configuration
//!
//! Rendering, audio, menus and asset loading are collaborators outside this
//! crate; they only read simulation state and feed [`sim::FrameInput`].

pub mod settings;
pub mod sim;

pub use settings::{SettingField, Settings};

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    use glam::{Vec2, Vec3};

    /// Fixed simulation timestep used by the native runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta the loop will integrate in one go. Time past the
    /// cap in a stalled frame is dropped, so clocks fall behind wall time
    /// during hitches instead of skipping whole boss states.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena: circle on the XZ plane, center offset from the world origin
    pub const ARENA_RADIUS: f32 = 380.0;
    pub const ARENA_CENTER: Vec2 = Vec2::new(0.0, 25.0);
    /// Height of the arena floor surface
    pub const ARENA_FLOOR_Y: f32 = 5.0;

    /// Player defaults
    pub const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(20.0 / 3.0, 10.0, 20.0 / 3.0);
    pub const PLAYER_SPAWN: Vec3 = Vec3::new(-200.0, ARENA_FLOOR_Y + 10.0, 0.0);
    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 500.0;
    pub const SPRINT_MULTIPLIER: f32 = 1.8;
    /// Extra reach added around the player box for melee hits
    pub const MELEE_REACH: f32 = 10.0;
    /// Seconds between player shots
    pub const PLAYER_SHOT_COOLDOWN: f32 = 1.0;

    /// Dash tuning
    pub const DASH_DURATION: f32 = 0.2;
    pub const DASH_EXTRA_SPEED: f32 = 450.0;
    pub const DASH_COOLDOWN: f32 = 1.0;
    pub const MAX_STAMINA: f32 = 100.0;
    /// A dash always costs a full bar
    pub const DASH_STAMINA_COST: f32 = MAX_STAMINA;
    pub const STAMINA_REGEN: f32 = 25.0;
    /// Time-value lost per missing stamina point when dashing early
    pub const DASH_TIME_PER_STAMINA: f32 = 0.05;

    /// Boss defaults
    pub const BOSS_HALF_EXTENTS: Vec3 = Vec3::new(30.0, 40.0, 30.0);
    pub const BOSS_SPAWN: Vec3 = Vec3::new(200.0, ARENA_FLOOR_Y + 40.0, 0.0);
    /// Fraction of the remaining turn covered per second
    pub const BOSS_TURN_RATE: f32 = 5.0;
    pub const BOSS_IDLE_DURATION: f32 = 5.0;
    pub const BOSS_ATTACK_DURATION: f32 = 1.5;
    pub const AOE_RANGE: f32 = 150.0;
    pub const LARGE_AOE_RANGE: f32 = 200.0;

    /// Projectiles
    pub const MAX_BOSS_PROJECTILES: usize = 10;
    pub const MAX_PLAYER_PROJECTILES: usize = 10;
    pub const PROJECTILE_RADIUS: f32 = 8.0;
    pub const PROJECTILE_CEILING: f32 = 200.0;

    /// Tomatoes
    pub const MAX_TOMATOES: usize = 5;
    pub const TOMATO_RADIUS: f32 = 12.0;
    pub const TOMATO_SPAWN_INTERVAL: f32 = 3.0;
    pub const TOMATO_SPAWN_MARGIN: f32 = 50.0;

    /// Orbit camera
    pub const CAMERA_DISTANCE: f32 = 200.0;
    pub const CAMERA_MIN_DISTANCE: f32 = 80.0;
    pub const CAMERA_MAX_DISTANCE: f32 = 450.0;
    pub const CAMERA_ZOOM_STEP: f32 = 20.0;
    pub const CAMERA_YAW: f32 = 270.0;
    pub const CAMERA_PITCH: f32 = 25.0;
    pub const CAMERA_MIN_PITCH: f32 = 10.0;
    pub const CAMERA_MAX_PITCH: f32 = 85.0;
    pub const CAMERA_LOOK_OFFSET: f32 = 20.0;
    /// Fixed overview camera
    pub const OVERVIEW_POSITION: Vec3 = Vec3::new(-400.0, 300.0, 400.0);
    pub const OVERVIEW_TARGET: Vec3 = Vec3::new(0.0, 50.0, 0.0);
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest signed turn from `from` to `to`, in degrees within [-180, 180]
#[inline]
pub fn shortest_delta_degrees(from: f32, to: f32) -> f32 {
    let mut delta = (to - from) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    delta
}

/// Project a world position onto the XZ ground plane
#[inline]
pub fn ground(pos: Vec3) -> Vec2 {
    Vec2::new(pos.x, pos.z)
}

/// Format a time-value as `m:ss` for the HUD
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{}:{:02}", total / 60, total % 60)
}
