//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timers accumulate the frame delta they are given, never wall-clock time
//! - Seeded RNG only (pickups and the boss attack roll)
//! - Settings are passed in, never global
//! - No rendering, windowing or audio dependencies

pub mod aabb;
pub mod arena;
pub mod boss;
pub mod camera;
pub mod entity;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod tomato;
pub mod view;

pub use aabb::{Aabb, Axis, Pushback, resolve_3d, resolve_horizontal};
pub use arena::Arena;
pub use boss::{Attack, AttackRoll, Boss, BossState};
pub use camera::{CameraMode, CameraRig};
pub use entity::{Assets, Damageable, ModelHandle, Positioned, TimePool};
pub use player::{Dash, MoveControls, Player};
pub use projectile::{Owner, Projectile, ProjectilePool};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{FrameInput, autopilot_input, tick};
pub use tomato::{Tomato, TomatoPool};
pub use view::{Drawable, Hud, Shape, draw_list};
