//! Boss brain: timed state machine and smoothed facing
//!
//! The boss never moves. It idles, rolls one of three attacks, holds the
//! attack pose, and returns to idle. The game loop asks
//! [`Boss::pending_attack`] each frame and fires the effect once per
//! attack-state entry, regardless of frame rate.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::entity::{Damageable, Positioned, TimePool};
use crate::consts::*;
use crate::settings::Settings;
use crate::{ground, shortest_delta_degrees, wrap_degrees};

/// Boss animation/behaviour state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossState {
    Idle,
    Attack1,
    Attack2,
    Attack3,
    /// Terminal
    Death,
}

impl BossState {
    /// Seconds before the state expires (None for Death)
    pub fn duration(&self) -> Option<f32> {
        match self {
            BossState::Idle => Some(BOSS_IDLE_DURATION),
            BossState::Attack1 | BossState::Attack2 | BossState::Attack3 => {
                Some(BOSS_ATTACK_DURATION)
            }
            BossState::Death => None,
        }
    }

    /// Attack fired on entering this state
    pub fn attack(&self) -> Option<Attack> {
        match self {
            BossState::Attack1 => Some(Attack::Projectile),
            BossState::Attack2 => Some(Attack::Shockwave),
            BossState::Attack3 => Some(Attack::WideShockwave),
            BossState::Idle | BossState::Death => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BossState::Idle => "Idle",
            BossState::Attack1 => "Attack1",
            BossState::Attack2 => "Attack2",
            BossState::Attack3 => "Attack3",
            BossState::Death => "Death",
        }
    }
}

/// Attack effects the boss can dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attack {
    /// One projectile aimed at the player
    Projectile,
    /// Instant area hit within [`AOE_RANGE`]
    Shockwave,
    /// Instant area hit within [`LARGE_AOE_RANGE`]
    WideShockwave,
}

impl Attack {
    /// Area radius for shockwaves
    pub fn range(&self) -> Option<f32> {
        match self {
            Attack::Projectile => None,
            Attack::Shockwave => Some(AOE_RANGE),
            Attack::WideShockwave => Some(LARGE_AOE_RANGE),
        }
    }

    pub fn state(&self) -> BossState {
        match self {
            Attack::Projectile => BossState::Attack1,
            Attack::Shockwave => BossState::Attack2,
            Attack::WideShockwave => BossState::Attack3,
        }
    }
}

/// Source of the Idle → attack choice
pub trait AttackRoll: std::fmt::Debug {
    fn roll_attack(&mut self) -> Attack;
}

/// Uniform choice among the three attacks
impl AttackRoll for Pcg32 {
    fn roll_attack(&mut self) -> Attack {
        match self.random_range(0..3u8) {
            0 => Attack::Projectile,
            1 => Attack::Shockwave,
            _ => Attack::WideShockwave,
        }
    }
}

/// The boss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub position: Vec3,
    pub half_extents: Vec3,
    pub time: TimePool,
    state: BossState,
    /// Seconds since the last transition
    state_timer: f32,
    attack_triggered: bool,
    /// Facing around Y in degrees, [0, 360)
    pub rotation: f32,
    pub target_rotation: f32,
    /// Exponential turn rate (1/s); a frame of `dt` covers
    /// `1 - e^(-turn_rate * dt)` of the remaining arc
    pub turn_rate: f32,
}

impl Boss {
    pub fn new(settings: &Settings) -> Self {
        Self {
            position: BOSS_SPAWN,
            half_extents: BOSS_HALF_EXTENTS,
            time: TimePool::new(settings.boss_starting_time, settings.boss_starting_time),
            state: BossState::Idle,
            state_timer: 0.0,
            attack_triggered: false,
            // Facing -X, toward the player spawn
            rotation: 270.0,
            target_rotation: 270.0,
            turn_rate: BOSS_TURN_RATE,
        }
    }

    /// Back to starting values for a new session
    pub fn reset(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }

    #[inline]
    pub fn state(&self) -> BossState {
        self.state
    }

    #[inline]
    pub fn state_timer(&self) -> f32 {
        self.state_timer
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.half_extents)
    }

    /// Switch state; re-entering the current state is a no-op
    pub fn set_state(&mut self, next: BossState) {
        if next == self.state {
            return;
        }
        log::debug!("Boss {} -> {}", self.state.as_str(), next.as_str());
        self.state = next;
        self.state_timer = 0.0;
        self.attack_triggered = false;
    }

    /// True until [`Boss::mark_attack_triggered`] is called in this state
    #[inline]
    pub fn should_trigger_attack(&self) -> bool {
        !self.attack_triggered
    }

    #[inline]
    pub fn mark_attack_triggered(&mut self) {
        self.attack_triggered = true;
    }

    /// Attack owed for the current state entry, if not yet fired
    pub fn pending_attack(&self) -> Option<Attack> {
        if self.should_trigger_attack() {
            self.state.attack()
        } else {
            None
        }
    }

    /// Advance the state machine and turn toward the player
    pub fn update<R: AttackRoll + ?Sized>(&mut self, player_pos: Vec3, dt: f32, roll: &mut R) {
        if self.state == BossState::Death {
            return;
        }
        if !self.time.is_alive() {
            self.set_state(BossState::Death);
            return;
        }

        self.update_rotation(player_pos, dt);

        self.state_timer += dt;
        let Some(duration) = self.state.duration() else {
            return;
        };
        if self.state_timer < duration {
            return;
        }

        match self.state {
            BossState::Idle => {
                let attack = roll.roll_attack();
                self.set_state(attack.state());
            }
            BossState::Attack1 | BossState::Attack2 | BossState::Attack3 => {
                self.set_state(BossState::Idle);
            }
            BossState::Death => {}
        }
    }

    /// Ease the facing toward the player along the shortest arc
    fn update_rotation(&mut self, player_pos: Vec3, dt: f32) {
        let to_player = ground(player_pos) - ground(self.position);
        if to_player.length_squared() > f32::EPSILON {
            self.target_rotation = wrap_degrees(to_player.x.atan2(to_player.y).to_degrees());
        }

        let delta = shortest_delta_degrees(self.rotation, self.target_rotation);
        // Exponential ease: approaches the target but never lands on it in one frame
        let step = 1.0 - (-self.turn_rate * dt.max(0.0)).exp();
        self.rotation = wrap_degrees(self.rotation + delta * step);
    }
}

impl Positioned for Boss {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl Damageable for Boss {
    fn time_pool(&self) -> &TimePool {
        &self.time
    }

    fn time_pool_mut(&mut self) -> &mut TimePool {
        &mut self.time
    }

    fn take_damage(&mut self, amount: f32) -> bool {
        let killed = self.time.take_damage(amount);
        if killed {
            log::info!("Boss defeated");
            self.set_state(BossState::Death);
        }
        killed
    }
}
