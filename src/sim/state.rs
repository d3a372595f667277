//! Game state and top-level phase machine
//!
//! Everything a session needs to advance lives in [`GameState`]. Settings
//! are not stored here; the loop owns them and lends them to each tick.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::boss::{Attack, AttackRoll, Boss};
use super::camera::CameraRig;
use super::player::Player;
use super::projectile::{Owner, ProjectilePool};
use super::tomato::TomatoPool;
use crate::consts::*;
use crate::settings::{SettingField, Settings};

/// PCG stream for the boss attack roll, kept apart from pickup spawning
const BOSS_RNG_STREAM: u64 = 0x5bd1_e995;

/// Top-level screen/phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen
    Menu,
    /// Settings screen (reached from the menu only)
    Settings,
    /// Active fight
    Playing,
    /// Simulation frozen
    Paused,
    /// Player ran out of time
    GameOver,
    /// Boss ran out of time
    Victory,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "Menu",
            GamePhase::Settings => "Settings",
            GamePhase::Playing => "Playing",
            GamePhase::Paused => "Paused",
            GamePhase::GameOver => "GameOver",
            GamePhase::Victory => "Victory",
        }
    }

    /// Pointer capture follows the phase: locked while fighting, free elsewhere
    pub fn captures_pointer(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

/// Things that happened during a tick, for particles/audio/HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    SessionStarted,
    /// Boss fired the effect of a freshly entered attack state
    BossAttack(Attack),
    /// Area check of a shockwave, whether or not it connected
    Shockwave { attack: Attack, distance: f32, hit: bool },
    ProjectileFired { owner: Owner },
    /// A projectile reached its target
    ProjectileHit { owner: Owner },
    MeleeHit,
    DashStarted { penalty: f32 },
    TomatoSpawned { position: Vec3 },
    TomatoCollected,
    BossDefeated,
    PlayerDefeated,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Pickup spawning
    pub rng: Pcg32,
    /// Idle → attack choice; swap in a scripted roll for tests
    pub attack_roll: Box<dyn AttackRoll>,
    pub phase: GamePhase,
    /// Mirrors the phase; the window layer locks the cursor when set
    pub pointer_captured: bool,
    /// Highlighted row on the settings screen
    pub settings_cursor: SettingField,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub arena: Arena,
    pub player: Player,
    pub boss: Boss,
    pub camera: CameraRig,
    pub boss_projectiles: ProjectilePool,
    pub player_projectiles: ProjectilePool,
    pub tomatoes: TomatoPool,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state on the menu screen
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            attack_roll: Box::new(Pcg32::new(seed, BOSS_RNG_STREAM)),
            phase: GamePhase::Menu,
            pointer_captured: false,
            settings_cursor: SettingField::MouseSensitivity,
            time_ticks: 0,
            arena: Arena::default(),
            player: Player::new(settings),
            boss: Boss::new(settings),
            camera: CameraRig::default(),
            boss_projectiles: ProjectilePool::new(Owner::Boss, MAX_BOSS_PROJECTILES),
            player_projectiles: ProjectilePool::new(Owner::Player, MAX_PLAYER_PROJECTILES),
            tomatoes: TomatoPool::default(),
            events: Vec::new(),
        }
    }

    /// Replace the boss attack roll
    pub fn with_attack_roll(mut self, roll: Box<dyn AttackRoll>) -> Self {
        self.attack_roll = roll;
        self
    }

    /// Switch phase. The only side effect is pointer capture.
    pub fn transition_to(&mut self, next: GamePhase) {
        if next == self.phase {
            return;
        }
        log::info!("Phase {} -> {}", self.phase.as_str(), next.as_str());
        self.events.push(GameEvent::PhaseChanged {
            from: self.phase,
            to: next,
        });
        self.phase = next;
        self.pointer_captured = next.captures_pointer();
    }

    /// Reset every combatant and pool from the current settings
    pub fn start_session(&mut self, settings: &Settings) {
        self.player.reset(settings);
        self.boss.reset(settings);
        self.camera.reset();
        self.boss_projectiles.clear();
        self.player_projectiles.clear();
        self.tomatoes.clear();
        log::info!(
            "Session started: player {:.0}s, boss {:.0}s",
            settings.player_starting_time,
            settings.boss_starting_time
        );
        self.events.push(GameEvent::SessionStarted);
    }

    /// Whether the fight is over either way
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::Victory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Damageable;

    #[test]
    fn test_new_state_on_menu() {
        let state = GameState::new(1, &Settings::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(!state.pointer_captured);
        assert_eq!(state.player.time_left(), 60.0);
        assert_eq!(state.boss.time_left(), 300.0);
    }

    #[test]
    fn test_pointer_captured_only_while_playing() {
        let mut state = GameState::new(1, &Settings::default());
        for phase in [
            GamePhase::Settings,
            GamePhase::Menu,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::Playing,
            GamePhase::GameOver,
            GamePhase::Victory,
        ] {
            state.transition_to(phase);
            assert_eq!(state.pointer_captured, phase == GamePhase::Playing);
        }
    }

    #[test]
    fn test_only_outcomes_are_finished() {
        let mut state = GameState::new(1, &Settings::default());
        for phase in [GamePhase::Menu, GamePhase::Settings, GamePhase::Playing, GamePhase::Paused] {
            state.transition_to(phase);
            assert!(!state.is_finished());
        }
        for phase in [GamePhase::GameOver, GamePhase::Victory] {
            state.transition_to(phase);
            assert!(state.is_finished());
        }
    }

    #[test]
    fn test_same_phase_is_noop() {
        let mut state = GameState::new(1, &Settings::default());
        state.transition_to(GamePhase::Menu);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_session_uses_current_settings() {
        let mut settings = Settings::default();
        let mut state = GameState::new(1, &settings);
        state.player.take_damage(20.0);
        state.boss_projectiles.launch(BOSS_SPAWN, PLAYER_SPAWN, 200.0);

        settings.boss_starting_time = 500.0;
        state.start_session(&settings);
        assert_eq!(state.player.time_left(), 60.0);
        assert_eq!(state.boss.time_left(), 500.0);
        assert_eq!(state.boss_projectiles.active_count(), 0);
        assert_eq!(state.events, vec![GameEvent::SessionStarted]);
    }
}
