//! Per-frame simulation tick
//!
//! Routes input to the current phase and, while playing, advances the
//! fight in a fixed order: drain, camera, player, boss, pushback, boss
//! attack, projectiles, pickups, terminal check.

use glam::{Vec2, Vec3};

use super::aabb::resolve_horizontal;
use super::boss::Attack;
use super::entity::{Damageable, distance_between};
use super::player::MoveControls;
use super::projectile::Owner;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::settings::Settings;
use crate::shortest_delta_degrees;

/// Input for a single frame.
///
/// Booleans other than the held movement keys are edge-triggered
/// ("pressed this frame").
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Held movement keys
    pub movement: MoveControls,
    pub dash: bool,
    pub melee: bool,
    pub shoot: bool,
    /// Raw pointer motion this frame
    pub pointer_delta: Vec2,
    /// Wheel notches this frame (positive zooms in)
    pub wheel: f32,
    pub toggle_camera: bool,
    pub pause: bool,
    /// Start / resume / restart
    pub confirm: bool,
    /// Back out to the menu
    pub cancel: bool,
    pub open_settings: bool,
    pub menu_up: bool,
    pub menu_down: bool,
    /// Settings value nudge: -1, 0 or +1
    pub adjust: i8,
    /// Adjust in steps of five
    pub fast_adjust: bool,
    pub reset_settings: bool,
    /// Demo mode - the autopilot plays the fight
    pub autopilot: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, settings: &mut Settings, input: &FrameInput, dt: f32) {
    state.events.clear();
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    let input = if input.autopilot && state.phase == GamePhase::Playing {
        // The bot steers and fights; screen and camera keys stay with the caller
        FrameInput {
            pause: input.pause,
            toggle_camera: input.toggle_camera,
            confirm: input.confirm,
            cancel: input.cancel,
            ..autopilot_input(state, settings)
        }
    } else {
        input.clone()
    };

    match state.phase {
        GamePhase::Menu => {
            if input.confirm {
                state.start_session(settings);
                state.transition_to(GamePhase::Playing);
            } else if input.open_settings {
                state.transition_to(GamePhase::Settings);
            }
        }
        GamePhase::Settings => tick_settings(state, settings, &input),
        GamePhase::Playing => {
            if input.pause {
                state.transition_to(GamePhase::Paused);
                return;
            }
            tick_playing(state, settings, &input, dt);
        }
        GamePhase::Paused => {
            if input.pause || input.confirm {
                state.transition_to(GamePhase::Playing);
            } else if input.cancel {
                state.transition_to(GamePhase::Menu);
            }
        }
        GamePhase::GameOver | GamePhase::Victory => {
            if input.confirm {
                state.start_session(settings);
                state.transition_to(GamePhase::Playing);
            } else if input.cancel {
                state.transition_to(GamePhase::Menu);
            }
        }
    }
}

/// Settings screen: move the cursor, nudge the highlighted value
fn tick_settings(state: &mut GameState, settings: &mut Settings, input: &FrameInput) {
    if input.menu_up {
        state.settings_cursor = state.settings_cursor.prev();
    }
    if input.menu_down {
        state.settings_cursor = state.settings_cursor.next();
    }
    if input.adjust != 0 {
        let field = state.settings_cursor;
        settings.adjust(field, input.adjust, input.fast_adjust);
        log::debug!("{} = {}", field.as_str(), settings.get(field));
    }
    if input.reset_settings {
        settings.reset_to_defaults();
        log::info!("Settings reset to defaults");
    }
    if input.cancel || input.confirm {
        state.transition_to(GamePhase::Menu);
    }
}

fn tick_playing(state: &mut GameState, settings: &Settings, input: &FrameInput, dt: f32) {
    // Time is health: both sides bleed a second per second
    state.player.take_damage(dt);
    state.boss.take_damage(dt);

    // Camera
    if input.toggle_camera {
        state.camera.toggle_mode();
    }
    state.camera.update(
        state.player.position,
        input.pointer_delta,
        input.wheel,
        settings,
        &state.arena,
    );
    let forward = state.camera.forward();
    let right = state.camera.right();

    // Player
    if state.player.is_alive() {
        if input.dash {
            let direction = input.movement.direction(forward, right);
            if let Some(penalty) = state.player.try_dash(direction) {
                state.events.push(GameEvent::DashStarted { penalty });
            }
        }
        state
            .player
            .update(&input.movement, forward, right, &state.arena, settings, dt);

        if input.melee
            && state.boss.is_alive()
            && state.player.melee_box().intersects(&state.boss.aabb())
        {
            state.boss.take_damage(settings.boss_damage_per_hit);
            log::debug!("Melee hit, boss at {:.1}s", state.boss.time_left());
            state.events.push(GameEvent::MeleeHit);
        }

        if input.shoot && state.boss.is_alive() && state.player.try_shoot() {
            let fired = state.player_projectiles.launch(
                state.player.position,
                state.boss.position,
                settings.projectile_speed,
            );
            if fired.is_some() {
                state.events.push(GameEvent::ProjectileFired {
                    owner: Owner::Player,
                });
            }
        }
    }

    // Boss
    state
        .boss
        .update(state.player.position, dt, state.attack_roll.as_mut());

    // Pushback: the boss is immovable
    if state.player.is_alive() && state.boss.is_alive() {
        let push = resolve_horizontal(&state.player.aabb(), &state.boss.aabb());
        if push.hit {
            state.player.apply_pushback(push.offset, &state.arena);
        }
    }

    // Boss attack, once per attack-state entry
    if let Some(attack) = state.boss.pending_attack() {
        state.boss.mark_attack_triggered();
        dispatch_boss_attack(state, settings, attack);
    }

    // Projectiles
    state.boss_projectiles.update(dt, &state.arena);
    if state.player.is_alive() {
        let hits = state
            .boss_projectiles
            .collide(state.player.position, state.player.approx_radius());
        for _ in 0..hits {
            state.player.take_damage(settings.player_damage_per_hit);
            log::debug!("Boss projectile hit, player at {:.1}s", state.player.time_left());
            state.events.push(GameEvent::ProjectileHit { owner: Owner::Boss });
        }
    }
    state.player_projectiles.update(dt, &state.arena);
    if state.boss.is_alive() {
        let hits = state
            .player_projectiles
            .collide(state.boss.position, state.boss.half_extents.x);
        for _ in 0..hits {
            state.boss.take_damage(settings.boss_damage_per_hit);
            log::debug!("Player projectile hit, boss at {:.1}s", state.boss.time_left());
            state.events.push(GameEvent::ProjectileHit {
                owner: Owner::Player,
            });
        }
    }

    // Pickups
    if let Some(position) =
        state
            .tomatoes
            .update(dt, settings.tomato_lifetime, &state.arena, &mut state.rng)
    {
        state.events.push(GameEvent::TomatoSpawned { position });
    }
    if state.player.is_alive() {
        let collected = state
            .tomatoes
            .collect(state.player.position, state.player.approx_radius());
        for _ in 0..collected {
            state.player.heal(settings.tomato_heal_amount, settings);
            log::debug!("Tomato collected, player at {:.1}s", state.player.time_left());
            state.events.push(GameEvent::TomatoCollected);
        }
    }

    state.time_ticks += 1;

    // Terminal check; a simultaneous double knockout counts as a win
    if !state.boss.is_alive() {
        log::info!("Victory after {} ticks", state.time_ticks);
        state.events.push(GameEvent::BossDefeated);
        state.transition_to(GamePhase::Victory);
    } else if !state.player.is_alive() {
        log::info!("Defeat after {} ticks", state.time_ticks);
        state.events.push(GameEvent::PlayerDefeated);
        state.transition_to(GamePhase::GameOver);
    }
}

fn dispatch_boss_attack(state: &mut GameState, settings: &Settings, attack: Attack) {
    log::debug!("Boss attack {attack:?}");
    state.events.push(GameEvent::BossAttack(attack));

    match attack {
        Attack::Projectile => {
            let fired = state.boss_projectiles.launch(
                state.boss.position,
                state.player.position,
                settings.projectile_speed,
            );
            if fired.is_some() {
                state.events.push(GameEvent::ProjectileFired { owner: Owner::Boss });
            }
        }
        Attack::Shockwave | Attack::WideShockwave => {
            let range = attack.range().unwrap_or(AOE_RANGE);
            let distance = distance_between(&state.boss, &state.player);
            let hit = distance <= range && state.player.is_alive();
            if hit {
                state.player.take_damage(settings.player_damage_per_hit);
                log::debug!("Shockwave hit at distance {distance:.1}");
            }
            state.events.push(GameEvent::Shockwave {
                attack,
                distance,
                hit,
            });
        }
    }
}

/// Ticks between autopilot melee swings
const AUTOPILOT_SWING_TICKS: u64 = 30;
/// Below this fill level the autopilot goes tomato hunting
const AUTOPILOT_HUNGRY: f32 = 0.3;

/// Input a simple bot would produce this frame
pub fn autopilot_input(state: &GameState, settings: &Settings) -> FrameInput {
    let mut input = FrameInput::default();
    if state.phase != GamePhase::Playing {
        return input;
    }

    let player = state.player.position;
    let boss = state.boss.position;

    // Head for the nearest tomato when low, otherwise for the boss
    let nearest_tomato = state
        .tomatoes
        .iter()
        .min_by(|a, b| {
            a.position
                .distance_squared(player)
                .partial_cmp(&b.position.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|t| t.position);
    let goal = match nearest_tomato {
        Some(tomato) if state.player.time_fraction() < AUTOPILOT_HUNGRY => tomato,
        _ => boss,
    };

    // Swing the camera behind the player, facing the goal
    let to_goal = Vec3::new(goal.x - player.x, 0.0, goal.z - player.z);
    if to_goal.length_squared() > 1.0 {
        let wanted_yaw = (-to_goal.x).atan2(-to_goal.z).to_degrees();
        let delta = shortest_delta_degrees(state.camera.yaw, wanted_yaw);
        if settings.mouse_sensitivity > 0.0 {
            input.pointer_delta.x = -delta / settings.mouse_sensitivity;
        }
    }

    let in_reach = state.player.melee_box().intersects(&state.boss.aabb());
    input.movement.forward = goal != boss || !in_reach;
    input.melee = in_reach && state.time_ticks % AUTOPILOT_SWING_TICKS == 0;
    input.shoot = true;
    input.dash = to_goal.length() > 250.0 && state.player.dash.stamina >= MAX_STAMINA;
    input
}
