//! Draw-side view of the simulation
//!
//! Turns state into a flat list of things to draw. A renderer walks the
//! list; nothing here touches a graphics API. Kinds with a missing model
//! come out as primitive shapes.

use glam::Vec3;

use super::boss::BossState;
use super::entity::{Assets, Damageable, ModelHandle};
use super::projectile::Owner;
use super::state::GameState;
use crate::format_clock;

/// Geometry for one drawable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Model(ModelHandle),
    Cube { half_extents: Vec3 },
    Sphere { radius: f32 },
    /// Flat disc (arena floor)
    Disc { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub position: Vec3,
    /// Facing around Y, degrees
    pub rotation: f32,
    pub shape: Shape,
    pub color: [f32; 4],
}

/// Boss tint: grey when idle, warmer the bigger the attack
fn boss_color(state: BossState) -> [f32; 4] {
    match state {
        BossState::Idle => [0.55, 0.55, 0.6, 1.0],
        BossState::Attack1 => [0.9, 0.6, 0.2, 1.0],
        BossState::Attack2 => [0.95, 0.35, 0.15, 1.0],
        BossState::Attack3 => [1.0, 0.1, 0.1, 1.0],
        BossState::Death => [0.2, 0.2, 0.2, 0.6],
    }
}

/// Time bar color: green when full, through yellow, to red when empty
pub fn time_color(fraction: f32) -> [f32; 4] {
    let t = fraction.clamp(0.0, 1.0);
    if t > 0.5 {
        let u = (t - 0.5) / 0.5;
        [1.0 - u, 0.85, 0.2, 1.0]
    } else {
        let u = t / 0.5;
        [1.0, 0.85 * u, 0.2, 1.0]
    }
}

/// Model when loaded, otherwise the fallback primitive
fn pick(model: ModelHandle, fallback: Shape) -> Shape {
    if model.uses_fallback_shape() {
        fallback
    } else {
        Shape::Model(model)
    }
}

/// Everything to draw this frame, back to front
pub fn draw_list(state: &GameState, assets: &Assets) -> Vec<Drawable> {
    let mut list = Vec::with_capacity(
        3 + state.boss_projectiles.active_count()
            + state.player_projectiles.active_count()
            + state.tomatoes.active_count(),
    );

    let arena = &state.arena;
    list.push(Drawable {
        position: Vec3::new(arena.center.x, arena.floor_y, arena.center.y),
        rotation: 0.0,
        shape: pick(assets.arena, Shape::Disc {
            radius: arena.radius,
        }),
        color: [0.3, 0.35, 0.3, 1.0],
    });

    for tomato in state.tomatoes.iter() {
        list.push(Drawable {
            position: tomato.position,
            rotation: 0.0,
            shape: pick(assets.tomato, Shape::Sphere {
                radius: tomato.radius,
            }),
            color: [0.9, 0.15, 0.1, 1.0],
        });
    }

    let boss = &state.boss;
    list.push(Drawable {
        position: boss.position,
        rotation: boss.rotation,
        shape: pick(assets.boss, Shape::Cube {
            half_extents: boss.half_extents,
        }),
        color: boss_color(boss.state()),
    });

    let player = &state.player;
    let facing = player.facing.x.atan2(player.facing.z).to_degrees();
    list.push(Drawable {
        position: player.position,
        rotation: crate::wrap_degrees(facing),
        shape: pick(assets.player, Shape::Cube {
            half_extents: player.half_extents,
        }),
        color: if player.dash.active {
            [0.6, 0.9, 1.0, 1.0]
        } else {
            [0.2, 0.5, 0.95, 1.0]
        },
    });

    for pool in [&state.boss_projectiles, &state.player_projectiles] {
        let color = match pool.owner {
            Owner::Boss => [1.0, 0.4, 0.1, 1.0],
            Owner::Player => [0.3, 0.9, 1.0, 1.0],
        };
        for projectile in pool.iter() {
            list.push(Drawable {
                position: projectile.position,
                rotation: 0.0,
                shape: Shape::Sphere {
                    radius: projectile.radius,
                },
                color,
            });
        }
    }

    list
}

/// Text and bar values for the HUD
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub player_clock: String,
    pub boss_clock: String,
    pub player_fraction: f32,
    pub boss_fraction: f32,
    pub stamina_fraction: f32,
    /// Bar tints, green when full and red when nearly out
    pub player_color: [f32; 4],
    pub boss_color: [f32; 4],
    pub boss_state: &'static str,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player_clock: format_clock(state.player.time_left()),
            boss_clock: format_clock(state.boss.time_left()),
            player_fraction: state.player.time_fraction(),
            boss_fraction: state.boss.time_fraction(),
            stamina_fraction: state.player.dash.stamina / crate::consts::MAX_STAMINA,
            player_color: time_color(state.player.time_fraction()),
            boss_color: time_color(state.boss.time_fraction()),
            boss_state: state.boss.state().as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_missing_models_fall_back_to_primitives() {
        let state = GameState::new(1, &Settings::default());
        let list = draw_list(&state, &Assets::default());
        assert_eq!(list.len(), 3);
        assert!(matches!(list[0].shape, Shape::Disc { .. }));
        assert!(list.iter().all(|d| !matches!(d.shape, Shape::Model(_))));
    }

    #[test]
    fn test_loaded_boss_model_is_used() {
        let state = GameState::new(1, &Settings::default());
        let assets = Assets {
            boss: ModelHandle::Loaded(7),
            ..Default::default()
        };
        let list = draw_list(&state, &assets);
        assert_eq!(list[1].shape, Shape::Model(ModelHandle::Loaded(7)));
        assert!(matches!(list[2].shape, Shape::Cube { .. }));
    }

    #[test]
    fn test_projectiles_are_listed() {
        let mut state = GameState::new(1, &Settings::default());
        state
            .boss_projectiles
            .launch(state.boss.position, state.player.position, 200.0);
        let list = draw_list(&state, &Assets::default());
        assert_eq!(list.len(), 4);
        assert!(matches!(list[3].shape, Shape::Sphere { .. }));
    }

    #[test]
    fn test_hud_from_fresh_state() {
        let state = GameState::new(1, &Settings::default());
        let hud = Hud::from_state(&state);
        assert_eq!(hud.player_clock, "1:00");
        assert_eq!(hud.boss_clock, "5:00");
        assert_eq!(hud.player_fraction, 0.5);
        assert_eq!(hud.boss_fraction, 1.0);
        assert_eq!(hud.stamina_fraction, 1.0);
        assert_eq!(hud.boss_state, "Idle");
        assert_eq!(hud.boss_color, time_color(1.0));
        assert_eq!(hud.player_color, time_color(0.5));
    }

    #[test]
    fn test_hud_color_follows_time_left() {
        let mut state = GameState::new(1, &Settings::default());
        state.boss.take_damage(290.0);
        let hud = Hud::from_state(&state);
        // Nearly out: red channel maxed, green mostly gone
        assert_eq!(hud.boss_color[0], 1.0);
        assert!(hud.boss_color[1] < 0.1);
    }

    #[test]
    fn test_time_color_ends() {
        assert_eq!(time_color(1.0), [0.0, 0.85, 0.2, 1.0]);
        assert_eq!(time_color(0.0), [1.0, 0.0, 0.2, 1.0]);
    }
}
