//! Time Master entry point
//!
//! Native builds run a headless session with the autopilot at the fixed
//! simulation rate and log the outcome. A window layer would drive the same
//! `tick` with real input and draw `draw_list` each frame.
//!
//! Usage: `time-master [settings.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use time_master::consts::SIM_DT;
    use time_master::format_clock;
    use time_master::settings::Settings;
    use time_master::sim::{
        Assets, Damageable, FrameInput, GameEvent, GamePhase, GameState, Hud, draw_list, tick,
    };

    /// Give up after ten simulated minutes
    const MAX_TICKS: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Time Master (native) starting...");

    let args: Vec<String> = std::env::args().collect();
    let mut settings = match args.get(1) {
        Some(path) => Settings::load(Path::new(path)),
        None => Settings::default(),
    };
    let seed = match args.get(2).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Invalid seed ({e}); using 1");
            1
        }
        None => 1,
    };
    log::info!("Game initialized with seed: {}", seed);

    let assets = Assets::default();
    let mut state = GameState::new(seed, &settings);

    let start = FrameInput {
        confirm: true,
        ..Default::default()
    };
    tick(&mut state, &mut settings, &start, SIM_DT);

    let autopilot = FrameInput {
        autopilot: true,
        ..Default::default()
    };
    let mut melee_hits = 0u32;
    let mut shockwave_hits = 0u32;
    let mut tomatoes = 0u32;
    while !state.is_finished() && state.time_ticks < MAX_TICKS {
        tick(&mut state, &mut settings, &autopilot, SIM_DT);

        for event in &state.events {
            match event {
                GameEvent::MeleeHit => melee_hits += 1,
                GameEvent::Shockwave { hit: true, .. } => shockwave_hits += 1,
                GameEvent::TomatoCollected => tomatoes += 1,
                _ => {}
            }
        }

        // Once per simulated second
        if state.time_ticks % 60 == 0 {
            let hud = Hud::from_state(&state);
            log::debug!(
                "player {} | boss {} ({}) | {} drawables",
                hud.player_clock,
                hud.boss_clock,
                hud.boss_state,
                draw_list(&state, &assets).len()
            );
        }
    }

    let elapsed = state.time_ticks as f32 * SIM_DT;
    match state.phase {
        GamePhase::Victory => log::info!("Victory in {}", format_clock(elapsed)),
        GamePhase::GameOver => log::info!("Defeated after {}", format_clock(elapsed)),
        _ => log::warn!("Stopped after {} without a result", format_clock(elapsed)),
    }
    log::info!(
        "Player {} left, boss {} left; {} melee hits, {} shockwave hits taken, {} tomatoes",
        format_clock(state.player.time_left()),
        format_clock(state.boss.time_left()),
        melee_hits,
        shockwave_hits,
        tomatoes
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds are driven by the host page, not by main
}
