//! Jet Dodge headless runner
//!
//! Drives a session through the fixed-period clock with the autopilot at the
//! stick and logs how the runs go. Pass a settings JSON path as the first
//! argument to override the defaults.

use std::path::PathBuf;

use jet_dodge::sim::{GameEvent, GamePhase, GameSession, TickInput, tick};
use jet_dodge::{Settings, SimulationClock};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Jet Dodge (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref());

    let seed = settings.resolve_seed();
    log::info!("Session seed: {}", seed);

    let mut session = GameSession::new(seed);
    session.resize(settings.viewport_width, settings.viewport_height);

    let mut clock = SimulationClock::new(jet_dodge::consts::TICK_PERIOD, settings.max_substeps);
    let frame_dt = settings.frame_dt();
    let frames = (settings.run_seconds.max(0.0) / frame_dt).ceil() as u64;

    let mut games = 0u32;
    let mut best = 0u64;
    let mut restart_pending = false;

    for _ in 0..frames {
        clock.advance(frame_dt, || {
            let input = TickInput {
                restart: std::mem::take(&mut restart_pending),
                idle_mode: settings.autopilot,
                ..Default::default()
            };
            tick(&mut session, &input);
        });

        // Host-side reaction to what happened this frame
        for event in session.take_events() {
            match event {
                GameEvent::Started => games += 1,
                GameEvent::GameOver { score } => {
                    best = best.max(score);
                    log::info!("Run {} over with score {} (best {})", games, score, best);
                    if settings.auto_restart {
                        restart_pending = true;
                    }
                }
                GameEvent::FoodEaten { points } => {
                    log::debug!("+{} -> {}", points, session.score);
                }
                _ => {}
            }
        }

        if session.phase == GamePhase::GameOver && !settings.auto_restart {
            break;
        }
    }

    best = best.max(session.score);
    log::info!(
        "Finished after {} ticks: {} run(s), best score {}",
        session.time_ticks,
        games,
        best
    );

    if settings.print_snapshot {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}
