//! Solarium - headless solar-system simulation driver.
//!
//! Builds a session from `config.ron`, optionally exports every procedural texture as PNG,
//! then steps a scripted frame loop and logs what the simulation is doing.

mod config;
mod export;

use std::time::Duration;

use anyhow::{Context, Result};
use engine_core::FrameClock;
use input::InputState;
use orrery::{BodyKind, Session};

use config::AppConfig;

fn log_summary(session: &Session, frame: u64) {
    log::info!(
        "[frame {}] {} | {} | {} simulated days | camera {:?} at {:.1?}",
        frame,
        session.time.date_label(),
        session.time.speed_label(),
        session.time.simulated_days().round(),
        session.camera.mode(),
        session.camera.position(),
    );
    let live = session.prominences.prominences().iter().filter(|p| p.opacity > 0.0).count();
    log::debug!(
        "  {} prominences lit ({} respawned), {} meteors in flight",
        live,
        session.prominences.respawn_count(),
        session.meteors.active_count(),
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    log::info!(
        "Starting Solarium: seed {}, {} frames of {:.4}s",
        config.seed,
        config.frames,
        config.frame_delta
    );

    let mut session = Session::new(config.session_config()).context("building the solar system")?;

    if let Some(dir) = &config.texture_dir {
        export::export_textures(dir, &session.bodies, config.seed)?;
    }

    if let Some(name) = &config.follow {
        session.follow(name);
    }

    let frame_delta = Duration::try_from_secs_f64(config.frame_delta)
        .with_context(|| format!("invalid frame_delta {}", config.frame_delta))?;
    let mut clock = FrameClock::new();
    let input = InputState::new();

    for frame in 0..config.frames {
        for command in config.commands_at(frame) {
            session.time_command(command);
        }
        clock.tick_by(frame_delta);
        session.frame(clock.delta_seconds(), &input);

        if config.log_every > 0 && frame % config.log_every == 0 {
            log_summary(&session, frame);
        }
    }

    log_summary(&session, clock.frame_count());
    if let Some(id) = session.camera.following().or(session.selected()) {
        if let Some(info) = session.info(id) {
            println!("{info}");
        }
    }
    for id in session.bodies.of_kind(BodyKind::Comet) {
        if let Some(info) = session.info(id) {
            log::info!("{} is {:.1} units from the Sun", info.name, info.sun_distance.unwrap_or_default());
        }
    }

    Ok(())
}
