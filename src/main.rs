use std::time::Duration;

use tracing::{info, warn, Level};

use mitosis_arena::config::SimConfig;
use mitosis_arena::runner::Simulation;
use mitosis_arena::sim::constants::spawn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Mitosis Arena v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = SimConfig::load_or_default();
    if let Err(e) = config.validate() {
        anyhow::bail!("invalid configuration: {e}");
    }
    info!(
        "Configuration loaded: {}x{} arena, {} bots, {} Hz",
        config.arena_width, config.arena_height, config.initial_bots, config.tick_rate
    );

    let mut sim = Simulation::launch(&config);

    // A session id from the environment arms the chase; without one the
    // swarm just wanders
    if let Ok(id) = std::env::var("SESSION_ID") {
        match sim.set_session(&id) {
            Ok(()) => info!("session set"),
            Err(e) => warn!("rejected SESSION_ID: {e}"),
        }
    }
    sim.start();

    // With FRAME_STREAM set, scenes go to stdout as NDJSON for an external
    // renderer to consume
    let stream_frames = std::env::var("FRAME_STREAM").is_ok();

    // Sweep the pointer along a slow ellipse so the player keeps moving
    let (cx, cy) = (config.arena_width / 2.0, config.arena_height / 2.0);
    let mut phase: f32 = 0.0;

    let mut pointer_interval = tokio::time::interval(Duration::from_millis(50));
    let mut status_interval = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
            _ = pointer_interval.tick() => {
                phase += 0.05;
                sim.set_pointer(
                    cx + phase.cos() * config.arena_width / 4.0,
                    cy + phase.sin() * config.arena_height / 4.0,
                );
                if stream_frames {
                    println!("{}", serde_json::to_string(&sim.scene())?);
                }
            }
            _ = status_interval.tick() => {
                let status = sim.snapshot();
                info!(
                    bots = status.bot_count,
                    running = status.running,
                    session = status.session_id.as_deref().unwrap_or("-"),
                    budget_pct = sim.frame_budget_usage() as f64,
                    "status"
                );
                // Keep the demo population alive: top up when a clear (or a
                // fresh start) left the arena empty
                if status.bot_count == 0 {
                    sim.spawn(spawn::DEFAULT_COUNT);
                }
            }
        }
    }

    sim.dispose();
    info!("Simulation stopped");

    Ok(())
}
