//! Astro Drift headless runner
//!
//! Drives the simulation with a scripted pilot, the same way a browser
//! frame loop would, and reports the final scene.
//!
//! Usage:
//!   cargo run -- --seed 42 --ticks 600
//!   RUST_LOG=debug cargo run -- --tuning balance.json --json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use astro_drift::Tuning;
use astro_drift::sim::{FireLatch, GameEvent, GameState, KeysDown, TickInput, tick};

#[derive(Parser, Debug)]
#[command(name = "astro-drift")]
#[command(about = "Run the asteroid shooter simulation headless with a scripted pilot")]
struct Args {
    /// Run seed
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// World width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// World height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// JSON file overriding balance values
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the final scene as JSON
    #[arg(long)]
    json: bool,
}

/// Keys held for each phase of the pilot's loop, and for how many ticks
const SCRIPT: [(KeysDown, u64); 5] = [
    (keys(true, false, false, false), 20),
    (keys(false, false, true, false), 6),
    (keys(false, false, false, true), 1),
    (keys(false, false, false, false), 4),
    (keys(false, true, false, false), 9),
];

const fn keys(thrust: bool, rotate_left: bool, rotate_right: bool, fire: bool) -> KeysDown {
    KeysDown {
        thrust,
        rotate_left,
        rotate_right,
        fire,
    }
}

/// Keys the scripted pilot holds on a given tick
fn scripted_keys(tick: u64) -> KeysDown {
    let period: u64 = SCRIPT.iter().map(|(_, len)| len).sum();
    let mut t = tick % period;
    for (keys, len) in SCRIPT {
        if t < len {
            return keys;
        }
        t -= len;
    }
    KeysDown::default()
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read tuning file {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("invalid tuning file {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let tuning = load_tuning(args.tuning.as_ref())?;
    let mut state = GameState::new(args.seed, Vec2::new(args.width, args.height), &tuning)
        .context("failed to start game")?;
    let mut latch = FireLatch::new();

    log::info!("Astro Drift (headless) running {} ticks", args.ticks);

    let mut launched = 0u32;
    let mut hits = 0u32;
    for n in 0..args.ticks {
        let input = TickInput::from_keys(scripted_keys(n), &mut latch, &state);
        state = tick(state, &input, &tuning);

        for event in &state.events {
            match event {
                GameEvent::MissileLaunched { .. } => launched += 1,
                GameEvent::AsteroidFragmented { .. } | GameEvent::AsteroidDestroyed { .. } => {
                    hits += 1
                }
                GameEvent::ShipDestroyed { .. } => {}
            }
        }
        if state.game_over {
            break;
        }
    }

    let scene = state.scene();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
    } else {
        println!("=== RUN SUMMARY ===");
        println!("  Seed:       {}", args.seed);
        println!("  Ticks:      {}", scene.tick);
        println!("  Missiles:   {} launched, {} hits", launched, hits);
        println!("  Asteroids:  {} remaining", scene.asteroids.len());
        println!(
            "  Ship:       ({:.1}, {:.1}) heading {:.2} rad",
            scene.ship.center.x, scene.ship.center.y, scene.ship.rotation
        );
        println!("  Game over:  {}", scene.game_over);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_keys_cycle() {
        assert!(scripted_keys(0).thrust);
        assert!(scripted_keys(19).thrust);
        assert!(scripted_keys(20).rotate_right);
        assert!(scripted_keys(26).fire);
        assert_eq!(scripted_keys(27), KeysDown::default());
        assert!(scripted_keys(31).rotate_left);
        assert!(scripted_keys(40).thrust);
    }
}
