//! Game state and the render-facing scene snapshot
//!
//! Everything needed to resume a run lives in [`GameState`], including the
//! RNG, so a saved state replays identically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidSize, seed_field};
use super::bounds::validate_bounds;
use super::missile::{Missile, MissileState};
use super::ship::ShipState;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Things that happened during the last tick, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    MissileLaunched { launch_num: u32 },
    /// An asteroid of `size` broke into two smaller ones
    AsteroidFragmented { pos: Vec2, size: AsteroidSize },
    /// A smallest-tier asteroid was hit and removed
    AsteroidDestroyed { pos: Vec2 },
    ShipDestroyed { pos: Vec2 },
}

/// Ship as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub center: Vec2,
    pub rotation: f32,
}

/// Read-only snapshot handed to the renderer after each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub tick: u64,
    pub ship: ShipView,
    pub missiles: Vec<Missile>,
    pub asteroids: Vec<Asteroid>,
    pub game_over: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub bounds_max: Vec2,
    pub ship: ShipState,
    pub missiles: MissileState,
    pub asteroids: Vec<Asteroid>,
    /// Sticky: once set, never cleared
    pub game_over: bool,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Start a run: ship centered and at rest, four asteroids in the gutters
    pub fn new(seed: u64, bounds_max: Vec2, tuning: &Tuning) -> Result<Self, ConfigError> {
        let bounds_max = validate_bounds(bounds_max)?;
        tuning.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let asteroids = seed_field(bounds_max, tuning, &mut rng);
        log::info!("New game with seed {}", seed);

        Ok(Self {
            seed,
            time_ticks: 0,
            bounds_max,
            ship: ShipState::new(bounds_max / 2.0, bounds_max),
            missiles: MissileState::new(bounds_max),
            asteroids,
            game_over: false,
            events: Vec::new(),
            rng,
        })
    }

    /// Adopt new world bounds (viewport resize). Positions are kept as is;
    /// anything now outside wraps on its next move.
    pub fn resize(&mut self, bounds_max: Vec2) -> Result<(), ConfigError> {
        let bounds_max = validate_bounds(bounds_max).inspect_err(|err| {
            log::warn!("Ignoring resize: {}", err);
        })?;

        self.bounds_max = bounds_max;
        self.ship.bounds_max = bounds_max;
        self.missiles.bounds_max = bounds_max;
        for asteroid in &mut self.asteroids {
            asteroid.bounds_max = bounds_max;
        }
        log::info!("World resized to {}x{}", bounds_max.x, bounds_max.y);
        Ok(())
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Snapshot for the renderer
    pub fn scene(&self) -> Scene {
        Scene {
            tick: self.time_ticks,
            ship: ShipView {
                center: self.ship.center,
                rotation: self.ship.rotation,
            },
            missiles: self.missiles.missiles.clone(),
            asteroids: self.asteroids.clone(),
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new(12345, Vec2::new(800.0, 600.0), &Tuning::default()).unwrap();
        assert_eq!(state.ship.center, Vec2::new(400.0, 300.0));
        assert!(state.ship.displacements.is_empty());
        assert_eq!(state.asteroids.len(), 4);
        assert!(state.missiles.missiles.is_empty());
        assert_eq!(state.missiles.m_num, 0);
        assert!(!state.game_over);
    }

    #[test]
    fn test_new_game_rejects_degenerate_bounds() {
        let err = GameState::new(1, Vec2::new(0.0, 600.0), &Tuning::default()).unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateBounds { .. }));
    }

    #[test]
    fn test_new_game_rejects_bad_tuning() {
        let tuning = Tuning {
            asteroid_radius: -1.0,
            ..Default::default()
        };
        assert!(GameState::new(1, Vec2::new(800.0, 600.0), &tuning).is_err());
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = GameState::new(99, Vec2::new(640.0, 480.0), &Tuning::default()).unwrap();
        let b = GameState::new(99, Vec2::new(640.0, 480.0), &Tuning::default()).unwrap();
        assert_eq!(a.asteroids, b.asteroids);
    }

    #[test]
    fn test_resize_propagates_bounds() {
        let mut state = GameState::new(5, Vec2::new(800.0, 600.0), &Tuning::default()).unwrap();
        let bounds = Vec2::new(1024.0, 768.0);
        state.resize(bounds).unwrap();

        assert_eq!(state.ship.bounds_max, bounds);
        assert_eq!(state.missiles.bounds_max, bounds);
        assert!(state.asteroids.iter().all(|a| a.bounds_max == bounds));
    }

    #[test]
    fn test_resize_rejects_degenerate_bounds() {
        let mut state = GameState::new(5, Vec2::new(800.0, 600.0), &Tuning::default()).unwrap();
        assert!(state.resize(Vec2::new(-1.0, 768.0)).is_err());
        assert_eq!(state.bounds_max, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = GameState::new(77, Vec2::new(800.0, 600.0), &Tuning::default()).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.scene(), state.scene());
    }
}
