//! Per-frame simulation tick
//!
//! Order within a tick: ship, missiles, missile/asteroid collisions,
//! ship/asteroid collision, asteroid drift.

use super::asteroid::drift;
use super::collision::{asteroid_missile_collision, ship_collision};
use super::input::{FireLatch, KeysDown};
use super::missile::{Launch, advance_missiles};
use super::ship::{rotate_ship, transform_ship};
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Controls held this tick
    pub keys: KeysDown,
    /// Most recent fire command; replaying an old one is harmless
    pub launch: Option<Launch>,
}

impl TickInput {
    /// Build a tick's input from held keys, issuing a launch on a fresh fire press
    pub fn from_keys(keys: KeysDown, latch: &mut FireLatch, state: &GameState) -> Self {
        let launch = latch.update(keys.pilot_input(), state.ship.center, state.ship.rotation);
        Self { keys, launch }
    }
}

/// Advance the game by one tick, consuming the old state
pub fn tick(mut state: GameState, input: &TickInput, tuning: &Tuning) -> GameState {
    state.events.clear();
    state.time_ticks += 1;

    // Game over is terminal; nothing moves again
    if state.game_over {
        return state;
    }

    let mut events = Vec::new();

    let rotation = rotate_ship(state.ship.rotation, input.keys.pilot_input(), tuning);
    let ship = transform_ship(&state.ship, input.keys.thrust, rotation, tuning);

    let missiles = advance_missiles(&state.missiles, input.launch.as_ref(), tuning);
    if missiles.m_num > state.missiles.m_num {
        events.push(GameEvent::MissileLaunched {
            launch_num: missiles.m_num,
        });
    }

    let asteroids = std::mem::take(&mut state.asteroids);
    let entities = asteroid_missile_collision(
        &asteroids,
        missiles.missiles,
        tuning,
        state.rng_mut(),
        &mut events,
    );

    let game_over = ship_collision(state.game_over, ship.center, &entities.asteroids, tuning);
    if game_over {
        log::info!(
            "Ship destroyed at ({:.1}, {:.1}) on tick {}",
            ship.center.x,
            ship.center.y,
            state.time_ticks
        );
        events.push(GameEvent::ShipDestroyed { pos: ship.center });
    }

    state.asteroids = entities.asteroids.iter().map(|a| drift(a, tuning)).collect();
    state.missiles.missiles = entities.missiles;
    state.missiles.m_num = missiles.m_num;
    state.ship = ship;
    state.game_over = game_over;
    state.events = events;
    state
}
