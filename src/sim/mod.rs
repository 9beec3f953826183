//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only, carried in the game state
//! - State goes in, new state comes out
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod bounds;
pub mod collision;
pub mod input;
pub mod missile;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidSize, OutlineType, drift, fragment, seed_field};
pub use bounds::{hit_test, in_bounds, validate_bounds, wrap_bounds};
pub use collision::{ProjectileEntities, asteroid_missile_collision, ship_collision};
pub use input::{ControlKey, FireLatch, KeysDown, PilotInput};
pub use missile::{Launch, Missile, MissileState, advance_missiles};
pub use ship::{AngularDisplacement, ShipState, rotate_ship, transform_ship};
pub use state::{GameEvent, GameState, Scene, ShipView};
pub use tick::{TickInput, tick};
