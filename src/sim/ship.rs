//! Ship motion
//!
//! The ship's velocity is not a single vector. Each heading the pilot has
//! thrusted along keeps its own decaying speed, so turning never cancels
//! momentum already built up in another direction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{in_bounds, wrap_bounds};
use super::input::PilotInput;
use crate::heading;
use crate::tuning::Tuning;

/// Speed accumulated along one thrust heading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularDisplacement {
    /// Heading in radians, compared exactly
    pub angle: f32,
    pub velocity: f32,
}

/// Whether a displacement entry gains or loses speed this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accel {
    /// Thrusting along the entry; `total` is the summed speed of the whole table
    Thrust { total: f32 },
    Coast,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    pub center: Vec2,
    /// Free-running heading; never normalized
    pub rotation: f32,
    /// Heading of the most recent thrust input
    pub rotation_at_thrust: f32,
    pub bounds_max: Vec2,
    /// One entry per distinct thrust heading, oldest first
    pub displacements: Vec<AngularDisplacement>,
}

impl ShipState {
    /// A motionless ship pointing up the screen
    pub fn new(center: Vec2, bounds_max: Vec2) -> Self {
        Self {
            center,
            rotation: 0.0,
            rotation_at_thrust: 0.0,
            bounds_max,
            displacements: Vec::new(),
        }
    }

    /// Net per-tick displacement in screen space
    pub fn velocity(&self) -> Vec2 {
        self.displacements
            .iter()
            .map(|d| d.velocity * heading(d.angle))
            .sum()
    }

    /// Sum of the speeds along every heading (the ceiling guard input)
    pub fn total_speed(&self) -> f32 {
        self.displacements.iter().map(|d| d.velocity).sum()
    }
}

/// Apply one tick of rotate input; other inputs leave the heading alone
pub fn rotate_ship(rotation: f32, input: PilotInput, tuning: &Tuning) -> f32 {
    match input {
        PilotInput::RotateLeft => rotation - tuning.rotation_step(),
        PilotInput::RotateRight => rotation + tuning.rotation_step(),
        _ => rotation,
    }
}

/// Next speed along one heading
pub fn resolve_velocity(velocity: f32, accel: Accel, tuning: &Tuning) -> f32 {
    match accel {
        Accel::Thrust { total } => {
            let boosted = velocity + tuning.thrust_accel;
            if boosted + total >= tuning.thrust_ceil {
                // Whole ship is at its limit; hold this heading where it is
                velocity
            } else if boosted >= tuning.thrust_ceil {
                tuning.thrust_ceil
            } else {
                boosted
            }
        }
        Accel::Coast => (velocity - tuning.thrust_decel).max(tuning.thrust_floor),
    }
}

/// Advance the ship one tick.
///
/// `rotation` is the heading after this tick's rotate input. The ship wraps
/// before it moves, so a ship that left the world this tick reappears on the
/// opposite edge next tick.
pub fn transform_ship(ship: &ShipState, thrust: bool, rotation: f32, tuning: &Tuning) -> ShipState {
    let mut rotation_at_thrust = ship.rotation_at_thrust;
    let mut table = ship.displacements.clone();

    if thrust {
        rotation_at_thrust = rotation;
        if !table.iter().any(|d| d.angle == rotation_at_thrust) {
            table.push(AngularDisplacement {
                angle: rotation_at_thrust,
                velocity: tuning.thrust_floor,
            });
        }
    }

    let mut center = ship.center;
    if !in_bounds(center, ship.bounds_max) {
        center = wrap_bounds(center, ship.bounds_max);
    }

    // Spent headings drop out, except the one being thrusted along
    table.retain(|d| d.angle == rotation_at_thrust || d.velocity > tuning.thrust_floor);

    let total: f32 = table.iter().map(|d| d.velocity).sum();
    let displacements: Vec<AngularDisplacement> = table
        .into_iter()
        .map(|d| {
            let accel = if thrust && d.angle == rotation_at_thrust {
                Accel::Thrust { total }
            } else {
                Accel::Coast
            };
            AngularDisplacement {
                angle: d.angle,
                velocity: resolve_velocity(d.velocity, accel, tuning),
            }
        })
        .collect();

    let mut next = ShipState {
        center,
        rotation,
        rotation_at_thrust,
        bounds_max: ship.bounds_max,
        displacements,
    };
    next.center += next.velocity();
    next
}
