//! Data-driven game balance
//!
//! Every speed and size the simulation uses lives here so a run can be
//! re-balanced from a JSON file without rebuilding.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Balance values for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Max velocity along one thrust direction
    pub thrust_ceil: f32,
    /// Min velocity along one thrust direction (entries at the floor are dropped)
    pub thrust_floor: f32,
    /// Velocity gained per tick of thrust
    pub thrust_accel: f32,
    /// Velocity lost per tick without thrust
    pub thrust_decel: f32,
    /// Number of ticks to turn π/3
    pub rotation_increment: f32,

    // === Projectiles ===
    pub missile_speed: f32,

    // === Asteroids ===
    pub asteroid_speed: f32,
    /// Hit-box half extent of a full-size asteroid
    pub asteroid_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            thrust_ceil: THRUST_CEIL,
            thrust_floor: THRUST_FLOOR,
            thrust_accel: THRUST_ACCEL,
            thrust_decel: THRUST_DECEL,
            rotation_increment: ROTATION_INCREMENT,

            missile_speed: MISSILE_SPD,

            asteroid_speed: ASTEROID_SPD,
            asteroid_radius: ASTEROID_RADIUS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the velocity or geometry invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("thrust_ceil", self.thrust_ceil),
            ("thrust_floor", self.thrust_floor),
            ("thrust_accel", self.thrust_accel),
            ("thrust_decel", self.thrust_decel),
            ("missile_speed", self.missile_speed),
            ("asteroid_speed", self.asteroid_speed),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                log::warn!("Rejecting tuning: {} = {}", field, value);
                return Err(ConfigError::InvalidTuning {
                    field,
                    reason: "must be finite and >= 0",
                });
            }
        }

        let positive = [
            ("rotation_increment", self.rotation_increment),
            ("asteroid_radius", self.asteroid_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                log::warn!("Rejecting tuning: {} = {}", field, value);
                return Err(ConfigError::InvalidTuning {
                    field,
                    reason: "must be finite and > 0",
                });
            }
        }

        if self.thrust_floor >= self.thrust_ceil {
            return Err(ConfigError::InvalidTuning {
                field: "thrust_floor",
                reason: "must be below thrust_ceil",
            });
        }

        Ok(())
    }

    /// Radians turned per tick of rotate input
    #[inline]
    pub fn rotation_step(&self) -> f32 {
        std::f32::consts::FRAC_PI_3 / self.rotation_increment
    }
}
