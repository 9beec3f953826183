//! Astro Drift - simulation core for an arcade asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic per-tick simulation (ship, missiles, asteroids, collisions)
//! - `tuning`: Data-driven game balance
//! - `error`: Configuration errors
//!
//! Rendering, keyboard wiring and frame scheduling live outside this crate.
//! They call [`sim::tick`] once per frame and draw the returned [`sim::Scene`].

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Rotation input divides π/3 into this many per-tick steps
    pub const ROTATION_INCREMENT: f32 = 12.0;

    /// Maximum velocity along a single thrust direction (pixels/tick)
    pub const THRUST_CEIL: f32 = 6.0;
    /// Minimum velocity along a single thrust direction
    pub const THRUST_FLOOR: f32 = 0.0;
    /// Velocity gained per tick of thrust
    pub const THRUST_ACCEL: f32 = 0.25;
    /// Velocity lost per tick without thrust in that direction
    pub const THRUST_DECEL: f32 = 0.02;

    /// Missile speed (pixels/tick)
    pub const MISSILE_SPD: f32 = 8.0;

    /// Asteroid drift speed (pixels/tick)
    pub const ASTEROID_SPD: f32 = 1.0;
    /// Half-extent of a full-size asteroid's hit box; also the gutter width
    pub const ASTEROID_RADIUS: f32 = 60.0;
}

/// Unit vector for a screen-space heading.
///
/// Angle 0 points up the screen; positive angles turn clockwise. Screen y
/// grows downward, so the y component is negated.
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), -angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_heading_cardinal_directions() {
        let up = heading(0.0);
        assert!(up.x.abs() < 1e-6 && (up.y + 1.0).abs() < 1e-6);

        let right = heading(FRAC_PI_2);
        assert!((right.x - 1.0).abs() < 1e-6 && right.y.abs() < 1e-6);

        let down = heading(PI);
        assert!(down.x.abs() < 1e-6 && (down.y - 1.0).abs() < 1e-6);
    }
}
