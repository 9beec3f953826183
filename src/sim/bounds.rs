//! Toroidal world bounds and box hit-tests
//!
//! The world spans the open rectangle (0, 0)..(max.x, max.y) in screen
//! pixels. Ships and asteroids wrap around its edges; missiles do not.

use glam::Vec2;

use crate::error::ConfigError;

/// Check that world bounds are usable before any geometry runs on them
pub fn validate_bounds(bounds_max: Vec2) -> Result<Vec2, ConfigError> {
    if bounds_max.is_finite() && bounds_max.x > 0.0 && bounds_max.y > 0.0 {
        Ok(bounds_max)
    } else {
        Err(ConfigError::DegenerateBounds {
            x: bounds_max.x,
            y: bounds_max.y,
        })
    }
}

/// True iff `pos` is strictly inside the world; the edges count as outside.
#[inline]
pub fn in_bounds(pos: Vec2, bounds_max: Vec2) -> bool {
    pos.x > 0.0 && pos.x < bounds_max.x && pos.y > 0.0 && pos.y < bounds_max.y
}

/// Re-enter an out-of-bounds position on the opposite edge.
///
/// Assumes only one axis is out of range. The out axis is y when x is in
/// range, otherwise x; a corner exit therefore corrects x on this call and
/// y on the next one. The in-range axis is kept as is.
pub fn wrap_bounds(exit: Vec2, bounds_max: Vec2) -> Vec2 {
    if exit.x > 0.0 && exit.x < bounds_max.x {
        Vec2::new(exit.x, reentry(exit.y, bounds_max.y))
    } else {
        Vec2::new(reentry(exit.x, bounds_max.x), exit.y)
    }
}

/// Leaving past the far edge re-enters at 0, leaving past 0 at the far edge
#[inline]
fn reentry(coord: f32, max: f32) -> f32 {
    if coord >= max { 0.0 } else { max }
}

/// Strict axis-aligned box test: `point` lies within ±`radius` of `center`
#[inline]
pub fn hit_test(center: Vec2, radius: f32, point: Vec2) -> bool {
    point.x > center.x - radius
        && point.x < center.x + radius
        && point.y > center.y - radius
        && point.y < center.y + radius
}
