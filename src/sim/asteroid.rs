//! Asteroid field: seeding, drift, and fragmentation

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::{in_bounds, wrap_bounds};
use crate::heading;
use crate::tuning::Tuning;

/// The four headings an asteroid can be seeded with
pub const DRIFT_ANGLES: [f32; 4] = [
    FRAC_PI_4,
    7.0 * FRAC_PI_4,
    5.0 * FRAC_PI_4,
    3.0 * FRAC_PI_4,
];

/// Number of asteroids in a fresh field (one per edge)
pub const SEED_COUNT: usize = 4;

/// Outline shape; purely cosmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlineType {
    A,
    B,
    C,
    D,
}

impl OutlineType {
    pub const ALL: [OutlineType; 4] = [OutlineType::A, OutlineType::B, OutlineType::C, OutlineType::D];
}

/// Fragmentation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidSize {
    Full,
    Half,
    Quarter,
}

impl AsteroidSize {
    /// Radius divisor: 1, 2 or 4
    pub fn tier(&self) -> u8 {
        match self {
            AsteroidSize::Full => 1,
            AsteroidSize::Half => 2,
            AsteroidSize::Quarter => 4,
        }
    }

    /// Size of the pieces this tier breaks into, if any
    pub fn fragment(&self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Full => Some(AsteroidSize::Half),
            AsteroidSize::Half => Some(AsteroidSize::Quarter),
            AsteroidSize::Quarter => None,
        }
    }
}

/// An asteroid entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub center: Vec2,
    pub bounds_max: Vec2,
    pub drift_angle: f32,
    pub outline_type: OutlineType,
    pub size: AsteroidSize,
}

impl Asteroid {
    /// Half extent of the hit box; smaller tiers shrink it
    #[inline]
    pub fn hit_radius(&self, tuning: &Tuning) -> f32 {
        tuning.asteroid_radius / self.size.tier() as f32
    }
}

/// Uniform pick of one of four slots
fn random_of_four<R: Rng>(rng: &mut R) -> usize {
    rng.random_range(0..4)
}

fn random_outline<R: Rng>(rng: &mut R) -> OutlineType {
    OutlineType::ALL[random_of_four(rng)]
}

/// Whole-pixel coordinate between `floor` and `ceiling`, both inclusive
fn random_coord<R: Rng>(floor: f32, ceiling: f32, rng: &mut R) -> f32 {
    (rng.random::<f32>() * (ceiling - floor + 1.0) + floor).floor()
}

/// Random point inside one edge gutter; gutters run clockwise from the top
fn gutter_position<R: Rng>(index: usize, bounds_max: Vec2, radius: f32, rng: &mut R) -> Vec2 {
    let (w, h) = (bounds_max.x, bounds_max.y);
    let (floor, ceiling) = match index {
        0 => (Vec2::new(0.0, 0.0), Vec2::new(w, radius)),
        1 => (Vec2::new(w - radius, 0.0), Vec2::new(w, h)),
        2 => (Vec2::new(0.0, h - radius), Vec2::new(w, h)),
        _ => (Vec2::new(0.0, 0.0), Vec2::new(radius, h)),
    };
    Vec2::new(
        random_coord(floor.x, ceiling.x, rng),
        random_coord(floor.y, ceiling.y, rng),
    )
}

/// Generate the opening field: one full-size asteroid per screen edge
pub fn seed_field<R: Rng>(bounds_max: Vec2, tuning: &Tuning, rng: &mut R) -> Vec<Asteroid> {
    let field: Vec<Asteroid> = (0..SEED_COUNT)
        .map(|index| Asteroid {
            center: gutter_position(index, bounds_max, tuning.asteroid_radius, rng),
            bounds_max,
            drift_angle: DRIFT_ANGLES[random_of_four(rng)],
            outline_type: random_outline(rng),
            size: AsteroidSize::Full,
        })
        .collect();
    log::info!("Seeded {} asteroids in {}x{} field", field.len(), bounds_max.x, bounds_max.y);
    field
}

/// Move one tick; an asteroid already outside re-enters first
pub fn drift(asteroid: &Asteroid, tuning: &Tuning) -> Asteroid {
    let mut center = asteroid.center;
    if !in_bounds(center, asteroid.bounds_max) {
        center = wrap_bounds(center, asteroid.bounds_max);
    }
    Asteroid {
        center: center + tuning.asteroid_speed * heading(asteroid.drift_angle),
        ..*asteroid
    }
}

/// Break a hit asteroid into two smaller ones, or nothing at the smallest tier.
///
/// The pieces split sideways from the parent and veer π/4 either side of
/// its heading: the left piece turns left, the right piece turns right.
pub fn fragment<R: Rng>(asteroid: &Asteroid, tuning: &Tuning, rng: &mut R) -> Vec<Asteroid> {
    let Some(size) = asteroid.size.fragment() else {
        log::debug!("Asteroid destroyed at ({:.1}, {:.1})", asteroid.center.x, asteroid.center.y);
        return Vec::new();
    };

    let offset = asteroid.hit_radius(tuning) / 1.5;
    log::debug!(
        "Asteroid fragmented at ({:.1}, {:.1}) into tier {}",
        asteroid.center.x,
        asteroid.center.y,
        size.tier()
    );

    [(-1.0f32, -FRAC_PI_4), (1.0, FRAC_PI_4)]
        .into_iter()
        .map(|(side, veer)| Asteroid {
            center: Vec2::new(asteroid.center.x + side * offset, asteroid.center.y),
            bounds_max: asteroid.bounds_max,
            drift_angle: asteroid.drift_angle + veer,
            outline_type: random_outline(rng),
            size,
        })
        .collect()
}
