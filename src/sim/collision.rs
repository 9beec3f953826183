//! Collision detection between missiles, asteroids and the ship
//!
//! Every test is the same axis-aligned box check against an asteroid's hit
//! radius. Missiles are single use: the first asteroid a potent missile
//! touches spends it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, fragment};
use super::bounds::hit_test;
use super::missile::Missile;
use super::state::GameEvent;
use crate::tuning::Tuning;

/// Asteroids and missiles after one collision pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectileEntities {
    pub asteroids: Vec<Asteroid>,
    pub missiles: Vec<Missile>,
}

/// True if `point` is inside the asteroid's hit box
#[inline]
pub fn asteroid_hit(asteroid: &Asteroid, point: Vec2, tuning: &Tuning) -> bool {
    hit_test(asteroid.center, asteroid.hit_radius(tuning), point)
}

/// Cross-check every asteroid against every missile.
///
/// An asteroid touched by at least one potent missile is replaced by its
/// fragments, in place. Every potent missile overlapping it is spent, not
/// just the first. Missiles are never removed here; spent ones fly on
/// until they leave the world.
pub fn asteroid_missile_collision<R: Rng>(
    asteroids: &[Asteroid],
    mut missiles: Vec<Missile>,
    tuning: &Tuning,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> ProjectileEntities {
    let mut survivors = Vec::with_capacity(asteroids.len());

    for asteroid in asteroids {
        let mut collision = false;
        for missile in missiles.iter_mut() {
            if missile.potent && asteroid_hit(asteroid, missile.pos, tuning) {
                missile.spend();
                collision = true;
            }
        }

        if !collision {
            survivors.push(*asteroid);
            continue;
        }

        let pieces = fragment(asteroid, tuning, rng);
        events.push(if pieces.is_empty() {
            GameEvent::AsteroidDestroyed {
                pos: asteroid.center,
            }
        } else {
            GameEvent::AsteroidFragmented {
                pos: asteroid.center,
                size: asteroid.size,
            }
        });
        survivors.extend(pieces);
    }

    ProjectileEntities {
        asteroids: survivors,
        missiles,
    }
}

/// Whether the ship is dead. Once dead it stays dead.
pub fn ship_collision(game_over: bool, ship_center: Vec2, asteroids: &[Asteroid], tuning: &Tuning) -> bool {
    game_over || asteroids.iter().any(|a| asteroid_hit(a, ship_center, tuning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::{AsteroidSize, OutlineType};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::FRAC_PI_4;

    fn rock(x: f32, y: f32, size: AsteroidSize) -> Asteroid {
        Asteroid {
            center: Vec2::new(x, y),
            bounds_max: Vec2::new(400.0, 400.0),
            drift_angle: FRAC_PI_4,
            outline_type: OutlineType::C,
            size,
        }
    }

    fn missile(x: f32, y: f32) -> Missile {
        Missile {
            firing_angle: 0.0,
            pos: Vec2::new(x, y),
            potent: true,
        }
    }

    #[test]
    fn test_hit_fragments_asteroid_and_spends_missile() {
        let tuning = Tuning::default();
        let r = tuning.asteroid_radius;
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();

        let result = asteroid_missile_collision(
            &[rock(50.0, 50.0, AsteroidSize::Full)],
            vec![missile(50.0, 50.0)],
            &tuning,
            &mut rng,
            &mut events,
        );

        assert_eq!(result.asteroids.len(), 2);
        let (left, right) = (result.asteroids[0], result.asteroids[1]);
        assert!((left.center.x - (50.0 - r / 1.5)).abs() < 1e-4);
        assert!((right.center.x - (50.0 + r / 1.5)).abs() < 1e-4);
        assert_eq!(left.center.y, 50.0);
        assert_eq!(right.center.y, 50.0);
        assert!((left.drift_angle - 0.0).abs() < 1e-6);
        assert!((right.drift_angle - 2.0 * FRAC_PI_4).abs() < 1e-6);
        assert!(result.asteroids.iter().all(|a| a.size == AsteroidSize::Half));

        assert_eq!(result.missiles.len(), 1);
        assert!(!result.missiles[0].potent);
        assert!(matches!(events[..], [GameEvent::AsteroidFragmented { size: AsteroidSize::Full, .. }]));
    }

    #[test]
    fn test_spent_missile_does_not_hit() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();
        let mut spent = missile(50.0, 50.0);
        spent.spend();

        let result = asteroid_missile_collision(
            &[rock(50.0, 50.0, AsteroidSize::Full)],
            vec![spent],
            &tuning,
            &mut rng,
            &mut events,
        );
        assert_eq!(result.asteroids, vec![rock(50.0, 50.0, AsteroidSize::Full)]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_all_overlapping_missiles_are_spent() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();

        let result = asteroid_missile_collision(
            &[rock(100.0, 100.0, AsteroidSize::Half)],
            vec![missile(100.0, 100.0), missile(105.0, 95.0), missile(300.0, 300.0)],
            &tuning,
            &mut rng,
            &mut events,
        );

        assert_eq!(result.asteroids.len(), 2);
        assert!(!result.missiles[0].potent);
        assert!(!result.missiles[1].potent);
        assert!(result.missiles[2].potent);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_missile_spent_on_first_asteroid_spares_second() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();
        let second = rock(105.0, 100.0, AsteroidSize::Full);

        let result = asteroid_missile_collision(
            &[rock(100.0, 100.0, AsteroidSize::Quarter), second],
            vec![missile(100.0, 100.0)],
            &tuning,
            &mut rng,
            &mut events,
        );

        // Quarter tier vanishes; the overlapping full-size rock is untouched
        assert_eq!(result.asteroids, vec![second]);
        assert!(matches!(events[..], [GameEvent::AsteroidDestroyed { .. }]));
    }

    #[test]
    fn test_fragments_keep_field_order() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();
        let first = rock(20.0, 300.0, AsteroidSize::Full);
        let last = rock(380.0, 300.0, AsteroidSize::Full);

        let result = asteroid_missile_collision(
            &[first, rock(200.0, 100.0, AsteroidSize::Full), last],
            vec![missile(200.0, 100.0)],
            &tuning,
            &mut rng,
            &mut events,
        );

        assert_eq!(result.asteroids.len(), 4);
        assert_eq!(result.asteroids[0], first);
        assert_eq!(result.asteroids[3], last);
    }

    #[test]
    fn test_ship_collision_is_sticky() {
        let tuning = Tuning::default();
        let field = [rock(50.0, 50.0, AsteroidSize::Full)];

        assert!(ship_collision(false, Vec2::new(55.0, 45.0), &field, &tuning));
        assert!(!ship_collision(false, Vec2::new(300.0, 300.0), &field, &tuning));
        assert!(ship_collision(true, Vec2::new(300.0, 300.0), &[], &tuning));
    }

    proptest! {
        #[test]
        fn prop_spent_missiles_never_recover(
            positions in prop::collection::vec((0.0f32..400.0, 0.0f32..400.0, any::<bool>()), 1..20),
            seed in any::<u64>(),
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut events = Vec::new();
            let field = [
                rock(100.0, 100.0, AsteroidSize::Full),
                rock(300.0, 300.0, AsteroidSize::Half),
            ];
            let missiles: Vec<Missile> = positions
                .iter()
                .map(|&(x, y, potent)| Missile { firing_angle: 0.0, pos: Vec2::new(x, y), potent })
                .collect();

            let result = asteroid_missile_collision(&field, missiles.clone(), &tuning, &mut rng, &mut events);
            prop_assert_eq!(result.missiles.len(), missiles.len());
            for (before, after) in missiles.iter().zip(&result.missiles) {
                prop_assert!(before.potent || !after.potent);
            }
        }
    }
}
