//! Missile lifecycle: launch, flight, and culling at the world edge
//!
//! Missiles fly straight and never wrap; leaving the world removes them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::in_bounds;
use crate::heading;
use crate::tuning::Tuning;

/// A fired missile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub firing_angle: f32,
    pub pos: Vec2,
    /// Can still damage an asteroid; cleared after its first hit
    pub potent: bool,
}

impl Missile {
    /// Move one tick along the firing angle
    pub fn advanced(&self, speed: f32) -> Self {
        Self {
            pos: self.pos + speed * heading(self.firing_angle),
            ..*self
        }
    }

    /// Spend the missile; once inert it stays inert
    pub fn spend(&mut self) {
        self.potent = false;
    }
}

/// Fire command issued by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub missile_start: Vec2,
    pub missile_angle: f32,
    /// Strictly increasing per press; repeats are ignored
    pub launch_num: u32,
}

/// All missiles in flight plus the launch de-duplication counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissileState {
    pub missiles: Vec<Missile>,
    /// Highest launch number already turned into a missile
    pub m_num: u32,
    pub bounds_max: Vec2,
}

impl MissileState {
    pub fn new(bounds_max: Vec2) -> Self {
        Self {
            missiles: Vec::new(),
            m_num: 0,
            bounds_max,
        }
    }
}

/// Advance every missile, drop the ones that left the world, then spawn
/// the pending launch if it is new.
pub fn advance_missiles(state: &MissileState, launch: Option<&Launch>, tuning: &Tuning) -> MissileState {
    let mut missiles: Vec<Missile> = state
        .missiles
        .iter()
        .map(|m| m.advanced(tuning.missile_speed))
        .filter(|m| in_bounds(m.pos, state.bounds_max))
        .collect();

    let mut m_num = state.m_num;
    if let Some(launch) = launch.filter(|l| l.launch_num > state.m_num) {
        log::debug!(
            "Missile {} launched at ({:.1}, {:.1})",
            launch.launch_num,
            launch.missile_start.x,
            launch.missile_start.y
        );
        m_num = launch.launch_num;
        missiles.push(Missile {
            firing_angle: launch.missile_angle,
            pos: launch.missile_start,
            potent: true,
        });
    }

    MissileState {
        missiles,
        m_num,
        bounds_max: state.bounds_max,
    }
}
