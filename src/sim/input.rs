//! Keyboard state to per-tick pilot input
//!
//! The host forwards raw key events here; the simulation only ever sees the
//! derived [`PilotInput`] and edge-triggered [`Launch`] commands.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::missile::Launch;

/// Controls the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKey {
    Thrust,
    RotateLeft,
    RotateRight,
    Fire,
}

impl ControlKey {
    /// Map a browser key code (up arrow, left arrow, right arrow, space)
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            38 => Some(ControlKey::Thrust),
            37 => Some(ControlKey::RotateLeft),
            39 => Some(ControlKey::RotateRight),
            32 => Some(ControlKey::Fire),
            _ => None,
        }
    }

    pub fn key_code(&self) -> u32 {
        match self {
            ControlKey::Thrust => 38,
            ControlKey::RotateLeft => 37,
            ControlKey::RotateRight => 39,
            ControlKey::Fire => 32,
        }
    }
}

/// The single action the ship takes this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PilotInput {
    Thrust,
    Fire,
    RotateLeft,
    RotateRight,
    #[default]
    NoInput,
}

/// Which controls are currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeysDown {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
}

impl KeysDown {
    /// Record a key press or release; unknown key codes are ignored
    pub fn map_key_event(&mut self, key_code: u32, pressed: bool) {
        if let Some(key) = ControlKey::from_key_code(key_code) {
            self.set(key, pressed);
        }
    }

    pub fn set(&mut self, key: ControlKey, pressed: bool) {
        match key {
            ControlKey::Thrust => self.thrust = pressed,
            ControlKey::RotateLeft => self.rotate_left = pressed,
            ControlKey::RotateRight => self.rotate_right = pressed,
            ControlKey::Fire => self.fire = pressed,
        }
    }

    pub fn is_down(&self, key: ControlKey) -> bool {
        match key {
            ControlKey::Thrust => self.thrust,
            ControlKey::RotateLeft => self.rotate_left,
            ControlKey::RotateRight => self.rotate_right,
            ControlKey::Fire => self.fire,
        }
    }

    /// Collapse held keys to one action.
    ///
    /// Priority: thrust, fire, rotate-left, rotate-right.
    pub fn pilot_input(&self) -> PilotInput {
        if self.thrust {
            PilotInput::Thrust
        } else if self.fire {
            PilotInput::Fire
        } else if self.rotate_left {
            PilotInput::RotateLeft
        } else if self.rotate_right {
            PilotInput::RotateRight
        } else {
            PilotInput::NoInput
        }
    }
}

/// Turns a held fire key into one launch per press
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FireLatch {
    launch_num: u32,
    held: bool,
}

impl FireLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number of the most recent launch issued
    pub fn launch_num(&self) -> u32 {
        self.launch_num
    }

    /// Issue a launch on the tick fire goes down, nothing while it stays down
    pub fn update(&mut self, input: PilotInput, ship_center: Vec2, ship_rotation: f32) -> Option<Launch> {
        let firing = input == PilotInput::Fire;
        let pressed = firing && !self.held;
        self.held = firing;
        if !pressed {
            return None;
        }

        self.launch_num += 1;
        Some(Launch {
            missile_start: ship_center,
            missile_angle: ship_rotation,
            launch_num: self.launch_num,
        })
    }
}
