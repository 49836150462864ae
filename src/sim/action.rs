//! Player action catalog
//!
//! The closed set of moves a sequence can ask for. Tilts are grouped under
//! [`Direction`] so matching and rendering stay exhaustive.

use serde::{Deserialize, Serialize};

/// Tilt direction reported by the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    /// All tilt directions, in catalog order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];
}

/// A single move the player must reproduce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Turn the encoder knob (either way)
    Rotate,
    /// Push the encoder button
    Press,
    /// Tilt the whole device
    Tilt(Direction),
}

impl Action {
    /// Every action a sequence can draw from
    pub const ALL: [Action; 6] = [
        Action::Rotate,
        Action::Press,
        Action::Tilt(Direction::Left),
        Action::Tilt(Direction::Right),
        Action::Tilt(Direction::Forward),
        Action::Tilt(Direction::Backward),
    ];

    /// Short label shown on the display
    pub fn label(&self) -> &'static str {
        match self {
            Action::Rotate => "TURN",
            Action::Press => "PRESS",
            Action::Tilt(Direction::Left) => "LEFT",
            Action::Tilt(Direction::Right) => "RIGHT",
            Action::Tilt(Direction::Forward) => "FWD",
            Action::Tilt(Direction::Backward) => "BACK",
        }
    }

    /// Tilt direction, if this is a directional action
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Action::Tilt(dir) => Some(*dir),
            Action::Rotate | Action::Press => None,
        }
    }

    /// Returns true for the tilt actions
    pub fn is_directional(&self) -> bool {
        self.direction().is_some()
    }
}

impl From<Direction> for Action {
    fn from(dir: Direction) -> Self {
        Action::Tilt(dir)
    }
}
