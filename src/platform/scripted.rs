//! Scripted input source
//!
//! Feeds queued events to the game. Used by the demo auto-player and in tests.

use super::InputSource;
use crate::sim::{Action, Direction};

#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    turns: u32,
    presses: u32,
    /// One-shot tilt, reported on the next poll only
    pulse_tilt: Option<Direction>,
    /// Tilt held until released
    held_tilt: Option<Direction>,
}

impl ScriptedInput {
    pub fn turn(&mut self) {
        self.turns += 1;
    }

    pub fn press(&mut self) {
        self.presses += 1;
    }

    /// Hold a tilt until [`release_tilt`](Self::release_tilt)
    pub fn hold_tilt(&mut self, dir: Direction) {
        self.held_tilt = Some(dir);
    }

    pub fn release_tilt(&mut self) {
        self.held_tilt = None;
    }

    /// Queue a single action (tilts last one poll)
    pub fn push(&mut self, action: Action) {
        match action {
            Action::Rotate => self.turn(),
            Action::Press => self.press(),
            Action::Tilt(dir) => self.pulse_tilt = Some(dir),
        }
    }

    /// True if nothing is waiting to be read
    pub fn is_idle(&self) -> bool {
        self.turns == 0 && self.presses == 0 && self.pulse_tilt.is_none()
    }
}

impl InputSource for ScriptedInput {
    fn turned(&mut self) -> bool {
        if self.turns > 0 {
            self.turns -= 1;
            true
        } else {
            false
        }
    }

    fn pressed(&mut self) -> bool {
        if self.presses > 0 {
            self.presses -= 1;
            true
        } else {
            false
        }
    }

    fn tilt(&mut self) -> Option<Direction> {
        self.pulse_tilt.take().or(self.held_tilt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_consumed() {
        let mut input = ScriptedInput::default();
        input.push(Action::Press);
        input.push(Action::Rotate);
        assert!(!input.is_idle());

        assert!(input.pressed());
        assert!(!input.pressed());
        assert!(input.turned());
        assert!(!input.turned());
        assert!(input.is_idle());
    }

    #[test]
    fn test_pulse_and_held_tilt() {
        let mut input = ScriptedInput::default();
        input.push(Action::Tilt(Direction::Left));
        assert_eq!(input.tilt(), Some(Direction::Left));
        assert_eq!(input.tilt(), None);

        input.hold_tilt(Direction::Backward);
        assert_eq!(input.tilt(), Some(Direction::Backward));
        assert_eq!(input.tilt(), Some(Direction::Backward));
        input.release_tilt();
        assert_eq!(input.tilt(), None);
    }
}
