//! Per-tick input snapshot and step matching
//!
//! Matching is type-gated by the expected action: only input of the same kind
//! is looked at, and a wrong tilt is ignored rather than failed. Running out
//! of time is the only way to lose a step.

use super::action::{Action, Direction};
use crate::platform::InputSource;

/// Input observed during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Encoder turned
    pub turned: bool,
    /// Button pressed
    pub pressed: bool,
    /// Active tilt
    pub tilt: Option<Direction>,
}

impl TickInput {
    /// Drain every query once so ignored events can't carry into later steps
    pub fn poll<I: InputSource + ?Sized>(source: &mut I, now: f64) -> Self {
        source.begin_tick(now);
        Self {
            turned: source.turned(),
            pressed: source.pressed(),
            tilt: source.tilt(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.turned && !self.pressed && self.tilt.is_none()
    }
}

/// Outcome of checking one tick's input against the expected action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Expected action performed
    Matched,
    /// Nothing relevant happened (including wrong-direction tilts)
    Pending,
}

/// Check `input` against `expected`
pub fn match_step(expected: Action, input: &TickInput) -> StepOutcome {
    let matched = match expected {
        Action::Tilt(dir) => input.tilt == Some(dir),
        Action::Rotate => input.turned,
        Action::Press => input.pressed,
    };

    if matched {
        StepOutcome::Matched
    } else {
        if !input.is_empty() {
            log::debug!("Ignoring {:?} while waiting for {:?}", input, expected);
        }
        StepOutcome::Pending
    }
}
