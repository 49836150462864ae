//! Game session state
//!
//! Everything the controller tracks between ticks lives here. The session is
//! created once and reset in place; it is never recreated on restart.

use serde::{Deserialize, Serialize};

use super::action::Action;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Difficulty selection
    Menu,
    /// Player is reproducing a sequence
    Playing,
    /// A step timed out
    GameOver,
    /// Final level cleared
    Win,
}

/// Complete session state (serializable for debugging snapshots)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    /// Index into the difficulty table
    pub difficulty_index: usize,
    /// Current level (1-based)
    pub level: u32,
    /// Expected actions for this level
    pub sequence: Vec<Action>,
    /// Index of the next expected action
    pub cursor: usize,
    /// Absolute monotonic time (seconds) after which the step is missed
    pub step_deadline: f64,
    /// Seconds allowed for each step of this level
    pub time_per_step: f64,
    /// Low-time cue already issued for the current step
    #[serde(default)]
    pub warned: bool,
}

impl GameSession {
    pub fn new(difficulty_index: usize) -> Self {
        Self {
            phase: GamePhase::Menu,
            difficulty_index,
            level: 1,
            sequence: Vec::new(),
            cursor: 0,
            step_deadline: 0.0,
            time_per_step: 0.0,
            warned: false,
        }
    }

    /// Action the player must perform next (only meaningful while playing)
    pub fn expected_action(&self) -> Option<Action> {
        self.sequence.get(self.cursor).copied()
    }

    /// True once every step of the level has been matched
    pub fn level_complete(&self) -> bool {
        self.cursor >= self.sequence.len()
    }

    /// Seconds left on the current step (negative once overdue)
    pub fn remaining(&self, now: f64) -> f64 {
        self.step_deadline - now
    }

    /// Arm the deadline for a fresh step
    pub fn arm_step(&mut self, now: f64) {
        self.step_deadline = now + self.time_per_step;
        self.warned = false;
    }

    /// Drop level state and return to the menu, keeping the difficulty
    pub fn reset_to_menu(&mut self) {
        let difficulty_index = self.difficulty_index;
        *self = Self::new(difficulty_index);
    }
}
