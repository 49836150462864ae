//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in as an argument, never from a clock
//! - Seeded RNG only
//! - Hardware is reached only through the `platform` traits

pub mod action;
pub mod difficulty;
pub mod game;
pub mod sequence;
pub mod state;
pub mod tick;

pub use action::{Action, Direction};
pub use difficulty::{ConfigError, DifficultyProfile, DifficultyTable, SequenceLength};
pub use game::Game;
pub use sequence::{SequenceGenerator, is_valid_sequence};
pub use state::{GamePhase, GameSession};
pub use tick::{StepOutcome, TickInput, match_step};
