//! Randomized action sequences
//!
//! Deterministic for a given seed: the generator owns its own `Pcg32`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::action::{Action, Direction};
use super::difficulty::DifficultyProfile;

/// Draws fresh sequences for each level
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    rng: Pcg32,
}

impl SequenceGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generate the sequence for `level` (1-based) of `profile`.
    ///
    /// Actions are drawn uniformly from [`Action::ALL`]. A tilt that equals
    /// the last tilt drawn so far is redrawn, so the same direction never
    /// appears twice in a row.
    pub fn generate(&mut self, profile: &DifficultyProfile, level: u32) -> Vec<Action> {
        let length = profile.sequence_length(level);
        let mut sequence = Vec::with_capacity(length);
        let mut last_tilt: Option<Direction> = None;

        for _ in 0..length {
            let mut action = self.draw();
            while action.direction().is_some() && action.direction() == last_tilt {
                action = self.draw();
            }

            if let Some(dir) = action.direction() {
                last_tilt = Some(dir);
            }
            sequence.push(action);
        }

        log::debug!("Generated level {} sequence for {}: {:?}", level, profile.name, sequence);
        sequence
    }

    fn draw(&mut self) -> Action {
        Action::ALL[self.rng.random_range(0..Action::ALL.len())]
    }
}

/// True if no two adjacent entries are the same tilt.
///
/// Rotate and press may repeat, and a tilt may repeat once something else
/// sits between the two.
pub fn is_valid_sequence(sequence: &[Action]) -> bool {
    sequence
        .windows(2)
        .all(|pair| !(pair[0].is_directional() && pair[0] == pair[1]))
}
