//! Difficulty profiles and the level ladder
//!
//! The table is validated once at construction; after that every lookup is
//! infallible for levels in `1..=level_count`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::LEVEL_COUNT;

/// Rejected difficulty configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("difficulty table has no profiles")]
    NoProfiles,

    #[error("level count must be at least 1")]
    NoLevels,

    #[error("profile '{name}': time_start {start} must be >= time_end {end} and time_end must be > 0")]
    InvalidTimeRange { name: String, start: f64, end: f64 },

    #[error("profile '{name}': length table has {actual} entries, expected {expected}")]
    LengthTableMismatch {
        name: String,
        expected: u32,
        actual: usize,
    },

    #[error("profile '{name}': sequence length at level {level} is zero")]
    ZeroLength { name: String, level: u32 },

    #[error("profile '{name}': sequence length at level {level} overflows")]
    LengthOverflow { name: String, level: u32 },
}

/// How many steps a level asks for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SequenceLength {
    /// `base + (level - 1) * increment`
    Linear { base: u32, increment: u32 },
    /// One entry per level, level 1 first
    Table(Vec<u32>),
}

impl SequenceLength {
    /// Length for a 1-based level, saturating at `u32::MAX`
    pub fn for_level(&self, level: u32) -> u32 {
        self.checked_for_level(level).unwrap_or(u32::MAX)
    }

    /// Length for a 1-based level, `None` if a linear schedule overflows
    pub fn checked_for_level(&self, level: u32) -> Option<u32> {
        let index = level.saturating_sub(1);
        match self {
            SequenceLength::Linear { base, increment } => {
                index.checked_mul(*increment)?.checked_add(*base)
            }
            SequenceLength::Table(lengths) => {
                Some(lengths.get(index as usize).or(lengths.last()).copied().unwrap_or(0))
            }
        }
    }
}

/// A named time budget curve plus sequence-length schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Shown in the menu
    pub name: String,
    /// Seconds per step at level 1
    pub time_start: f64,
    /// Seconds per step at the last level
    pub time_end: f64,
    pub sequence_length: SequenceLength,
}

impl DifficultyProfile {
    pub fn new(name: &str, time_start: f64, time_end: f64, sequence_length: SequenceLength) -> Self {
        Self {
            name: name.to_string(),
            time_start,
            time_end,
            sequence_length,
        }
    }

    /// Number of steps for a 1-based level
    pub fn sequence_length(&self, level: u32) -> usize {
        self.sequence_length.for_level(level) as usize
    }

    /// Seconds allowed per step at `level`.
    ///
    /// Linear from `time_start` at level 1 down to `time_end` at
    /// `level_count`. A single-level ladder always uses `time_start`.
    pub fn time_per_step(&self, level: u32, level_count: u32) -> f64 {
        let progress = if level_count <= 1 {
            0.0
        } else {
            (level.saturating_sub(1) as f64 / (level_count - 1) as f64).clamp(0.0, 1.0)
        };
        self.time_start - (self.time_start - self.time_end) * progress
    }

    fn validate(&self, level_count: u32) -> Result<(), ConfigError> {
        // Written so NaN fails too
        if !(self.time_end > 0.0 && self.time_start >= self.time_end) {
            return Err(ConfigError::InvalidTimeRange {
                name: self.name.clone(),
                start: self.time_start,
                end: self.time_end,
            });
        }

        if let SequenceLength::Table(lengths) = &self.sequence_length {
            if lengths.len() != level_count as usize {
                return Err(ConfigError::LengthTableMismatch {
                    name: self.name.clone(),
                    expected: level_count,
                    actual: lengths.len(),
                });
            }
        }

        for level in 1..=level_count {
            match self.sequence_length.checked_for_level(level) {
                None => {
                    return Err(ConfigError::LengthOverflow {
                        name: self.name.clone(),
                        level,
                    });
                }
                Some(0) => {
                    return Err(ConfigError::ZeroLength {
                        name: self.name.clone(),
                        level,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

/// Ordered, validated list of difficulty profiles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyTable {
    profiles: Vec<DifficultyProfile>,
    level_count: u32,
}

impl DifficultyTable {
    /// Validate and build a table
    pub fn new(profiles: Vec<DifficultyProfile>, level_count: u32) -> Result<Self, ConfigError> {
        if profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }
        if level_count == 0 {
            return Err(ConfigError::NoLevels);
        }
        for profile in &profiles {
            profile.validate(level_count)?;
        }
        Ok(Self {
            profiles,
            level_count,
        })
    }

    /// The compiled-in Easy / Medium / Hard ladder
    pub fn standard() -> Self {
        Self {
            profiles: vec![
                DifficultyProfile::new("Easy", 5.0, 4.0, SequenceLength::Linear { base: 3, increment: 1 }),
                DifficultyProfile::new("Medium", 4.0, 3.0, SequenceLength::Linear { base: 4, increment: 1 }),
                DifficultyProfile::new("Hard", 3.0, 2.0, SequenceLength::Linear { base: 5, increment: 1 }),
            ],
            level_count: LEVEL_COUNT,
        }
    }

    pub fn profiles(&self) -> &[DifficultyProfile] {
        &self.profiles
    }

    /// Profile at `index`, wrapping out-of-range indices
    pub fn profile(&self, index: usize) -> &DifficultyProfile {
        &self.profiles[index % self.profiles.len()]
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false for a constructed table
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn level_count(&self) -> u32 {
        self.level_count
    }
}
