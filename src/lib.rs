//! Twist Says - a rotary encoder / button / tilt memory game
//!
//! Core modules:
//! - `sim`: Deterministic game controller (state machine, sequences, timing)
//! - `platform`: Input, display and light traits plus debounced input
//! - `renderer`: Text layouts for the 128x64 panel
//! - `lights`: Indicator light effects
//! - `settings`: Hardware tuning

pub mod lights;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use lights::{Lights, PixelSink, Rgb};
pub use renderer::TextDisplay;
pub use settings::Settings;
pub use sim::{Action, Direction, Game, GamePhase};

/// Game configuration constants
pub mod consts {
    /// Levels in the ladder
    pub const LEVEL_COUNT: u32 = 10;
    /// Difficulty selected at power-on
    pub const DEFAULT_DIFFICULTY_INDEX: usize = 0;
    /// Remaining step time (seconds) that triggers the warning light
    pub const WARNING_WINDOW_SECS: f64 = 1.0;

    /// Display panel size
    pub const PANEL_WIDTH: i32 = 128;
    pub const PANEL_HEIGHT: i32 = 64;
}
