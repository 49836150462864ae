//! Platform abstraction layer
//!
//! The game core only talks to hardware through these three traits:
//! - [`InputSource`]: debounced encoder/button/tilt events
//! - [`PresentationSink`]: full-screen renders
//! - [`FeedbackSink`]: indicator light cues
//!
//! Implementations own their hardware handles; there is no process-wide bus.

pub mod console;
pub mod input;
pub mod scripted;

pub use console::{ConsolePixel, ConsoleScreen};
pub use input::{Accelerometer, InputManager, InputPin};
pub use scripted::ScriptedInput;

use crate::sim::{Action, DifficultyProfile, Direction};

/// Discrete player input.
///
/// Every query is non-blocking. Turn and press are edge events consumed by the
/// query; tilt reports whatever direction is active right now. A sensor that
/// can't be read reports nothing.
pub trait InputSource {
    /// Called once at the start of every tick with the tick's timestamp
    fn begin_tick(&mut self, _now: f64) {}

    /// A knob turn was observed since the last check
    fn turned(&mut self) -> bool;

    /// A button press was observed since the last check
    fn pressed(&mut self) -> bool;

    /// Tilt currently held, if any
    fn tilt(&mut self) -> Option<Direction>;
}

/// Screen output. Every call replaces the whole screen.
pub trait PresentationSink {
    fn render_menu(&mut self, profiles: &[DifficultyProfile], selected_index: usize);

    /// `step_index` is 0-based
    fn render_step(&mut self, level: u32, step_index: usize, total_steps: usize, action: Action, label: &str);

    fn render_game_over(&mut self, level_reached: u32);

    fn render_win(&mut self);
}

/// Indicator light cues.
///
/// Flashes and the win cycle are animations advanced by [`effect_tick`];
/// none of the calls block.
///
/// [`effect_tick`]: FeedbackSink::effect_tick
pub trait FeedbackSink {
    fn effect_idle(&mut self);
    fn effect_playing(&mut self);
    fn effect_game_start(&mut self);
    fn effect_success(&mut self);
    fn effect_failure(&mut self);
    /// Start the continuous win animation
    fn effect_win_begin(&mut self);
    /// Step is about to time out
    fn effect_warning(&mut self) {}
    /// Advance any running animation
    fn effect_tick(&mut self, now: f64);
}
