//! Text display rendering
//!
//! Builds full-screen [`Frame`]s for each game screen and hands them to a
//! [`FrameSink`] (an OLED driver, or the console in the native demo).

pub mod frame;
pub mod screens;

pub use frame::{Frame, FrameSink, Label};

use crate::platform::PresentationSink;
use crate::sim::{Action, DifficultyProfile};

/// [`PresentationSink`] that lays out text screens
pub struct TextDisplay<S> {
    sink: S,
    frames_shown: u64,
}

impl<S: FrameSink> TextDisplay<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            frames_shown: 0,
        }
    }

    /// Show up to three lines of free text (debugging)
    pub fn show_text(&mut self, line1: &str, line2: &str, line3: &str) {
        self.show(screens::text(line1, line2, line3));
    }

    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn show(&mut self, frame: Frame) {
        self.frames_shown += 1;
        self.sink.show(&frame);
    }
}

impl<S: FrameSink> PresentationSink for TextDisplay<S> {
    fn render_menu(&mut self, profiles: &[DifficultyProfile], selected_index: usize) {
        self.show(screens::menu(profiles, selected_index));
    }

    fn render_step(&mut self, level: u32, step_index: usize, total_steps: usize, action: Action, label: &str) {
        self.show(screens::step(level, step_index, total_steps, action, label));
    }

    fn render_game_over(&mut self, level_reached: u32) {
        self.show(screens::game_over(level_reached));
    }

    fn render_win(&mut self) {
        self.show(screens::win());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;

    #[derive(Default)]
    struct Capture {
        frames: Vec<Frame>,
    }

    impl FrameSink for Capture {
        fn show(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }
    }

    #[test]
    fn test_every_render_replaces_the_frame() {
        let mut display = TextDisplay::new(Capture::default());
        display.render_step(2, 1, 5, Action::Tilt(Direction::Backward), "BACK");
        display.render_game_over(2);
        display.render_win();
        display.show_text("debug", "", "");

        assert_eq!(display.frames_shown(), 4);
        let frames = &display.sink().frames;
        assert!(frames[0].contains("Step 2/5"));
        assert!(frames[0].labels().iter().any(|l| l.text == "v"));
        assert!(!frames[1].contains("Step"));
        assert!(frames[2].contains("YOU WIN!"));
        assert_eq!(frames[3].lines(), vec!["debug"]);
    }
}
