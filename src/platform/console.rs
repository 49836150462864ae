//! Console stand-ins for the OLED panel and the indicator pixel

use crate::lights::{PixelSink, Rgb};
use crate::renderer::{Frame, FrameSink};

/// Prints each frame to stdout, boxed to the panel width
#[derive(Debug, Default)]
pub struct ConsoleScreen {
    last: Option<Frame>,
}

impl ConsoleScreen {
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }
}

impl FrameSink for ConsoleScreen {
    fn show(&mut self, frame: &Frame) {
        if self.last.as_ref() == Some(frame) {
            return;
        }
        println!("+{}+", "-".repeat(23));
        for line in frame.lines() {
            println!("| {:<21} |", line);
        }
        println!("+{}+", "-".repeat(23));
        self.last = Some(frame.clone());
    }
}

/// Logs colour changes of the indicator
#[derive(Debug, Default)]
pub struct ConsolePixel {
    writes: u64,
}

impl ConsolePixel {
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl PixelSink for ConsolePixel {
    fn fill(&mut self, color: Rgb) {
        self.writes += 1;
        log::debug!("light rgb({}, {}, {})", color.0, color.1, color.2);
    }
}
