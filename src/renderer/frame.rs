//! Positioned text frames
//!
//! A frame is the full contents of the panel: a list of labels at pixel
//! positions. Sinks decide how to put it on an actual screen.

use crate::consts::PANEL_WIDTH;

/// Glyph cell width of the built-in font at scale 1
pub const GLYPH_WIDTH: i32 = 6;

/// One line of text at a pixel position (y is the baseline)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub scale: u8,
}

/// A complete screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    labels: Vec<Label>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label
    pub fn text(mut self, text: impl Into<String>, x: i32, y: i32, scale: u8) -> Self {
        self.labels.push(Label {
            text: text.into(),
            x,
            y,
            scale: scale.max(1),
        });
        self
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// True if any label contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.labels.iter().any(|l| l.text.contains(needle))
    }

    /// Character-grid rendering, one string per distinct baseline.
    ///
    /// Labels are placed at column `x / GLYPH_WIDTH`; later labels on the same
    /// row overwrite earlier ones where they overlap.
    pub fn lines(&self) -> Vec<String> {
        let columns = (PANEL_WIDTH / GLYPH_WIDTH) as usize;
        let mut rows: Vec<i32> = self.labels.iter().map(|l| l.y).collect();
        rows.sort_unstable();
        rows.dedup();

        rows.into_iter()
            .map(|y| {
                let mut row: Vec<char> = Vec::new();
                for label in self.labels.iter().filter(|l| l.y == y) {
                    let start = (label.x.max(0) / GLYPH_WIDTH) as usize;
                    for (i, ch) in label.text.chars().enumerate() {
                        let col = start + i;
                        if col >= columns {
                            break;
                        }
                        if row.len() <= col {
                            row.resize(col + 1, ' ');
                        }
                        row[col] = ch;
                    }
                }
                row.into_iter().collect::<String>().trim_end().to_string()
            })
            .collect()
    }
}

/// Something that can show a frame
pub trait FrameSink {
    fn show(&mut self, frame: &Frame);
}
