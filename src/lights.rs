//! Indicator light effects
//!
//! Drives a single RGB pixel. State cues (idle, playing, warning) set a steady
//! base colour; event cues play a short flash and then fall back to the base.
//! Nothing here blocks: flashes and the win cycle advance in `effect_tick`.

use crate::platform::FeedbackSink;
use crate::settings::Settings;

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const OFF: Rgb = Rgb(0, 0, 0);

    /// Scale every channel by `brightness` (0.0 - 1.0)
    pub fn scaled(self, brightness: f32) -> Rgb {
        let scale = |c: u8| (c as f32 * brightness.clamp(0.0, 1.0)).round() as u8;
        Rgb(scale(self.0), scale(self.1), scale(self.2))
    }
}

/// Pixel hardware
pub trait PixelSink {
    fn fill(&mut self, color: Rgb);
}

pub const IDLE_COLOR: Rgb = Rgb(0, 0, 40);
pub const PLAYING_COLOR: Rgb = Rgb(30, 30, 30);
pub const WARNING_COLOR: Rgb = Rgb(40, 40, 0);

/// Win animation palette: red, orange, yellow, green, cyan, blue, purple
pub const WIN_PALETTE: [Rgb; 7] = [
    Rgb(80, 0, 0),
    Rgb(80, 40, 0),
    Rgb(80, 80, 0),
    Rgb(0, 80, 0),
    Rgb(0, 40, 80),
    Rgb(0, 0, 80),
    Rgb(50, 0, 80),
];

/// Short flash effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashEffect {
    GameStart,
    Success,
    Failure,
}

/// Colour and timing of a flash
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashPattern {
    pub color: Rgb,
    pub times: u32,
    pub on: f64,
    pub off: f64,
}

impl FlashEffect {
    pub fn pattern(&self) -> FlashPattern {
        match self {
            FlashEffect::GameStart => FlashPattern {
                color: Rgb(0, 50, 0),
                times: 2,
                on: 0.1,
                off: 0.1,
            },
            FlashEffect::Success => FlashPattern {
                color: Rgb(0, 80, 0),
                times: 3,
                on: 0.08,
                off: 0.05,
            },
            FlashEffect::Failure => FlashPattern {
                color: Rgb(80, 0, 0),
                times: 3,
                on: 0.1,
                off: 0.05,
            },
        }
    }
}

impl FlashPattern {
    pub fn duration(&self) -> f64 {
        (self.on + self.off) * self.times as f64
    }

    /// Colour `elapsed` seconds in, or `None` once finished
    pub fn color_at(&self, elapsed: f64) -> Option<Rgb> {
        if elapsed >= self.duration() {
            return None;
        }
        let phase = elapsed % (self.on + self.off);
        Some(if phase < self.on { self.color } else { Rgb::OFF })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Animation {
    Steady,
    /// `started` is stamped on the first tick after the cue
    Flash {
        pattern: FlashPattern,
        started: Option<f64>,
    },
    Win {
        index: usize,
        last_change: Option<f64>,
    },
}

/// [`FeedbackSink`] for a single RGB indicator
pub struct Lights<S> {
    pixel: S,
    brightness: f32,
    win_interval: f64,
    base: Rgb,
    animation: Animation,
    /// Last colour written, before brightness
    shown: Option<Rgb>,
}

impl<S: PixelSink> Lights<S> {
    pub fn new(pixel: S, settings: &Settings) -> Self {
        let mut lights = Self {
            pixel,
            brightness: settings.brightness.clamp(0.0, 1.0),
            win_interval: settings.win_color_interval,
            base: Rgb::OFF,
            animation: Animation::Steady,
            shown: None,
        };
        lights.show(Rgb::OFF);
        lights
    }

    /// Colour currently on the pixel, before brightness
    pub fn current(&self) -> Rgb {
        self.shown.unwrap_or(Rgb::OFF)
    }

    pub fn is_animating(&self) -> bool {
        self.animation != Animation::Steady
    }

    pub fn pixel(&self) -> &S {
        &self.pixel
    }

    /// Change the steady colour. Cancels the win cycle; a running flash
    /// finishes first and then settles on the new base.
    fn set_base(&mut self, color: Rgb) {
        self.base = color;
        match self.animation {
            Animation::Flash { .. } => {}
            Animation::Steady | Animation::Win { .. } => {
                self.animation = Animation::Steady;
                self.show(color);
            }
        }
    }

    fn flash(&mut self, effect: FlashEffect) {
        let pattern = effect.pattern();
        self.animation = Animation::Flash {
            pattern,
            started: None,
        };
        self.show(pattern.color);
    }

    fn show(&mut self, color: Rgb) {
        if self.shown == Some(color) {
            return;
        }
        self.shown = Some(color);
        self.pixel.fill(color.scaled(self.brightness));
    }
}

impl<S: PixelSink> FeedbackSink for Lights<S> {
    fn effect_idle(&mut self) {
        self.set_base(IDLE_COLOR);
    }

    fn effect_playing(&mut self) {
        self.set_base(PLAYING_COLOR);
    }

    fn effect_warning(&mut self) {
        self.set_base(WARNING_COLOR);
    }

    fn effect_game_start(&mut self) {
        self.flash(FlashEffect::GameStart);
    }

    fn effect_success(&mut self) {
        self.flash(FlashEffect::Success);
    }

    fn effect_failure(&mut self) {
        // Dark after the red flash until the player returns to the menu
        self.base = Rgb::OFF;
        self.flash(FlashEffect::Failure);
    }

    fn effect_win_begin(&mut self) {
        self.animation = Animation::Win {
            index: 0,
            last_change: None,
        };
        self.show(WIN_PALETTE[0]);
    }

    fn effect_tick(&mut self, now: f64) {
        match &mut self.animation {
            Animation::Steady => {}
            Animation::Flash { pattern, started } => {
                let pattern = *pattern;
                let start = *started.get_or_insert(now);
                match pattern.color_at(now - start) {
                    Some(color) => self.show(color),
                    None => {
                        self.animation = Animation::Steady;
                        self.show(self.base);
                    }
                }
            }
            Animation::Win { index, last_change } => {
                let last = *last_change.get_or_insert(now);
                if now - last >= self.win_interval {
                    *index = (*index + 1) % WIN_PALETTE.len();
                    *last_change = Some(now);
                    let color = WIN_PALETTE[*index];
                    self.show(color);
                }
            }
        }
    }
}
