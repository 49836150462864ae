//! Debounced encoder, button and tilt input
//!
//! Turns raw pin levels and accelerometer readings into the discrete events
//! the game consumes. Pins are sampled once per tick in `begin_tick`; edges are
//! latched until the matching query consumes them.

use super::InputSource;
use crate::settings::Settings;
use crate::sim::Direction;

/// A digital input line. `None` means the read failed.
pub trait InputPin {
    /// `Some(true)` when the line is high
    fn read(&mut self) -> Option<bool>;
}

/// Three-axis accelerometer in m/s². `None` means the read failed.
pub trait Accelerometer {
    fn acceleration(&mut self) -> Option<[f32; 3]>;
}

/// Map a calibrated x/y reading to a tilt direction.
///
/// The x axis wins over y when both exceed the threshold.
pub fn classify_tilt(x: f32, y: f32, threshold: f32) -> Option<Direction> {
    if x > threshold {
        Some(Direction::Right)
    } else if x < -threshold {
        Some(Direction::Left)
    } else if y > threshold {
        Some(Direction::Forward)
    } else if y < -threshold {
        Some(Direction::Backward)
    } else {
        None
    }
}

/// Edge latch with a minimum spacing between accepted edges
#[derive(Debug, Clone)]
struct Debounced {
    last_level: Option<bool>,
    last_accepted: f64,
    window: f64,
    pending: bool,
}

impl Debounced {
    fn new(window: f64) -> Self {
        Self {
            last_level: None,
            last_accepted: f64::NEG_INFINITY,
            window,
            pending: false,
        }
    }

    /// Feed one sample; `is_edge` decides which transitions count
    fn sample(&mut self, level: Option<bool>, now: f64, is_edge: impl Fn(bool, bool) -> bool) {
        // A failed read leaves the previous level in place
        let Some(level) = level else { return };

        if let Some(prev) = self.last_level {
            if is_edge(prev, level) && now - self.last_accepted > self.window {
                self.last_accepted = now;
                self.pending = true;
            }
        }
        self.last_level = Some(level);
    }

    fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Debounced [`InputSource`] over owned hardware handles
pub struct InputManager<C, B, A> {
    encoder_clk: C,
    button: B,
    accel: A,
    turn: Debounced,
    press: Debounced,
    accel_threshold: f32,
    /// Rest offset for x and y
    accel_offset: [f32; 2],
}

impl<C, B, A> InputManager<C, B, A>
where
    C: InputPin,
    B: InputPin,
    A: Accelerometer,
{
    /// Take ownership of the pins and calibrate the accelerometer.
    ///
    /// The device should be lying flat while this runs.
    pub fn new(encoder_clk: C, button: B, accel: A, settings: &Settings) -> Self {
        let mut manager = Self {
            encoder_clk,
            button,
            accel,
            turn: Debounced::new(settings.turn_debounce),
            press: Debounced::new(settings.button_debounce),
            accel_threshold: settings.accel_threshold,
            accel_offset: [0.0; 2],
        };
        manager.calibrate(settings.calibration_samples);
        manager
    }

    /// Average `samples` readings to find the rest offset of x and y
    pub fn calibrate(&mut self, samples: u32) {
        let mut sum = [0.0f32; 2];
        let mut count = 0u32;
        for _ in 0..samples {
            if let Some([x, y, _]) = self.accel.acceleration() {
                sum[0] += x;
                sum[1] += y;
                count += 1;
            }
        }

        if count == 0 {
            if samples > 0 {
                log::warn!("Accelerometer calibration got no readings, assuming level");
            }
            self.accel_offset = [0.0; 2];
            return;
        }

        self.accel_offset = [sum[0] / count as f32, sum[1] / count as f32];
        log::info!(
            "Accelerometer calibrated from {} samples: offset x={:.2} y={:.2}",
            count,
            self.accel_offset[0],
            self.accel_offset[1]
        );
    }

    pub fn accel_offset(&self) -> [f32; 2] {
        self.accel_offset
    }
}

impl<C, B, A> InputSource for InputManager<C, B, A>
where
    C: InputPin,
    B: InputPin,
    A: Accelerometer,
{
    fn begin_tick(&mut self, now: f64) {
        // One detent per falling CLK edge; direction doesn't matter
        self.turn.sample(self.encoder_clk.read(), now, |prev, level| prev && !level);
        // Button pulls low when pressed
        self.press.sample(self.button.read(), now, |prev, level| prev && !level);
    }

    fn turned(&mut self) -> bool {
        self.turn.take()
    }

    fn pressed(&mut self) -> bool {
        self.press.take()
    }

    fn tilt(&mut self) -> Option<Direction> {
        let [x, y, _] = self.accel.acceleration()?;
        classify_tilt(
            x - self.accel_offset[0],
            y - self.accel_offset[1],
            self.accel_threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakePin(Rc<Cell<Option<bool>>>);

    impl FakePin {
        fn high() -> Self {
            Self(Rc::new(Cell::new(Some(true))))
        }
        fn set(&self, level: Option<bool>) {
            self.0.set(level);
        }
    }

    impl InputPin for FakePin {
        fn read(&mut self) -> Option<bool> {
            self.0.get()
        }
    }

    #[derive(Clone, Default)]
    struct FakeAccel(Rc<Cell<Option<[f32; 3]>>>);

    impl FakeAccel {
        fn at(reading: [f32; 3]) -> Self {
            Self(Rc::new(Cell::new(Some(reading))))
        }
        fn set(&self, reading: Option<[f32; 3]>) {
            self.0.set(reading);
        }
    }

    impl Accelerometer for FakeAccel {
        fn acceleration(&mut self) -> Option<[f32; 3]> {
            self.0.get()
        }
    }

    struct Rig {
        clk: FakePin,
        button: FakePin,
        accel: FakeAccel,
        input: InputManager<FakePin, FakePin, FakeAccel>,
    }

    fn rig() -> Rig {
        let clk = FakePin::high();
        let button = FakePin::high();
        let accel = FakeAccel::at([0.0, 0.0, 9.8]);
        let input = InputManager::new(clk.clone(), button.clone(), accel.clone(), &Settings::default());
        Rig {
            clk,
            button,
            accel,
            input,
        }
    }

    #[test]
    fn test_classify_tilt() {
        assert_eq!(classify_tilt(7.0, 0.0, 6.0), Some(Direction::Right));
        assert_eq!(classify_tilt(-7.0, 0.0, 6.0), Some(Direction::Left));
        assert_eq!(classify_tilt(0.0, 7.0, 6.0), Some(Direction::Forward));
        assert_eq!(classify_tilt(0.0, -7.0, 6.0), Some(Direction::Backward));
        assert_eq!(classify_tilt(7.0, 7.0, 6.0), Some(Direction::Right));
        assert_eq!(classify_tilt(5.9, -5.9, 6.0), None);
    }

    #[test]
    fn test_press_is_edge_triggered_and_debounced() {
        let mut r = rig();
        r.input.begin_tick(0.0);
        assert!(!r.input.pressed());

        r.button.set(Some(false));
        r.input.begin_tick(1.0);
        assert!(r.input.pressed());
        // Consumed, and holding the button doesn't repeat
        assert!(!r.input.pressed());
        r.input.begin_tick(2.0);
        assert!(!r.input.pressed());

        // Bounce inside the debounce window is dropped
        r.button.set(Some(true));
        r.input.begin_tick(2.05);
        r.button.set(Some(false));
        r.input.begin_tick(2.1);
        assert!(r.input.pressed());
        r.button.set(Some(true));
        r.input.begin_tick(2.15);
        r.button.set(Some(false));
        r.input.begin_tick(2.2);
        assert!(!r.input.pressed());
    }

    #[test]
    fn test_turn_on_falling_clk_edge() {
        let mut r = rig();
        r.input.begin_tick(0.0);
        assert!(!r.input.turned());

        r.clk.set(Some(false));
        r.input.begin_tick(1.0);
        assert!(r.input.turned());

        // Too soon after the last turn
        r.clk.set(Some(true));
        r.input.begin_tick(1.05);
        r.clk.set(Some(false));
        r.input.begin_tick(1.1);
        assert!(!r.input.turned());

        r.clk.set(Some(true));
        r.input.begin_tick(1.4);
        r.clk.set(Some(false));
        r.input.begin_tick(1.5);
        assert!(r.input.turned());
    }

    #[test]
    fn test_slow_detent_is_one_turn() {
        let mut r = rig();
        r.input.begin_tick(0.0);

        r.clk.set(Some(false));
        r.input.begin_tick(1.0);
        assert!(r.input.turned());

        // Rising edge of the same detent, well past the debounce window
        r.clk.set(Some(true));
        r.input.begin_tick(1.2);
        assert!(!r.input.turned());
    }

    #[test]
    fn test_unreadable_pins_are_silent() {
        let mut r = rig();
        r.input.begin_tick(0.0);
        r.button.set(None);
        r.clk.set(None);
        r.input.begin_tick(1.0);
        assert!(!r.input.pressed());
        assert!(!r.input.turned());

        // Coming back at the old level is not an edge
        r.button.set(Some(true));
        r.input.begin_tick(2.0);
        assert!(!r.input.pressed());
    }

    #[test]
    fn test_tilt_uses_calibrated_offset() {
        let clk = FakePin::high();
        let button = FakePin::high();
        let accel = FakeAccel::at([1.5, -0.5, 9.8]);
        let mut input = InputManager::new(clk, button, accel.clone(), &Settings::default());
        assert_eq!(input.accel_offset(), [1.5, -0.5]);

        // 7.0 raw is only 5.5 past rest
        accel.set(Some([7.0, 0.0, 9.8]));
        assert_eq!(input.tilt(), None);
        accel.set(Some([8.0, 0.0, 9.8]));
        assert_eq!(input.tilt(), Some(Direction::Right));
        accel.set(Some([0.0, -7.0, 9.8]));
        assert_eq!(input.tilt(), Some(Direction::Backward));
    }

    #[test]
    fn test_unreadable_accelerometer_is_no_tilt() {
        let mut r = rig();
        r.accel.set(None);
        assert_eq!(r.input.tilt(), None);

        r.input.calibrate(10);
        assert_eq!(r.input.accel_offset(), [0.0, 0.0]);
    }
}
