//! The game controller
//!
//! Owns the session and drives the menu → playing → game over / win loop. A
//! host calls [`Game::tick`] at a fixed cadence with a monotonic timestamp.

use super::action::Action;
use super::difficulty::{DifficultyProfile, DifficultyTable};
use super::sequence::SequenceGenerator;
use super::state::{GamePhase, GameSession};
use super::tick::{StepOutcome, TickInput, match_step};
use crate::consts::{DEFAULT_DIFFICULTY_INDEX, WARNING_WINDOW_SECS};
use crate::platform::{FeedbackSink, InputSource, PresentationSink};

/// Gameplay controller
pub struct Game<I, P, F> {
    session: GameSession,
    table: DifficultyTable,
    generator: SequenceGenerator,
    input: I,
    display: P,
    lights: F,
}

impl<I, P, F> Game<I, P, F>
where
    I: InputSource,
    P: PresentationSink,
    F: FeedbackSink,
{
    /// Create a controller sitting in the menu.
    ///
    /// Renders the menu and sets the idle light immediately.
    pub fn new(table: DifficultyTable, seed: u64, input: I, display: P, lights: F) -> Self {
        let difficulty_index = DEFAULT_DIFFICULTY_INDEX.min(table.len() - 1);
        let mut game = Self {
            session: GameSession::new(difficulty_index),
            table,
            generator: SequenceGenerator::new(seed),
            input,
            display,
            lights,
        };
        game.show_menu();
        game.lights.effect_idle();
        game
    }

    /// Advance the game by one driver tick
    pub fn tick(&mut self, now: f64) {
        self.lights.effect_tick(now);

        let input = TickInput::poll(&mut self.input, now);

        match self.session.phase {
            GamePhase::Menu => self.update_menu(&input, now),
            GamePhase::Playing => self.update_play(&input, now),
            GamePhase::GameOver | GamePhase::Win => {
                if input.pressed {
                    self.goto_menu();
                }
            }
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Next action the player must perform, while playing
    pub fn expected_action(&self) -> Option<Action> {
        match self.session.phase {
            GamePhase::Playing => self.session.expected_action(),
            _ => None,
        }
    }

    pub fn table(&self) -> &DifficultyTable {
        &self.table
    }

    /// Currently selected difficulty
    pub fn difficulty(&self) -> &DifficultyProfile {
        self.table.profile(self.session.difficulty_index)
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn display(&self) -> &P {
        &self.display
    }

    pub fn lights(&self) -> &F {
        &self.lights
    }

    // === Menu ===

    fn update_menu(&mut self, input: &TickInput, now: f64) {
        if input.turned {
            self.session.difficulty_index = (self.session.difficulty_index + 1) % self.table.len();
            log::debug!("Difficulty -> {}", self.difficulty().name);
            self.show_menu();
        }

        if input.pressed {
            self.start_game(now);
        }
    }

    fn show_menu(&mut self) {
        self.display
            .render_menu(self.table.profiles(), self.session.difficulty_index);
    }

    fn start_game(&mut self, now: f64) {
        log::info!("Starting game on {}", self.difficulty().name);
        self.session.level = 1;
        self.lights.effect_game_start();
        self.start_level(now);
    }

    // === Levels ===

    fn start_level(&mut self, now: f64) {
        let profile = self.table.profile(self.session.difficulty_index);
        let level = self.session.level;

        self.session.sequence = self.generator.generate(profile, level);
        self.session.time_per_step = profile.time_per_step(level, self.table.level_count());
        self.session.cursor = 0;
        self.session.arm_step(now);
        self.session.phase = GamePhase::Playing;

        log::info!(
            "Level {} ({} steps, {:.2}s per step)",
            level,
            self.session.sequence.len(),
            self.session.time_per_step
        );

        self.lights.effect_playing();
        self.show_step();
    }

    fn show_step(&mut self) {
        let Some(action) = self.session.expected_action() else {
            return;
        };
        self.display.render_step(
            self.session.level,
            self.session.cursor,
            self.session.sequence.len(),
            action,
            action.label(),
        );
    }

    // === Playing ===

    fn update_play(&mut self, input: &TickInput, now: f64) {
        // Timeout wins over any input arriving on the same tick
        if now > self.session.step_deadline {
            log::info!(
                "Timeout on level {} step {} (expected {:?}, overdue by {:.2}s)",
                self.session.level,
                self.session.cursor + 1,
                self.session.expected_action(),
                now - self.session.step_deadline
            );
            self.fail();
            return;
        }

        let Some(expected) = self.session.expected_action() else {
            return;
        };

        match match_step(expected, input) {
            StepOutcome::Matched => self.step_success(now),
            StepOutcome::Pending => {
                if !self.session.warned && self.session.remaining(now) < WARNING_WINDOW_SECS {
                    self.session.warned = true;
                    log::debug!("{:.2}s left for {:?}", self.session.remaining(now), expected);
                    self.lights.effect_warning();
                }
            }
        }
    }

    fn step_success(&mut self, now: f64) {
        log::debug!(
            "Step {}/{} matched",
            self.session.cursor + 1,
            self.session.sequence.len()
        );
        self.lights.effect_success();
        self.session.cursor += 1;

        if !self.session.level_complete() {
            if self.session.warned {
                self.lights.effect_playing();
            }
            self.session.arm_step(now);
            self.show_step();
            return;
        }

        log::info!("Level {} complete", self.session.level);
        if self.session.level >= self.table.level_count() {
            self.win();
        } else {
            self.session.level += 1;
            self.start_level(now);
        }
    }

    fn fail(&mut self) {
        self.session.phase = GamePhase::GameOver;
        self.display.render_game_over(self.session.level);
        self.lights.effect_failure();
    }

    fn win(&mut self) {
        log::info!("All {} levels cleared", self.table.level_count());
        self.session.phase = GamePhase::Win;
        self.display.render_win();
        self.lights.effect_win_begin();
    }

    fn goto_menu(&mut self) {
        self.session.reset_to_menu();
        self.show_menu();
        self.lights.effect_idle();
    }
}
