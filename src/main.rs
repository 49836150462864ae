//! Twist Says entry point
//!
//! Runs the controller on the console. With no hardware attached a demo
//! auto-player picks a difficulty and answers each step after a short
//! reaction delay.
//!
//! Usage: `twist-says [difficulty-index] [give-up-level]`

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use twist_says::platform::{ConsolePixel, ConsoleScreen, FeedbackSink, InputSource, PresentationSink, ScriptedInput};
use twist_says::sim::{DifficultyTable, Game, GamePhase};
use twist_says::{Lights, Settings, TextDisplay};

/// Seconds the demo player waits before answering a step
const REACTION_SECS: f64 = 0.3;
/// Keep ticking this long after the game ends so the last effect plays out
const LINGER_SECS: f64 = 1.0;

/// Demo player that feeds the scripted input
struct AutoPlayer {
    difficulty: usize,
    give_up_at: Option<u32>,
    /// (level, cursor) of the step being answered
    step: Option<(u32, usize)>,
    due: f64,
}

impl AutoPlayer {
    fn new(difficulty: usize, give_up_at: Option<u32>) -> Self {
        Self {
            difficulty,
            give_up_at,
            step: None,
            due: 0.0,
        }
    }

    fn drive<P, F>(&mut self, game: &mut Game<ScriptedInput, P, F>, now: f64)
    where
        P: PresentationSink,
        F: FeedbackSink,
    {
        match game.phase() {
            GamePhase::Menu => {
                // One menu event at a time so the selection can't overshoot
                if !game.input_mut().is_idle() {
                    return;
                }
                if game.session().difficulty_index != self.difficulty {
                    game.input_mut().turn();
                } else {
                    game.input_mut().press();
                }
            }
            GamePhase::Playing => {
                let session = game.session();
                let key = (session.level, session.cursor);
                if self.give_up_at == Some(session.level) {
                    return;
                }
                if self.step != Some(key) {
                    self.step = Some(key);
                    self.due = now + REACTION_SECS;
                }
                if now >= self.due {
                    if let Some(action) = game.expected_action() {
                        log::debug!("Auto-player: {:?}", action);
                        game.input_mut().push(action);
                        self.due = f64::INFINITY;
                    }
                }
            }
            GamePhase::GameOver | GamePhase::Win => {}
        }
    }
}

fn run_ticks<I, P, F>(game: &mut Game<I, P, F>, start: Instant, until: f64, cadence: Duration)
where
    I: InputSource,
    P: PresentationSink,
    F: FeedbackSink,
{
    loop {
        let now = start.elapsed().as_secs_f64();
        if now >= until {
            break;
        }
        game.tick(now);
        std::thread::sleep(cadence);
    }
}

fn main() {
    env_logger::init();
    log::info!("Twist Says (console) starting...");

    let settings = Settings::load();
    let mut args = std::env::args().skip(1);
    let difficulty: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);
    let give_up_at: Option<u32> = args.next().and_then(|a| a.parse().ok());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(
        DifficultyTable::standard(),
        seed,
        ScriptedInput::default(),
        TextDisplay::new(ConsoleScreen::default()),
        Lights::new(ConsolePixel::default(), &settings),
    );
    let mut player = AutoPlayer::new(difficulty % game.table().len(), give_up_at);

    let cadence = Duration::from_secs_f64(settings.loop_delay);
    let start = Instant::now();

    loop {
        let now = start.elapsed().as_secs_f64();
        player.drive(&mut game, now);
        game.tick(now);

        if matches!(game.phase(), GamePhase::GameOver | GamePhase::Win) {
            break;
        }
        std::thread::sleep(cadence);
    }

    let ended = start.elapsed().as_secs_f64();
    run_ticks(&mut game, start, ended + LINGER_SECS, cadence);

    log::info!(
        "Finished in {:?} on {} at level {} ({} screens, {} light changes)",
        game.phase(),
        game.difficulty().name,
        game.session().level,
        game.display().frames_shown(),
        game.lights().pixel().writes()
    );
}
