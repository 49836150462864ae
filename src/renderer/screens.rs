//! Screen layouts for the 128x64 panel

use super::frame::{Frame, GLYPH_WIDTH, Label};
use crate::consts::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::sim::{Action, DifficultyProfile, Direction};

const MENU_START_Y: i32 = 30;
const MENU_LINE_SPACING: i32 = 12;
/// Left margin on the step screen, leaves room for the left-tilt hint
const STEP_MARGIN: i32 = 12;

/// Difficulty selection
pub fn menu(profiles: &[DifficultyProfile], selected_index: usize) -> Frame {
    let mut frame = Frame::new().text("Select Difficulty", 0, 10, 1);
    for (i, profile) in profiles.iter().enumerate() {
        let prefix = if i == selected_index { ">" } else { " " };
        frame = frame.text(
            format!("{} {}", prefix, profile.name),
            0,
            MENU_START_Y + i as i32 * MENU_LINE_SPACING,
            1,
        );
    }
    frame
}

/// One step of a level. `step_index` is 0-based, shown 1-based.
pub fn step(level: u32, step_index: usize, total_steps: usize, action: Action, label: &str) -> Frame {
    let hint = action_hint(action);
    Frame::new()
        .text(format!("Level {}", level), STEP_MARGIN, 10, 1)
        .text(format!("Do: {}", label), STEP_MARGIN, 30, 1)
        .text(format!("Step {}/{}", step_index + 1, total_steps), STEP_MARGIN, 50, 1)
        .text(hint.text, hint.x, hint.y, hint.scale)
}

pub fn game_over(level_reached: u32) -> Frame {
    Frame::new()
        .text("GAME OVER", 10, 20, 2)
        .text(format!("Reached L{}", level_reached), 0, 45, 1)
        .text("Press to restart", 0, 60, 1)
}

pub fn win() -> Frame {
    Frame::new()
        .text("YOU WIN!", 10, 25, 2)
        .text("Press to restart", 0, 55, 1)
}

/// Up to three plain lines, empty lines skipped
pub fn text(line1: &str, line2: &str, line3: &str) -> Frame {
    [(line1, 15), (line2, 35), (line3, 55)]
        .into_iter()
        .filter(|(line, _)| !line.is_empty())
        .fold(Frame::new(), |frame, (line, y)| frame.text(line, 0, y, 1))
}

/// Glyph hinting where the player should act: tilts point at the matching
/// panel edge, rotate and press sit on the right of the instruction line.
pub fn action_hint(action: Action) -> Label {
    let right = PANEL_WIDTH - GLYPH_WIDTH;
    let (text, x, y) = match action {
        Action::Tilt(Direction::Left) => ("<", 0, 30),
        Action::Tilt(Direction::Right) => (">", right, 30),
        Action::Tilt(Direction::Forward) => ("^", right, 10),
        Action::Tilt(Direction::Backward) => ("v", right, PANEL_HEIGHT - 6),
        Action::Rotate => ("@", right, 30),
        Action::Press => ("*", right, 30),
    };
    Label {
        text: text.to_string(),
        x,
        y,
        scale: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DifficultyTable;

    #[test]
    fn test_menu_marks_selection() {
        let table = DifficultyTable::standard();
        let frame = menu(table.profiles(), 1);
        assert_eq!(
            frame.lines(),
            vec!["Select Difficulty", "  Easy", "> Medium", "  Hard"]
        );
        assert_eq!(frame.labels()[2].y, MENU_START_Y + MENU_LINE_SPACING);
    }

    #[test]
    fn test_step_shows_one_based_index() {
        let frame = step(4, 0, 6, Action::Press, "PRESS");
        assert!(frame.contains("Level 4"));
        assert!(frame.contains("Do: PRESS"));
        assert!(frame.contains("Step 1/6"));
    }

    #[test]
    fn test_tilt_hints_sit_on_matching_edge() {
        let left = action_hint(Action::Tilt(Direction::Left));
        let right = action_hint(Action::Tilt(Direction::Right));
        let forward = action_hint(Action::Tilt(Direction::Forward));
        let backward = action_hint(Action::Tilt(Direction::Backward));
        assert_eq!(left.x, 0);
        assert!(right.x > PANEL_WIDTH / 2);
        assert!(forward.y < backward.y);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn test_end_screens() {
        let over = game_over(7);
        assert!(over.contains("GAME OVER"));
        assert!(over.contains("Reached L7"));
        assert_eq!(over.labels()[0].scale, 2);

        let won = win();
        assert!(won.contains("YOU WIN!"));
        assert!(won.contains("Press to restart"));
    }

    #[test]
    fn test_text_skips_empty_lines() {
        let frame = text("hello", "", "world");
        assert_eq!(frame.lines(), vec!["hello", "world"]);
        assert_eq!(frame.labels()[1].y, 55);
    }
}
