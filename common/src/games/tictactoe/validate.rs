use super::board::Board;
use super::types::{GameOutcome, Mark, Ruleset};
use super::win_detector::has_line;

pub const MIN_BOARD_SIDE: usize = 3;
pub const MAX_BOARD_SIDE: usize = 10;
pub const MIN_LINE_LENGTH: usize = 3;

/// Classifies a board position.
///
/// Checks run in a fixed order and the first failure wins: board shape,
/// dimensions, line length, turn order, then lines for both marks. Without a
/// `first_mark` either mark may have started, so only the count difference is
/// checked. Turn order is re-derived from mark counts, so the result depends on
/// nothing but the arguments.
pub fn evaluate(board: &Board, line_length: usize, first_mark: Option<Mark>) -> GameOutcome {
    if let Err(reason) = check_structure(board, line_length) {
        return GameOutcome::invalid(reason);
    }

    let turn_order = match first_mark {
        Some(first_mark) => check_turn_order(board, first_mark),
        None => check_move_balance(board),
    };
    if let Err(reason) = turn_order {
        return GameOutcome::invalid(reason);
    }

    let x_wins = has_line(board, line_length, Mark::X);
    let o_wins = has_line(board, line_length, Mark::O);

    match (x_wins, o_wins) {
        (true, true) => GameOutcome::invalid("Both players cannot win simultaneously"),
        (true, false) => GameOutcome::Win { winner: Mark::X },
        (false, true) => GameOutcome::Win { winner: Mark::O },
        (false, false) if board.is_full() => GameOutcome::Tie,
        (false, false) => GameOutcome::Ongoing,
    }
}

/// [`evaluate`] with the line length and starting mark of `ruleset`.
pub fn evaluate_with(board: &Board, ruleset: &Ruleset) -> GameOutcome {
    evaluate(board, ruleset.line_length, Some(ruleset.first_mark))
}

fn check_structure(board: &Board, line_length: usize) -> Result<(), &'static str> {
    if !board.is_rectangular() {
        return Err("Invalid board structure");
    }

    let side_range = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
    if !side_range.contains(&board.width()) || !side_range.contains(&board.height()) {
        return Err("Invalid board dimensions");
    }

    let max_line_length = board.width().min(board.height());
    if !(MIN_LINE_LENGTH..=max_line_length).contains(&line_length) {
        return Err("Invalid line length");
    }

    Ok(())
}

fn check_turn_order(board: &Board, first_mark: Mark) -> Result<(), &'static str> {
    let Some(second_mark) = first_mark.opponent() else {
        return Err("First player mark must be X or O");
    };

    let first_count = board.count(first_mark);
    let second_count = board.count(second_mark);

    if second_count > 0 && first_count == 0 {
        return Err("Player one must start the game");
    }
    if second_count > first_count || first_count > second_count + 1 {
        return Err("Players take turns making moves");
    }

    Ok(())
}

fn check_move_balance(board: &Board) -> Result<(), &'static str> {
    if board.count(Mark::X).abs_diff(board.count(Mark::O)) > 1 {
        return Err("Players take turns making moves");
    }
    Ok(())
}

impl Ruleset {
    /// Configuration bounds shared by every entry point.
    pub fn validate(&self) -> Result<(), String> {
        if self.width < MIN_BOARD_SIDE || self.width > MAX_BOARD_SIDE {
            return Err(format!(
                "Field width must be between {} and {}",
                MIN_BOARD_SIDE, MAX_BOARD_SIDE
            ));
        }
        if self.height < MIN_BOARD_SIDE || self.height > MAX_BOARD_SIDE {
            return Err(format!(
                "Field height must be between {} and {}",
                MIN_BOARD_SIDE, MAX_BOARD_SIDE
            ));
        }
        if self.line_length < MIN_LINE_LENGTH {
            return Err(format!("Line length must be at least {}", MIN_LINE_LENGTH));
        }
        let min_dimension = self.width.min(self.height);
        if self.line_length > min_dimension {
            return Err(format!(
                "Line length ({}) cannot exceed minimum dimension ({})",
                self.line_length, min_dimension
            ));
        }
        if !self.first_mark.is_player() {
            return Err("First player mark must be X or O".to_string());
        }
        Ok(())
    }
}
