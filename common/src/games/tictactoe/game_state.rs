use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::pick_empty_cell;
use super::declarative::GameSetup;
use super::types::{GameMode, GameOutcome, Mark, Position, Ruleset, WinningLine};
use super::validate::evaluate_with;
use super::win_detector::check_win_with_line;

/// Whose turn it is and how many marks have been placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub current_mark: Mark,
    pub moves_so_far: usize,
}

impl TurnState {
    pub fn new(ruleset: &Ruleset) -> Self {
        Self {
            current_mark: ruleset.first_mark,
            moves_so_far: 0,
        }
    }

    /// Turn state for continuing `board`, derived from its mark counts.
    ///
    /// `None` unless the board is an ongoing game under `ruleset`.
    pub fn resume(board: &Board, ruleset: &Ruleset) -> Option<Self> {
        if !evaluate_with(board, ruleset).is_ongoing() {
            return None;
        }

        let first_count = board.count(ruleset.first_mark);
        let second_count = board.count(ruleset.second_mark());
        let current_mark = if first_count == second_count {
            ruleset.first_mark
        } else {
            ruleset.second_mark()
        };

        Some(Self {
            current_mark,
            moves_so_far: first_count + second_count,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub outcome: GameOutcome,
    pub turn: TurnState,
}

/// Places `turn.current_mark` at `position` on a copy of `board`.
///
/// Returns `None` and changes nothing when the cell is out of bounds or taken,
/// or when `board` is not an ongoing game. The turn only passes to the other
/// mark while the game stays ongoing.
pub fn apply_move(
    board: &Board,
    turn: &TurnState,
    ruleset: &Ruleset,
    position: Position,
) -> Option<AppliedMove> {
    if !turn.current_mark.is_player() || !board.is_empty_cell(position) {
        return None;
    }
    if !evaluate_with(board, ruleset).is_ongoing() {
        return None;
    }

    let board = board.with_mark(position, turn.current_mark)?;
    let outcome = evaluate_with(&board, ruleset);

    let current_mark = if outcome.is_ongoing() {
        turn.current_mark.opponent().unwrap_or(turn.current_mark)
    } else {
        turn.current_mark
    };

    Some(AppliedMove {
        board,
        outcome,
        turn: TurnState {
            current_mark,
            moves_so_far: turn.moves_so_far + 1,
        },
    })
}

/// One interactive game: the current board plus everything needed to take the next turn.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    ruleset: Ruleset,
    mode: GameMode,
    turn: TurnState,
    outcome: GameOutcome,
    last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(ruleset: Ruleset, mode: GameMode) -> Result<Self, String> {
        ruleset.validate()?;

        let board = Board::empty(ruleset.width, ruleset.height);
        let outcome = evaluate_with(&board, &ruleset);

        Ok(Self {
            board,
            ruleset,
            mode,
            turn: TurnState::new(&ruleset),
            outcome,
            last_move: None,
        })
    }

    /// Continues play on an existing board, next mark derived from the counts.
    pub fn resume(ruleset: Ruleset, mode: GameMode, board: Board) -> Result<Self, String> {
        ruleset.validate()?;

        if board.width() != ruleset.width || board.height() != ruleset.height {
            return Err(format!(
                "Board is {}x{} but the ruleset expects {}x{}",
                board.width(),
                board.height(),
                ruleset.width,
                ruleset.height
            ));
        }

        let Some(turn) = TurnState::resume(&board, &ruleset) else {
            let reason = match evaluate_with(&board, &ruleset) {
                GameOutcome::Invalid { reason } => reason,
                _ => "the game on this board is already over".to_string(),
            };
            return Err(format!("Cannot continue this board: {}", reason));
        };

        Ok(Self {
            board,
            ruleset,
            mode,
            turn,
            outcome: GameOutcome::Ongoing,
            last_move: None,
        })
    }

    /// Fresh game from declarative input; with `resume` the submitted board is continued.
    pub fn from_setup(setup: &GameSetup, resume: bool) -> Result<Self, String> {
        if resume {
            Self::resume(setup.ruleset, setup.mode, setup.board.clone())
        } else {
            Self::new(setup.ruleset, setup.mode)
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn outcome(&self) -> &GameOutcome {
        &self.outcome
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn current_mark(&self) -> Mark {
        self.turn.current_mark
    }

    pub fn is_over(&self) -> bool {
        !self.outcome.is_ongoing()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.outcome.is_ongoing()
            && self
                .mode
                .is_computer(self.turn.current_mark, self.ruleset.first_mark)
    }

    /// Applies a move for the current mark. `false` means rejected, state unchanged.
    pub fn place_mark(&mut self, position: Position) -> bool {
        let Some(applied) = apply_move(&self.board, &self.turn, &self.ruleset, position) else {
            return false;
        };

        self.board = applied.board;
        self.outcome = applied.outcome;
        self.turn = applied.turn;
        self.last_move = Some(position);
        true
    }

    /// Plays a random empty cell when the side to move is a computer.
    pub fn play_computer_turn(&mut self, rng: &mut SessionRng) -> Option<Position> {
        if !self.is_computer_turn() {
            return None;
        }
        let position = pick_empty_cell(&self.board, rng)?;
        self.place_mark(position).then_some(position)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            GameOutcome::Win { winner } => {
                check_win_with_line(&self.board, self.ruleset.line_length, winner)
            }
            _ => None,
        }
    }
}
