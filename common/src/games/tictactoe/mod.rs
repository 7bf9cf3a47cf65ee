mod board;
mod bot_controller;
mod declarative;
mod game_state;
mod types;
mod validate;
mod win_detector;

pub use board::Board;
pub use bot_controller::pick_empty_cell;
pub use declarative::{DeclarativeInput, DeclarativeResult, GameSetup, process_input};
pub use game_state::{AppliedMove, TicTacToeGameState, TurnState, apply_move};
pub use types::{
    GameMode, GameOutcome, Mark, OutcomeReport, OutcomeStatus, Position, Ruleset, WinningLine,
};
pub use validate::{MAX_BOARD_SIDE, MIN_BOARD_SIDE, MIN_LINE_LENGTH, evaluate, evaluate_with};
pub use win_detector::{check_win_with_line, has_line};
