//! One-shot validation of a board submitted as JSON:
//!
//! ```json
//! { "board": [["X","",""],["","O",""],["","",""]], "lineLength": 3,
//!   "playerOne": "X", "playerTwo": "O",
//!   "computerPlaying": false, "bothPlayersComputer": false }
//! ```
//!
//! Only `board` and `lineLength` are required. The board is judged without a
//! designated first player; the player fields only matter when the result is
//! `Ongoing` and the caller goes on to play.

use serde_json::Value;

use super::board::Board;
use super::types::{GameMode, GameOutcome, Mark, Ruleset};
use super::validate::{MIN_LINE_LENGTH, evaluate};

const ROWS_SAME_LENGTH: &str = "rows must have same length";
const CELL_VALUES: &str = "cells must be \"X\", \"O\" or empty";

/// Everything needed to start interactive play from declarative input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    pub ruleset: Ruleset,
    pub mode: GameMode,
    pub board: Board,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarativeResult {
    pub outcome: GameOutcome,
    /// Present only when `outcome` is `Ongoing`.
    pub setup: Option<GameSetup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarativeInput {
    pub board: Board,
    pub line_length: usize,
    pub player_one: Mark,
    pub mode: GameMode,
}

impl DeclarativeInput {
    pub fn parse(json_input: &str) -> Result<Self, String> {
        let input: Value =
            serde_json::from_str(json_input).map_err(|e| format!("Invalid JSON: {}", e))?;

        let raw_rows = input
            .get("board")
            .and_then(Value::as_array)
            .ok_or("board must be an array")?;

        let line_length = input
            .get("lineLength")
            .and_then(Value::as_f64)
            .ok_or("lineLength must be a number")?;
        if line_length < MIN_LINE_LENGTH as f64 {
            return Err(format!("lineLength must be at least {}", MIN_LINE_LENGTH));
        }
        if line_length.fract() != 0.0 {
            return Err("lineLength must be an integer".to_string());
        }

        let board = parse_board(raw_rows)?;

        let player_one = match (
            parse_player(&input, "playerOne")?,
            parse_player(&input, "playerTwo")?,
        ) {
            (Some(one), Some(two)) if one == two => {
                return Err("playerOne and playerTwo must be different marks X and O".to_string());
            }
            (Some(one), _) => one,
            (None, Some(two)) => two.opponent().unwrap_or(Mark::X),
            (None, None) => Mark::X,
        };

        let mode = GameMode::from_flags(
            parse_flag(&input, "computerPlaying")?,
            parse_flag(&input, "bothPlayersComputer")?,
        );

        Ok(Self {
            board,
            line_length: line_length as usize,
            player_one,
            mode,
        })
    }

    pub fn into_setup(self) -> GameSetup {
        GameSetup {
            ruleset: Ruleset::new(
                self.board.width(),
                self.board.height(),
                self.line_length,
                self.player_one,
            ),
            mode: self.mode,
            board: self.board,
        }
    }
}

/// Parses and judges declarative input. Malformed input becomes `Invalid`, never an error.
pub fn process_input(json_input: &str) -> DeclarativeResult {
    let input = match DeclarativeInput::parse(json_input) {
        Ok(input) => input,
        Err(reason) => {
            return DeclarativeResult {
                outcome: GameOutcome::Invalid { reason },
                setup: None,
            };
        }
    };

    let outcome = evaluate(&input.board, input.line_length, None);
    let setup = outcome.is_ongoing().then(|| input.into_setup());
    DeclarativeResult { outcome, setup }
}

fn parse_board(raw_rows: &[Value]) -> Result<Board, String> {
    let mut rows = Vec::with_capacity(raw_rows.len());
    for raw_row in raw_rows {
        rows.push(raw_row.as_array().ok_or(ROWS_SAME_LENGTH)?);
    }

    if let Some(first) = rows.first()
        && rows.iter().any(|row| row.len() != first.len())
    {
        return Err(ROWS_SAME_LENGTH.to_string());
    }

    let rows = rows
        .into_iter()
        .map(|row| row.iter().map(parse_cell).collect::<Result<Vec<_>, _>>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Board::from_rows(rows))
}

fn parse_cell(value: &Value) -> Result<Mark, String> {
    value
        .as_str()
        .and_then(|s| Mark::try_from(s).ok())
        .ok_or_else(|| CELL_VALUES.to_string())
}

/// `Ok(None)` when the field is absent, null or empty.
fn parse_player(input: &Value, field: &str) -> Result<Option<Mark>, String> {
    let invalid = || format!("{} must be \"X\" or \"O\"", field);
    match input.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => match Mark::try_from(s.as_str()) {
            Ok(mark) if mark.is_player() => Ok(Some(mark)),
            _ => Err(invalid()),
        },
        Some(_) => Err(invalid()),
    }
}

fn parse_flag(input: &Value, field: &str) -> Result<bool, String> {
    match input.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(format!("{} must be a boolean", field)),
    }
}
