use std::fmt;

use serde::{Deserialize, Serialize};

/// Content of one cell. Serialized the way boards are written by hand: `"X"`, `"O"` or `""`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_player(&self) -> bool {
        *self != Mark::Empty
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl TryFrom<&str> for Mark {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "" => Ok(Mark::Empty),
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            other => Err(format!("Unknown mark {:?}, expected \"X\", \"O\" or \"\"", other)),
        }
    }
}

impl TryFrom<String> for Mark {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Mark::try_from(value.as_str())
    }
}

impl From<Mark> for String {
    fn from(mark: Mark) -> Self {
        mark.as_str().to_string()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

/// Fixed configuration of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ruleset {
    pub width: usize,
    pub height: usize,
    pub line_length: usize,
    pub first_mark: Mark,
}

impl Ruleset {
    pub fn new(width: usize, height: usize, line_length: usize, first_mark: Mark) -> Self {
        Self {
            width,
            height,
            line_length,
            first_mark,
        }
    }

    pub fn second_mark(&self) -> Mark {
        self.first_mark.opponent().unwrap_or(Mark::Empty)
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::new(3, 3, 3, Mark::X)
    }
}

/// Who controls each side. In `HumanVsComputer` the human is player one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
    ComputerVsComputer,
}

impl GameMode {
    pub fn from_flags(computer_playing: bool, both_players_computer: bool) -> Self {
        match (computer_playing, both_players_computer) {
            (true, true) => GameMode::ComputerVsComputer,
            (true, false) => GameMode::HumanVsComputer,
            (false, _) => GameMode::HumanVsHuman,
        }
    }

    pub fn is_computer(&self, mark: Mark, player_one: Mark) -> bool {
        match self {
            GameMode::HumanVsHuman => false,
            GameMode::HumanVsComputer => mark != player_one,
            GameMode::ComputerVsComputer => true,
        }
    }
}

/// Result of evaluating a board. `Invalid` describes malformed input, not a lost game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win { winner: Mark },
    Tie,
    Invalid { reason: String },
}

impl GameOutcome {
    pub fn invalid(reason: impl Into<String>) -> Self {
        GameOutcome::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_ongoing(&self) -> bool {
        *self == GameOutcome::Ongoing
    }

    pub fn status(&self) -> OutcomeStatus {
        match self {
            GameOutcome::Ongoing => OutcomeStatus::Play,
            GameOutcome::Win { .. } => OutcomeStatus::Win,
            GameOutcome::Tie => OutcomeStatus::Tie,
            GameOutcome::Invalid { .. } => OutcomeStatus::Error,
        }
    }

    pub fn to_report(&self) -> OutcomeReport {
        OutcomeReport {
            status: self.status(),
            winner: match self {
                GameOutcome::Win { winner } => Some(*winner),
                _ => None,
            },
            error: match self {
                GameOutcome::Invalid { reason } => Some(reason.clone()),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutcomeStatus {
    Play,
    Win,
    Tie,
    Error,
}

/// Boundary form of a [`GameOutcome`], e.g. `{"status":"WIN","winner":"O"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub status: OutcomeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Mark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
