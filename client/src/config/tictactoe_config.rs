use common::config::Validate;
use common::games::tictactoe::{GameMode, Mark, Ruleset};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub field_width: usize,
    pub field_height: usize,
    pub line_length: usize,
    pub first_mark: Mark,
    pub mode: GameMode,
}

impl TicTacToeConfig {
    pub fn ruleset(&self) -> Ruleset {
        Ruleset::new(
            self.field_width,
            self.field_height,
            self.line_length,
            self.first_mark,
        )
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        self.ruleset().validate()
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            field_width: 3,
            field_height: 3,
            line_length: 3,
            first_mark: Mark::X,
            mode: GameMode::HumanVsHuman,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_game() {
        let config = TicTacToeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ruleset(), Ruleset::default());
    }

    #[test]
    fn test_line_longer_than_board_is_rejected() {
        let config = TicTacToeConfig {
            field_width: 4,
            field_height: 6,
            line_length: 5,
            ..TicTacToeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_board_is_rejected() {
        let config = TicTacToeConfig {
            field_width: 12,
            ..TicTacToeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_first_mark_is_rejected() {
        let config = TicTacToeConfig {
            first_mark: Mark::Empty,
            ..TicTacToeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
