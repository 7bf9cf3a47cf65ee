use std::io::Write;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{GameOutcome, TicTacToeGameState};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::input::{PlayerCommand, parse_command};
use crate::render::{line_cells, player_label, render_board};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    Finished(GameOutcome),
    Quit,
}

/// Drives one game on the terminal until it ends, the player quits or stdin closes.
///
/// Computer turns wait `computer_delay` before moving; Ctrl+C during any wait quits.
pub async fn run_tictactoe_game(
    mut game: TicTacToeGameState,
    rng: &mut SessionRng,
    computer_delay: Duration,
) -> Result<GameEnd, String> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ruleset = *game.ruleset();
    let mode = game.mode();

    log!(
        "Game started: {}x{}, line {}, {:?}, {} moves first, seed {}",
        ruleset.width,
        ruleset.height,
        ruleset.line_length,
        mode,
        ruleset.first_mark,
        rng.seed()
    );

    while !game.is_over() {
        let highlighted: Vec<_> = game.last_move().into_iter().collect();
        println!("\n{}", render_board(game.board(), &highlighted));

        let mark = game.current_mark();
        let label = player_label(mode, &ruleset, mark);

        if game.is_computer_turn() {
            println!("{} ({}) is thinking...", label, mark);
            tokio::select! {
                _ = tokio::time::sleep(computer_delay) => {}
                _ = tokio::signal::ctrl_c() => return Ok(GameEnd::Quit),
            }

            let Some(position) = game.play_computer_turn(rng) else {
                return Err("Computer found no empty cell on an unfinished board".to_string());
            };
            log!("{} placed at ({}, {})", mark, position.row + 1, position.col + 1);
            continue;
        }

        print!("{} ({}), enter row and column: ", label, mark);
        std::io::stdout()
            .flush()
            .map_err(|e| format!("Failed to write prompt: {}", e))?;

        let line = tokio::select! {
            line = lines.next_line() => line.map_err(|e| format!("Failed to read input: {}", e))?,
            _ = tokio::signal::ctrl_c() => return Ok(GameEnd::Quit),
        };
        let Some(line) = line else {
            log!("Input closed, leaving the game");
            return Ok(GameEnd::Quit);
        };

        match parse_command(&line) {
            Ok(PlayerCommand::Quit) => return Ok(GameEnd::Quit),
            Ok(PlayerCommand::Place(position)) => {
                if game.place_mark(position) {
                    log!("{} placed at ({}, {})", mark, position.row + 1, position.col + 1);
                } else {
                    println!("That cell is not available, try another one.");
                    log!(
                        "Rejected move by {} at ({}, {})",
                        mark,
                        position.row + 1,
                        position.col + 1
                    );
                }
            }
            Err(message) => println!("{}", message),
        }
    }

    let highlighted = game.winning_line().map(|line| line_cells(&line)).unwrap_or_default();
    println!("\n{}", render_board(game.board(), &highlighted));
    println!("Game over. {}", describe_outcome(&game));

    log!("Game finished after {} moves: {:?}", game.turn().moves_so_far, game.outcome());
    Ok(GameEnd::Finished(game.outcome().clone()))
}

pub fn describe_outcome(game: &TicTacToeGameState) -> String {
    match game.outcome() {
        GameOutcome::Ongoing => "Game in progress.".to_string(),
        GameOutcome::Win { winner } => format!(
            "Winner: {} ({})",
            player_label(game.mode(), game.ruleset(), *winner),
            winner
        ),
        GameOutcome::Tie => "It's a tie!".to_string(),
        GameOutcome::Invalid { reason } => format!("Error: {}", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{GameMode, Mark, Position, Ruleset};

    #[test]
    fn test_describe_win_against_computer() {
        let ruleset = Ruleset::new(3, 3, 3, Mark::X);
        let mut game = TicTacToeGameState::new(ruleset, GameMode::HumanVsComputer).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(game.place_mark(Position::new(row, col)));
        }
        assert_eq!(describe_outcome(&game), "Winner: Player 1 (X)");
    }

    #[test]
    fn test_describe_tie() {
        let mut game = TicTacToeGameState::new(Ruleset::default(), GameMode::HumanVsHuman).unwrap();
        let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        for (row, col) in moves {
            assert!(game.place_mark(Position::new(row, col)));
        }
        assert_eq!(describe_outcome(&game), "It's a tie!");
    }

    #[tokio::test]
    async fn test_computer_vs_computer_runs_to_completion_without_input() {
        let ruleset = Ruleset::new(4, 4, 3, Mark::O);
        let game = TicTacToeGameState::new(ruleset, GameMode::ComputerVsComputer).unwrap();
        let mut rng = SessionRng::new(11);

        let end = run_tictactoe_game(game, &mut rng, Duration::ZERO).await.unwrap();

        assert!(matches!(
            end,
            GameEnd::Finished(GameOutcome::Win { .. } | GameOutcome::Tie)
        ));
    }
}
