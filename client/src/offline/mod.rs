mod tictactoe_runner;

pub use tictactoe_runner::{GameEnd, run_tictactoe_game};
