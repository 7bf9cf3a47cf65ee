mod config;
mod input;
mod offline;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::{
    GameMode, GameOutcome, Mark, OutcomeStatus, TicTacToeGameState, process_input,
};
use common::{log, logger};
use tokio::io::AsyncReadExt;

use config::get_config_manager;
use offline::{GameEnd, run_tictactoe_game};
use render::render_board;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Human vs human
    Hvh,
    /// Human (player one) vs computer
    Hvc,
    /// Computer vs computer
    Cvc,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Hvh => GameMode::HumanVsHuman,
            ModeArg::Hvc => GameMode::HumanVsComputer,
            ModeArg::Cvc => GameMode::ComputerVsComputer,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarkArg {
    #[value(name = "X", alias = "x")]
    X,
    #[value(name = "O", alias = "o")]
    O,
}

impl From<MarkArg> for Mark {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "N x M tic-tac-toe in the terminal")]
struct Args {
    /// YAML config file (defaults to one next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    #[arg(long)]
    line_length: Option<usize>,

    /// Mark of player one, who moves first
    #[arg(long, value_enum)]
    first_mark: Option<MarkArg>,

    /// Validate a JSON board from a file, or `-` for stdin
    #[arg(long)]
    json: Option<String>,

    /// Start a game from the JSON input when it is still in play
    #[arg(long, requires = "json")]
    play: bool,

    /// Continue the submitted board instead of starting an empty one
    #[arg(long, requires = "play")]
    resume: bool,

    /// Seed for computer moves
    #[arg(long)]
    seed: Option<u64>,

    /// Computer thinking delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

async fn read_json_source(source: &str) -> Result<String, String> {
    if source == "-" {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .map_err(|e| format!("Failed to read JSON from stdin: {}", e))?;
        return Ok(content);
    }
    tokio::fs::read_to_string(source)
        .await
        .map_err(|e| format!("Failed to read JSON file {}: {}", source, e))
}

fn configured_game(args: &Args, config: &config::Config) -> Result<TicTacToeGameState, String> {
    let mut ruleset = config.tictactoe.ruleset();
    if let Some(width) = args.width {
        ruleset.width = width;
    }
    if let Some(height) = args.height {
        ruleset.height = height;
    }
    if let Some(line_length) = args.line_length {
        ruleset.line_length = line_length;
    }
    if let Some(first_mark) = args.first_mark {
        ruleset.first_mark = first_mark.into();
    }
    let mode = args.mode.map_or(config.tictactoe.mode, GameMode::from);

    TicTacToeGameState::new(ruleset, mode).map_err(|e| format!("Invalid configuration: {}", e))
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config.as_deref()).get_config()?;
    let computer_delay = Duration::from_millis(args.delay_ms.unwrap_or(config.computer_delay_ms));
    let mut rng = args.seed.map_or_else(SessionRng::from_random, SessionRng::new);

    let game = match args.json.as_deref() {
        Some(source) => {
            let text = read_json_source(source).await?;
            let result = process_input(&text);

            println!("{}", serde_json::to_string(&result.outcome.to_report())?);
            if let Some(ref setup) = result.setup {
                println!("{}", render_board(&setup.board, &[]));
            }
            log!("JSON input evaluated: {:?}", result.outcome);

            match result.setup {
                Some(setup) if args.play => TicTacToeGameState::from_setup(&setup, args.resume)?,
                _ if result.outcome.status() == OutcomeStatus::Error => {
                    return Ok(ExitCode::FAILURE);
                }
                _ => return Ok(ExitCode::SUCCESS),
            }
        }
        None => configured_game(&args, &config)?,
    };

    match run_tictactoe_game(game, &mut rng, computer_delay).await? {
        GameEnd::Finished(GameOutcome::Invalid { .. }) => Ok(ExitCode::FAILURE),
        GameEnd::Finished(_) => Ok(ExitCode::SUCCESS),
        GameEnd::Quit => {
            log!("Game abandoned");
            Ok(ExitCode::SUCCESS)
        }
    }
}
