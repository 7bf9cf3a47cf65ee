use common::games::tictactoe::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Place(Position),
    Quit,
}

/// Parses a line like `2 3` or `2,3` (1-based row and column) or `q`.
///
/// Only the syntax is checked here; bounds and occupancy are the game's call.
pub fn parse_command(line: &str) -> Result<PlayerCommand, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(PlayerCommand::Quit);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err("Enter a row and a column, e.g. `2 3`, or `q` to quit".to_string());
    };

    let row = parse_coordinate(row, "row")?;
    let col = parse_coordinate(col, "column")?;
    Ok(PlayerCommand::Place(Position::new(row - 1, col - 1)))
}

fn parse_coordinate(value: &str, name: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err(format!("The {} number starts at 1", name)),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("`{}` is not a valid {} number", value, name)),
    }
}
