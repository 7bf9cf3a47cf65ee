use common::games::tictactoe::{Board, GameMode, Mark, Position, Ruleset, WinningLine};

/// Text grid with 1-based row and column numbers. Highlighted cells are bracketed.
pub fn render_board(board: &Board, highlighted: &[Position]) -> String {
    let mut out = String::from("   ");
    for col in 0..board.width() {
        out.push_str(&format!("{:^3}", col + 1));
    }
    out.push('\n');

    for (row, marks) in board.rows().iter().enumerate() {
        out.push_str(&format!("{:>2} ", row + 1));
        for (col, &mark) in marks.iter().enumerate() {
            let symbol = match mark {
                Mark::Empty => ".",
                other => other.as_str(),
            };
            if highlighted.contains(&Position::new(row, col)) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
        out.push('\n');
    }
    out
}

pub fn line_cells(line: &WinningLine) -> Vec<Position> {
    let row_delta = line.end.row as isize - line.start.row as isize;
    let col_delta = line.end.col as isize - line.start.col as isize;
    let (row_step, col_step) = (row_delta.signum(), col_delta.signum());
    let len = row_delta.abs().max(col_delta.abs()) + 1;

    (0..len)
        .map(|i| {
            Position::new(
                (line.start.row as isize + i * row_step) as usize,
                (line.start.col as isize + i * col_step) as usize,
            )
        })
        .collect()
}

pub fn player_label(mode: GameMode, ruleset: &Ruleset, mark: Mark) -> &'static str {
    if mode.is_computer(mark, ruleset.first_mark) {
        "Computer"
    } else if mark == ruleset.first_mark {
        "Player 1"
    } else {
        "Player 2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_marks_and_empty_cells() {
        let board = Board::empty(3, 3)
            .with_mark(Position::new(0, 0), Mark::X)
            .unwrap()
            .with_mark(Position::new(2, 1), Mark::O)
            .unwrap();

        let rendered = render_board(&board, &[]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "    1  2  3 ");
        assert_eq!(lines[1], " 1  X  .  . ");
        assert_eq!(lines[2], " 2  .  .  . ");
        assert_eq!(lines[3], " 3  .  O  . ");
    }

    #[test]
    fn test_render_highlights() {
        let board = Board::empty(3, 3)
            .with_mark(Position::new(1, 1), Mark::X)
            .unwrap();
        let rendered = render_board(&board, &[Position::new(1, 1)]);
        assert!(rendered.contains(" 2  . [X] . "));
    }

    #[test]
    fn test_line_cells_anti_diagonal() {
        let line = WinningLine::new(Mark::O, Position::new(0, 3), Position::new(3, 0));
        assert_eq!(
            line_cells(&line),
            vec![
                Position::new(0, 3),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_player_labels() {
        let ruleset = Ruleset::new(3, 3, 3, Mark::O);
        assert_eq!(player_label(GameMode::HumanVsHuman, &ruleset, Mark::O), "Player 1");
        assert_eq!(player_label(GameMode::HumanVsHuman, &ruleset, Mark::X), "Player 2");
        assert_eq!(player_label(GameMode::HumanVsComputer, &ruleset, Mark::X), "Computer");
        assert_eq!(player_label(GameMode::ComputerVsComputer, &ruleset, Mark::O), "Computer");
    }
}
