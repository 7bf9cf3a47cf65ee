use super::board::Board;
use super::types::{Mark, Position, WinningLine};

// (row step, col step): horizontal, vertical, diagonal, anti-diagonal.
// Every line is found from its first cell, so only the positive direction is scanned.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub fn has_line(board: &Board, line_length: usize, mark: Mark) -> bool {
    check_win_with_line(board, line_length, mark).is_some()
}

/// First run of exactly `line_length` cells of `mark`, scanning cells in row-major order.
pub fn check_win_with_line(board: &Board, line_length: usize, mark: Mark) -> Option<WinningLine> {
    if line_length == 0 || !mark.is_player() {
        return None;
    }

    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell != mark {
                continue;
            }

            let start = Position::new(row, col);
            for direction in DIRECTIONS {
                if let Some(end) = line_end(board, start, direction, line_length, mark) {
                    return Some(WinningLine::new(mark, start, end));
                }
            }
        }
    }

    None
}

fn line_end(
    board: &Board,
    start: Position,
    (row_step, col_step): (isize, isize),
    line_length: usize,
    mark: Mark,
) -> Option<Position> {
    let mut end = start;
    for i in 0..line_length as isize {
        let row = usize::try_from(start.row as isize + i * row_step).ok()?;
        let col = usize::try_from(start.col as isize + i * col_step).ok()?;
        end = Position::new(row, col);
        if board.get(end)? != mark {
            return None;
        }
    }
    Some(end)
}
