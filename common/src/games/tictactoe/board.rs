use serde::{Deserialize, Serialize};

use super::types::{Mark, Position};

/// Grid of marks, `rows[row][col]`.
///
/// A board is a value: [`Board::with_mark`] returns a new board and leaves the
/// original untouched. Shape is not enforced here, so boards read from outside
/// can be non-rectangular until the validator rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Vec<Mark>>,
}

impl Board {
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![Mark::Empty; width]; height],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Mark>>) -> Self {
        Self { rows }
    }

    #[cfg(test)]
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|&cell| Mark::try_from(cell).unwrap()).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Mark>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        !self.rows.is_empty() && width > 0 && self.rows.iter().all(|row| row.len() == width)
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    /// Copy of this board with `mark` at `pos`, or `None` when `pos` is out of bounds.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Option<Board> {
        self.get(pos)?;
        let mut rows = self.rows.clone();
        rows[pos.row][pos.col] = mark;
        Some(Board { rows })
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == mark).count())
            .sum()
    }

    pub fn is_full(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        for (row, marks) in self.rows.iter().enumerate() {
            for (col, &cell) in marks.iter().enumerate() {
                if cell == Mark::Empty {
                    cells.push(Position::new(row, col));
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_dimensions() {
        let board = Board::empty(5, 4);
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 4);
        assert!(board.is_rectangular());
        assert_eq!(board.empty_cells().len(), 20);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::empty(3, 3);
        let next = board.with_mark(Position::new(1, 2), Mark::X).unwrap();

        assert_eq!(board.get(Position::new(1, 2)), Some(Mark::Empty));
        assert_eq!(next.get(Position::new(1, 2)), Some(Mark::X));
        assert_eq!(next.count(Mark::X), 1);
    }

    #[test]
    fn test_with_mark_out_of_bounds() {
        let board = Board::empty(3, 3);
        assert!(board.with_mark(Position::new(3, 0), Mark::X).is_none());
        assert!(board.with_mark(Position::new(0, 3), Mark::X).is_none());
    }

    #[test]
    fn test_ragged_rows_are_not_rectangular() {
        let board = Board::from_strs(&[&["X", "", ""], &["", ""], &["", "", ""]]);
        assert!(!board.is_rectangular());
        assert!(!Board::from_rows(vec![]).is_rectangular());
        assert!(!Board::from_rows(vec![vec![], vec![]]).is_rectangular());
    }

    #[test]
    fn test_empty_cells_in_row_major_order() {
        let board = Board::from_strs(&[&["X", "", "O"], &["O", "X", ""], &["X", "O", "X"]]);
        assert_eq!(
            board.empty_cells(),
            vec![Position::new(0, 1), Position::new(1, 2)]
        );
        assert!(!board.is_full());
    }

    #[test]
    fn test_serializes_as_nested_string_arrays() {
        let board = Board::from_strs(&[&["X", ""], &["", "O"]]);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[["X",""],["","O"]]"#);
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
