use crate::games::SessionRng;
use super::board::Board;
use super::types::Position;

/// Uniformly random empty cell, `None` on a full board.
pub fn pick_empty_cell(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}
