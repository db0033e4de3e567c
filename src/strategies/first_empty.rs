//! A strategy that takes the lowest-index empty cell, ignoring the position
//! entirely. About the weakest legal opponent there is; useful as a baseline
//! in tests and as a cheap non-searching mover.

use crate::board::{Board, Place};
use crate::interface::{Player, Strategy};

pub struct FirstEmpty;

impl Strategy for FirstEmpty {
    fn choose_move(&mut self, board: &Board, p: Player) -> Option<Place> {
        board.empty_cells().next().map(|i| Place::new(i, p))
    }
}
