//! A strategy that randomly chooses a move, for use in tests.

use crate::board::{Board, Place};
use crate::interface::{Player, Strategy};
use rand::Rng;

pub struct Random {
    rng: rand::rngs::ThreadRng,
}

impl Random {
    pub fn new() -> Random {
        Random { rng: rand::thread_rng() }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Random {
    fn choose_move(&mut self, board: &Board, p: Player) -> Option<Place> {
        let moves: Vec<Place> = board.empty_cells().map(|i| Place::new(i, p)).collect();
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.gen_range(0..moves.len())])
        }
    }
}
