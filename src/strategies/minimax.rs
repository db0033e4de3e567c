//! The exhaustive serial minimax search.
//!
//! One board is threaded through the whole recursion: each candidate move is
//! applied, the subtree is scored, and the move is undone before the next
//! candidate is tried, so the search needs no allocation at all.

use crate::board::{evaluate, Board, Cell, Place};
use crate::interface::{Player, Score, Strategy, DRAW, LOSS, WIN};
use std::cmp::{max, min};

/// Compute the game-theoretic value of `board` with the `maximizing` side
/// (X when true, O when false) to move.
///
/// `depth` counts the plies already played below the root of this search
/// call, and terminal scores are discounted by it: X winning at depth `d`
/// scores `10 - d`, O winning scores `-10 + d`. Shallower wins therefore
/// outrank deeper ones, and deeper losses outrank shallower ones. A full
/// board with no completed line scores 0.
///
/// The board is mutated while the search runs, but every trial move is
/// undone before returning, so the board is unchanged after the call.
pub fn minimax(board: &mut Board, depth: u8, maximizing: bool) -> Score {
    let score = evaluate(board);
    if score == WIN {
        return WIN - depth as Score;
    }
    if score == LOSS {
        return LOSS + depth as Score;
    }
    if board.is_full() {
        return DRAW;
    }
    let player = if maximizing { Player::X } else { Player::O };
    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    for i in 0..9u8 {
        if board.cell(i as usize) != Cell::Empty {
            continue;
        }
        let m = Place::new(i, player);
        m.apply(board);
        let value = minimax(board, depth + 1, !maximizing);
        m.undo(board);
        best = if maximizing { max(best, value) } else { min(best, value) };
    }
    best
}

/// A strategy that plays the move minimax scores best for the given player.
///
/// Ties go to the lowest cell index, so the choice is deterministic.
pub struct Minimax {
    prev_value: Score,
}

impl Minimax {
    pub fn new() -> Minimax {
        Minimax { prev_value: 0 }
    }

    /// The value backing the move returned by the last `choose_move`.
    pub fn root_value(&self) -> Score {
        self.prev_value
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Minimax {
    fn choose_move(&mut self, board: &Board, p: Player) -> Option<Place> {
        let mut scratch = *board;
        let mut best: Option<(Score, Place)> = None;
        for i in board.empty_cells() {
            let m = Place::new(i, p);
            m.apply(&mut scratch);
            let value = minimax(&mut scratch, 1, !p.is_maximizing());
            m.undo(&mut scratch);
            let better = match best {
                None => true,
                Some((b, _)) => {
                    if p.is_maximizing() {
                        value > b
                    } else {
                        value < b
                    }
                }
            };
            if better {
                best = Some((value, m));
            }
        }
        let (value, m) = best?;
        self.prev_value = value;
        Some(m)
    }
}
