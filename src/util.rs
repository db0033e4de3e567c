//! Utility functions for testing.

use crate::board::Board;
use crate::interface::{Player, Strategy, Winner};

/// Play a complete, new game with players using the two provided strategies.
///
/// The first strategy plays X, the second O. Returns the result of the game.
pub fn battle_royale<S1, S2>(s1: &mut S1, s2: &mut S2) -> Winner
where
    S1: Strategy,
    S2: Strategy,
{
    let mut board = Board::default();
    let mut strategies: [(Player, &mut dyn Strategy); 2] = [(Player::X, s1), (Player::O, s2)];
    let mut s = 0;
    while board.winner().is_none() {
        let (p, ref mut strategy) = strategies[s];
        match strategy.choose_move(&board, p) {
            Some(m) => m.apply(&mut board),
            None => break,
        }
        s = 1 - s;
    }
    board.winner().unwrap_or(Winner::Draw)
}
