//! The common types shared by the board and the search strategies.

use crate::board::{Board, Place};
use std::fmt::{Display, Formatter, Result};

/// An assessment of a board. Positive values favor X, negative favor O.
/// A draw is defined as a score of zero.
pub type Score = i32;

/// The undiscounted score of a board that X has won.
pub const WIN: Score = 10;
/// The undiscounted score of a board that O has won.
pub const LOSS: Score = -10;
/// The score of a board with no completed line.
pub const DRAW: Score = 0;

/// The two competitors. X moves first and is the maximizing side; O is the
/// minimizing side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Whether the search maximizes or minimizes on this player's turn.
    pub fn is_maximizing(self) -> bool {
        self == Player::X
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Player::X => 'X',
                Player::O => 'O',
            }
        )
    }
}

/// The result of playing a game until it finishes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Winner {
    /// The given player completed a line.
    Competitor(Player),
    /// The board filled up with no completed line.
    Draw,
}

/// Defines a method of choosing a move for the given player.
pub trait Strategy {
    fn choose_move(&mut self, board: &Board, p: Player) -> Option<Place>;
}
