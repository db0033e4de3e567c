//! An exhaustive minimax solver for 3x3 tic-tac-toe.
//!
//! Every search runs the game tree to the bottom: no pruning, no caching.
//! Terminal scores are discounted by the ply at which they occur, so the
//! solver prefers quick wins and slow losses. Two engines are provided: a
//! serial one that mutates a single board in place and restores it on the
//! way out, and a fork-join one that gives each subtree a private board
//! copy so sibling branches can be searched concurrently on a thread pool.

pub mod board;
pub mod interface;
pub mod strategies;
pub mod util;

pub use board::{evaluate, Board, Cell, Place};
pub use interface::{Player, Score, Strategy, Winner, DRAW, LOSS, WIN};
pub use strategies::first_empty::FirstEmpty;
pub use strategies::minimax::{minimax, Minimax};
pub use strategies::parallel::{ParallelMinimax, ParallelOptions};
pub use strategies::random::Random;
