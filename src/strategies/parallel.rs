//! A fork-join version of the exhaustive minimax search.
//!
//! Each child branch receives its own copy of the board, so sibling
//! subtrees can be searched concurrently on a rayon thread pool without
//! racing on shared state. All child values are joined before the parent
//! folds them into its max or min, which makes this engine return exactly
//! the same value as the serial one for every position.

use crate::board::{evaluate, Board, Place};
use crate::interface::{Player, Score, Strategy, DRAW, LOSS, WIN};
use crate::strategies::minimax::minimax;

use rayon::prelude::*;
use std::cmp::{max, min};

/// Options to use for the parallel search engine.
#[derive(Clone, Copy)]
pub struct ParallelOptions {
    num_threads: Option<usize>,
    serial_cutoff: u8,
    verbose: bool,
}

impl ParallelOptions {
    pub fn new() -> Self {
        ParallelOptions { num_threads: None, serial_cutoff: 3, verbose: false }
    }

    /// Set the total number of threads to use. Otherwise defaults to num_cpus.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// At how many remaining empty cells to stop forking and finish the
    /// subtree serially. Subtrees near the bottom are too small to be worth
    /// a task each.
    pub fn with_serial_cutoff(mut self, empty_cells: u8) -> Self {
        self.serial_cutoff = empty_cells;
        self
    }

    /// Print the value of each root move to stderr while choosing.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A strategy that plays the move minimax scores best, searching sibling
/// branches in parallel. Ties go to the lowest cell index, same as the
/// serial [`Minimax`](crate::strategies::minimax::Minimax) strategy.
pub struct ParallelMinimax {
    thread_pool: rayon::ThreadPool,
    opts: ParallelOptions,
    prev_value: Score,
}

impl ParallelMinimax {
    pub fn new(opts: ParallelOptions) -> ParallelMinimax {
        let num_threads = opts.num_threads.unwrap_or_else(num_cpus::get);
        let pool_builder = rayon::ThreadPoolBuilder::new().num_threads(num_threads);
        ParallelMinimax { thread_pool: pool_builder.build().unwrap(), opts, prev_value: 0 }
    }

    /// The value backing the move returned by the last `choose_move`.
    pub fn root_value(&self) -> Score {
        self.prev_value
    }

    /// Full-depth value of `board` with the `maximizing` side to move,
    /// computed on this engine's thread pool. The board is never mutated;
    /// every branch works on its own copy.
    pub fn search_value(&self, board: &Board, maximizing: bool) -> Score {
        self.thread_pool.install(|| self.search(board, 0, maximizing))
    }

    fn search(&self, board: &Board, depth: u8, maximizing: bool) -> Score {
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
        if board.empty_count() <= self.opts.serial_cutoff as usize {
            let mut scratch = *board;
            return minimax(&mut scratch, depth, maximizing);
        }
        let player = if maximizing { Player::X } else { Player::O };
        let moves: Vec<u8> = board.empty_cells().collect();
        // Fork: a private board copy per child. Join: collect every child
        // value before folding.
        let values: Vec<Score> = moves
            .into_par_iter()
            .map(|i| {
                let mut child = *board;
                Place::new(i, player).apply(&mut child);
                self.search(&child, depth + 1, !maximizing)
            })
            .collect();
        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        for value in values {
            best = if maximizing { max(best, value) } else { min(best, value) };
        }
        best
    }
}

impl Strategy for ParallelMinimax {
    fn choose_move(&mut self, board: &Board, p: Player) -> Option<Place> {
        let moves: Vec<Place> = board.empty_cells().map(|i| Place::new(i, p)).collect();
        if moves.is_empty() {
            return None;
        }
        let values: Vec<Score> = self.thread_pool.install(|| {
            moves
                .par_iter()
                .map(|m| {
                    let mut child = *board;
                    m.apply(&mut child);
                    self.search(&child, 1, !p.is_maximizing())
                })
                .collect()
        });
        if self.opts.verbose {
            for (m, value) in moves.iter().zip(values.iter()) {
                eprintln!("parallel minimax: {} -> {}", m, value);
            }
        }
        let mut best: Option<(Score, Place)> = None;
        for (m, value) in moves.into_iter().zip(values) {
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
