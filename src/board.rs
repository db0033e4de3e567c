//! The 3x3 board, its moves, and the terminal position evaluator.

use crate::interface::{Player, Score, Winner, DRAW, LOSS, WIN};
use std::default::Default;
use std::fmt::{Display, Formatter, Result};

/// One cell of the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell::Empty
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Cell::Empty => ' ',
                Cell::X => 'X',
                Cell::O => 'O',
            }
        )
    }
}

impl From<Player> for Cell {
    fn from(p: Player) -> Cell {
        match p {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

// The 8 winning lines, in the order the evaluator checks them. The order is
// the tie-break for boards with more than one completed line, which cannot
// arise from legal play but must still evaluate deterministically.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A 3x3 grid in row-major order. `Copy`, so forked search branches can take
/// private snapshots cheaply.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// An explicit position, cells given in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Board {
        Board { cells }
    }

    pub fn cell(&self, i: usize) -> Cell {
        self.cells[i]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Indices of the empty cells, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = u8> + '_ {
        (0..9u8).filter(move |&i| self.cells[i as usize] == Cell::Empty)
    }

    /// Game-end check for drivers: `None` while the game is still on.
    pub fn winner(&self) -> Option<Winner> {
        match evaluate(self) {
            WIN => Some(Winner::Competitor(Player::X)),
            LOSS => Some(Winner::Competitor(Player::O)),
            _ => {
                if self.is_full() {
                    Some(Winner::Draw)
                } else {
                    None
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board { cells: [Cell::default(); 9] }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "{} | {} | {}", self.cells[0], self.cells[1], self.cells[2])?;
        writeln!(f, "{} | {} | {}", self.cells[3], self.cells[4], self.cells[5])?;
        writeln!(f, "{} | {} | {}", self.cells[6], self.cells[7], self.cells[8])?;
        Ok(())
    }
}

/// Evaluate a position without regard to depth.
///
/// Returns [`WIN`] if X owns a completed line, [`LOSS`] if O does, and
/// [`DRAW`] otherwise. A zero means "no winner yet", not necessarily a draw;
/// callers decide separately whether moves remain.
pub fn evaluate(b: &Board) -> Score {
    for line in &LINES {
        let [x, y, z] = *line;
        let mark = b.cells[x];
        if mark != Cell::Empty && mark == b.cells[y] && mark == b.cells[z] {
            return if mark == Cell::X { WIN } else { LOSS };
        }
    }
    DRAW
}

/// A move: one player's mark placed on one empty cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Place {
    i: u8,
    mark: Cell,
}

impl Place {
    pub fn new(i: u8, p: Player) -> Place {
        Place { i, mark: Cell::from(p) }
    }

    pub fn index(&self) -> usize {
        self.i as usize
    }

    pub fn apply(&self, b: &mut Board) {
        b.cells[self.i as usize] = self.mark;
    }

    pub fn undo(&self, b: &mut Board) {
        b.cells[self.i as usize] = Cell::Empty;
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}@{}", self.mark, self.i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [u8; 9]) -> Board {
        let mut out = [Cell::Empty; 9];
        for (o, &c) in out.iter_mut().zip(cells.iter()) {
            *o = match c {
                1 => Cell::X,
                2 => Cell::O,
                _ => Cell::Empty,
            };
        }
        Board::from_cells(out)
    }

    #[test]
    fn evaluate_finds_every_line() {
        for line in &LINES {
            let mut cells = [0u8; 9];
            for &i in line {
                cells[i] = 1;
            }
            assert_eq!(evaluate(&board(cells)), WIN, "X line {:?}", line);
            for &i in line {
                cells[i] = 2;
            }
            assert_eq!(evaluate(&board(cells)), LOSS, "O line {:?}", line);
        }
    }

    #[test]
    fn evaluate_no_line_is_zero() {
        assert_eq!(evaluate(&Board::default()), DRAW);
        // Full board, no completed line.
        assert_eq!(evaluate(&board([1, 1, 2, 2, 2, 1, 1, 2, 1])), DRAW);
        // Partial game.
        assert_eq!(evaluate(&board([1, 1, 0, 2, 2, 0, 0, 0, 0])), DRAW);
    }

    #[test]
    fn evaluate_checks_lines_in_order() {
        // Two disjoint completed rows: the top row is checked first.
        assert_eq!(evaluate(&board([1, 1, 1, 0, 0, 0, 2, 2, 2])), WIN);
        assert_eq!(evaluate(&board([2, 2, 2, 0, 0, 0, 1, 1, 1])), LOSS);
        // Two disjoint completed columns: column 0 before column 1.
        assert_eq!(evaluate(&board([2, 1, 0, 2, 1, 0, 2, 1, 0])), LOSS);
    }

    #[test]
    fn apply_then_undo_restores_the_board() {
        let mut b = board([1, 1, 0, 2, 2, 0, 0, 0, 0]);
        let before = b;
        let m = Place::new(2, Player::X);
        m.apply(&mut b);
        assert_eq!(b.cell(2), Cell::X);
        assert_eq!(evaluate(&b), WIN);
        m.undo(&mut b);
        assert_eq!(b, before);
    }

    #[test]
    fn winner_reports_game_end() {
        assert_eq!(Board::default().winner(), None);
        assert_eq!(board([1, 1, 1, 2, 2, 0, 0, 0, 0]).winner(), Some(Winner::Competitor(Player::X)));
        assert_eq!(board([1, 1, 0, 2, 2, 2, 1, 0, 0]).winner(), Some(Winner::Competitor(Player::O)));
        assert_eq!(board([1, 1, 2, 2, 2, 1, 1, 2, 1]).winner(), Some(Winner::Draw));
    }

    #[test]
    fn empty_cells_ascend() {
        let b = board([1, 0, 2, 0, 0, 1, 0, 2, 0]);
        let empties: Vec<u8> = b.empty_cells().collect();
        assert_eq!(empties, vec![1, 3, 4, 6, 8]);
        assert_eq!(b.empty_count(), 5);
        assert!(!b.is_full());
    }
}
