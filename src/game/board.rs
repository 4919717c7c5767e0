//! 3x3 board state and terminal evaluation

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Player symbol; `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// The opposing symbol.
    pub fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

/// Orientation of a completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOutcome {
    /// One symbol holds a complete line.
    Win { symbol: Symbol, line: LineKind },
    /// The board is full with no complete line.
    Draw,
    /// Empty cells remain and no line is complete.
    InPlay,
}

const SIDE: u8 = 3;

/// The eight lines that decide a game.
const LINES: [(LineKind, [(usize, usize); 3]); 8] = [
    (LineKind::Row, [(0, 0), (0, 1), (0, 2)]),
    (LineKind::Row, [(1, 0), (1, 1), (1, 2)]),
    (LineKind::Row, [(2, 0), (2, 1), (2, 2)]),
    (LineKind::Column, [(0, 0), (1, 0), (2, 0)]),
    (LineKind::Column, [(0, 1), (1, 1), (2, 1)]),
    (LineKind::Column, [(0, 2), (1, 2), (2, 2)]),
    (LineKind::Diagonal, [(0, 0), (1, 1), (2, 2)]),
    (LineKind::Diagonal, [(0, 2), (1, 1), (2, 0)]),
];

/// 3x3 grid of cells. A set cell never changes for the game's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Symbol>; 3]; 3],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell state at `(row, col)`.
    pub fn cell(&self, row: u8, col: u8) -> GameResult<Option<Symbol>> {
        if row >= SIDE || col >= SIDE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(self.cells[row as usize][col as usize])
    }

    /// Place `symbol` at `(row, col)`.
    ///
    /// Fails without touching the board if the cell is out of bounds or
    /// already occupied.
    pub fn place(&mut self, row: u8, col: u8, symbol: Symbol) -> GameResult<()> {
        if self.cell(row, col)?.is_some() {
            return Err(GameError::CellOccupied { row, col });
        }
        self.cells[row as usize][col as usize] = Some(symbol);
        Ok(())
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// The completed line and its owner, if any.
    pub fn winning_line(&self) -> Option<(Symbol, LineKind)> {
        for (kind, [a, b, c]) in LINES {
            if let Some(symbol) = self.cells[a.0][a.1] {
                if self.cells[b.0][b.1] == Some(symbol) && self.cells[c.0][c.1] == Some(symbol) {
                    return Some((symbol, kind));
                }
            }
        }
        None
    }

    /// Evaluate terminal conditions.
    pub fn evaluate(&self) -> BoardOutcome {
        if let Some((symbol, line)) = self.winning_line() {
            BoardOutcome::Win { symbol, line }
        } else if self.is_full() {
            BoardOutcome::Draw
        } else {
            BoardOutcome::InPlay
        }
    }
}
