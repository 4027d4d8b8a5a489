use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Side length of the grid.
pub const SIZE: usize = 9;

/// Side length of a 3×3 box.
const BOX_SIZE: usize = 3;

/// A (row, column) pair, each in 0..9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Top-left cell of the 3×3 box containing this position.
    pub fn box_origin(&self) -> Position {
        Position::new(
            (self.row / BOX_SIZE) * BOX_SIZE,
            (self.col / BOX_SIZE) * BOX_SIZE,
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}

/// Rejected puzzle input, reported at construction before any solving.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) holds {value}, expected a digit in 0..=9")]
    ValueOutOfRange { row: usize, col: usize, value: u8 },
    #[error("puzzle string has {len} characters, expected 81")]
    BadLength { len: usize },
    #[error("puzzle string has invalid character {ch:?} at index {index}")]
    BadCharacter { index: usize, ch: char },
}

/// A 9×9 Sudoku grid. 0 denotes an empty cell.
///
/// The board records which cells were non-zero at load time (the givens);
/// the solving logic never consults that mask, but renderers use it to
/// distinguish original digits from solver-inserted ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[u8; SIZE]; SIZE],
    givens: [[bool; SIZE]; SIZE],
}

impl Board {
    /// Build a board from a literal 9×9 array. Every non-zero cell becomes
    /// a given. Fails if any value is outside 0..=9.
    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> Result<Self, BoardError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value > 9 {
                    return Err(BoardError::ValueOutOfRange { row, col, value });
                }
            }
        }
        let givens = rows.map(|cells| cells.map(|v| v != 0));
        Ok(Self { cells: rows, givens })
    }

    /// Parse the compact 81-character form, row-major, `0` or `.` = empty.
    pub fn from_string(s: &str) -> Result<Self, BoardError> {
        let len = s.chars().count();
        if len != SIZE * SIZE {
            return Err(BoardError::BadLength { len });
        }
        let mut rows = [[0u8; SIZE]; SIZE];
        for (index, ch) in s.chars().enumerate() {
            rows[index / SIZE][index % SIZE] = match ch {
                '.' => 0,
                '0'..='9' => ch as u8 - b'0',
                _ => return Err(BoardError::BadCharacter { index, ch }),
            };
        }
        Self::from_rows(rows)
    }

    /// Current digit at `pos` (0 = empty).
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Overwrite the cell at `pos`. No validation; legality is the
    /// caller's responsibility via [`Board::is_valid`].
    pub fn set(&mut self, pos: Position, value: u8) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Whether the cell held a digit in the original puzzle.
    pub fn is_given(&self, pos: Position) -> bool {
        self.givens[pos.row][pos.col]
    }

    /// First empty cell in row-major order, or `None` if the board is full.
    ///
    /// The fixed scan order is the cell-selection policy: it determines
    /// which branch the search explores first and therefore the exact
    /// event sequence. Not a fewest-candidates heuristic.
    pub fn find_empty(&self) -> Option<Position> {
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == 0 {
                    return Some(Position::new(row, col));
                }
            }
        }
        None
    }

    /// Whether placing `value` (1..=9) at `pos` conflicts with no other
    /// cell in the same row, column, or 3×3 box. The cell at `pos` itself
    /// is excluded from the comparison.
    pub fn is_valid(&self, value: u8, pos: Position) -> bool {
        for col in 0..SIZE {
            if col != pos.col && self.cells[pos.row][col] == value {
                return false;
            }
        }
        for row in 0..SIZE {
            if row != pos.row && self.cells[row][pos.col] == value {
                return false;
            }
        }
        let origin = pos.box_origin();
        for row in origin.row..origin.row + BOX_SIZE {
            for col in origin.col..origin.col + BOX_SIZE {
                if (row, col) != (pos.row, pos.col) && self.cells[row][col] == value {
                    return false;
                }
            }
        }
        true
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.find_empty().is_none()
    }

    /// Snapshot of the cell values.
    pub fn rows(&self) -> [[u8; SIZE]; SIZE] {
        self.cells
    }

    /// Compact 81-character row-major form, `0` = empty.
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|v| char::from(b'0' + v))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row % BOX_SIZE == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for col in 0..SIZE {
                if col % BOX_SIZE == 0 {
                    write!(f, "| ")?;
                }
                match self.cells[row][col] {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{} ", v)?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}
