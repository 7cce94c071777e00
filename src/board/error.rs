//! Error types for board construction and parsing.

use std::fmt;

/// Error type for piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must describe exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// A row describes more than 8 files
    RowTooLong { row: usize, files: usize },
    /// A row describes fewer than 8 files
    RowTooShort { row: usize, files: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::RowTooLong { row, files } => {
                write!(f, "Too many files ({files}) in row {row}")
            }
            PlacementError::RowTooShort { row, files } => {
                write!(f, "Too few files ({files}) in row {row}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be exactly 4 ASCII characters
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinates outside 0-7
    OutOfBounds { x: usize, y: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { x, y } => {
                write!(f, "Square ({x}, {y}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
