//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (x, y).
///
/// `x` is the file (0 = a, 7 = h). `y` is the row counted from Black's
/// side: row 0 is rank 8 and row 7 is rank 1, so White pawns move toward
/// smaller `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (x, y)

impl Square {
    /// The origin square, also used by the stalemate sentinel move.
    pub const ORIGIN: Square = Square(0, 0);

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Square(x, y))
        } else {
            None
        }
    }

    /// False for squares built directly with coordinates past the edge.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// File index (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.0
    }

    /// Row index (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.1
    }

    /// Step by `(dx, dy)`; `None` when the target falls off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Square> {
        let x = self.0.checked_add_signed(dx)?;
        let y = self.1.checked_add_signed(dy)?;
        Square::new(x, y)
    }

    /// Squares visited walking from (but excluding) this square in one direction.
    pub fn ray(self, dx: isize, dy: isize) -> impl Iterator<Item = Square> {
        std::iter::successors(self.offset(dx, dy), move |sq| sq.offset(dx, dy))
    }

    /// Get the square's index (0-63, row-major from a8)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.1 * 8 + self.0
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx % 8, idx / 8)
    }

    /// All 64 squares in board-scan order (row-major, file-minor).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, 8 - self.1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(x, y).ok_or(SquareError::OutOfBounds { x, y })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let x = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let y = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(x, y))
    }
}
