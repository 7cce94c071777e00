//! Piece-by-piece position construction, for tests and fixed setups where
//! placement text would be harder to read.
//!
//! # Example
//! ```
//! use chess_pawns::board::{BoardBuilder, Color, Piece};
//!
//! let board = BoardBuilder::new()
//!     .at("e1", Color::White, Piece::King)
//!     .at("e8", Color::Black, Piece::King)
//!     .at("a2", Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.pieces_of(Color::White).count(), 2);
//! ```

use super::{Board, Color, Piece, Square};

/// Places pieces one at a time on an initially empty (or starting) board.
///
/// A later placement on the same square replaces the earlier one.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    /// Start from an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder { board: Board::new() }
    }

    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, color, piece);
        self
    }

    /// Place a piece by algebraic square (`"e4"`).
    ///
    /// # Panics
    /// Panics if `square` is not valid algebraic notation.
    #[must_use]
    pub fn at(self, square: &str, color: Color, piece: Piece) -> Self {
        match square.parse::<Square>() {
            Ok(sq) => self.piece(sq, color, piece),
            Err(err) => panic!("{err}"),
        }
    }

    /// Empty a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear_square(square);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::new()
    }
}
