//! Piece-placement text, the first field of a FEN record.
//!
//! Only placement is read or written: castling, en passant and move counters
//! have no counterpart in this board model. A full FEN record is accepted
//! and its trailing fields ignored.

use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse a board from FEN piece placement (`"rnbqkbnr/pppppppp/8/..."`).
    ///
    /// The first row of text is row 0 (rank 8), matching the board's `y`
    /// axis directly.
    pub fn try_from_fen(fen: &str) -> Result<Self, PlacementError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            let mut x = 0;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    x += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if x >= 8 {
                        return Err(PlacementError::RowTooLong { row: y, files: x + 1 });
                    }
                    board.set_piece(Square(x, y), color, piece);
                    x += 1;
                }
                if x > 8 {
                    return Err(PlacementError::RowTooLong { row: y, files: x });
                }
            }
            if x < 8 {
                return Err(PlacementError::RowTooShort { row: y, files: x });
            }
        }
        Ok(board)
    }

    /// Parse a board from FEN piece placement, panicking on malformed input.
    ///
    /// Intended for tests and fixed positions; use [`Board::try_from_fen`]
    /// for untrusted text.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Board::try_from_fen(fen) {
            Ok(board) => board,
            Err(err) => panic!("invalid placement '{fen}': {err}"),
        }
    }

    /// Render the piece placement as FEN text.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(72);
        for y in 0..8 {
            let mut empty = 0;
            for x in 0..8 {
                match self.piece_at(Square(x, y)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if y < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
