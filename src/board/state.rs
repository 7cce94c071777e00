use crate::zobrist::ZOBRIST;

use super::{Color, Piece, Square};

/// State needed to take back a move applied with [`Board::make_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) moved: Option<(Color, Piece)>,
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) previous_hash: u64,
}

impl UnmakeInfo {
    /// The piece removed from the destination square, if any.
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured
    }
}

/// An 8×8 grid of pieces with an incrementally maintained Zobrist hash.
///
/// Empty squares are `None`; an occupied square carries its color and piece
/// type together, so the color of a piece is always read from the square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8], // [y][x]
    pub(crate) hash: u64,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_row = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for color in Color::BOTH {
            for (x, piece) in back_row.iter().enumerate() {
                board.set_piece(Square(x, color.back_row()), color, *piece);
                board.set_piece(Square(x, color.pawn_start_row()), color, Piece::Pawn);
            }
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            hash: 0,
        }
    }

    /// Deterministic hash of the piece placement.
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !sq.is_on_board() {
            return None;
        }
        self.squares[sq.y()][sq.x()]
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place a piece, replacing whatever stood on the square. Off-board
    /// squares are ignored.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        if !sq.is_on_board() {
            return;
        }
        self.clear_square(sq);
        self.squares[sq.y()][sq.x()] = Some((color, piece));
        self.hash ^= ZOBRIST.piece(color, piece, sq);
    }

    /// Empty a square, returning what stood on it.
    pub fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        if !sq.is_on_board() {
            return None;
        }
        let previous = self.squares[sq.y()][sq.x()].take();
        if let Some((color, piece)) = previous {
            self.hash ^= ZOBRIST.piece(color, piece, sq);
        }
        previous
    }

    /// Occupied squares in board-scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Squares holding pieces of `color`, in board-scan order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter(move |(_, c, _)| *c == color)
            .map(|(sq, _, piece)| (sq, piece))
    }

    /// Locate the king of `color`; `None` when it is missing.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| *piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Recompute the hash from scratch.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        self.occupied()
            .fold(0, |hash, (sq, color, piece)| hash ^ ZOBRIST.piece(color, piece, sq))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
