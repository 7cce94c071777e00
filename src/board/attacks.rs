//! Attack, check and checkmate detection.
//!
//! `is_attacked` answers "can any enemy piece reach this square in one
//! move" with four independent scans. Each scan stops at the first piece it
//! meets, and every probe goes through `Square::offset`, so squares off the
//! board simply contribute nothing.

use super::{Board, Color, Move, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (0, -1),
    (0, 1),
];

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

impl Board {
    /// True if a piece of the color opposing `defending` attacks `square`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, defending: Color) -> bool {
        if !square.is_on_board() {
            return false;
        }
        let enemy = defending.opponent();
        self.knight_attacks(square, enemy)
            || self.adjacent_attacks(square, defending)
            || self.ray_attacks(square, enemy, &DIAGONALS, Piece::attacks_diagonally)
            || self.ray_attacks(square, enemy, &ORTHOGONALS, Piece::attacks_straight)
    }

    fn knight_attacks(&self, square: Square, enemy: Color) -> bool {
        KNIGHT_OFFSETS.iter().any(|&(dx, dy)| {
            square
                .offset(dx, dy)
                .is_some_and(|sq| self.piece_at(sq) == Some((enemy, Piece::Knight)))
        })
    }

    /// Enemy king on a neighboring square, or an enemy pawn on one of the
    /// two squares diagonally in front of the defender.
    fn adjacent_attacks(&self, square: Square, defending: Color) -> bool {
        let enemy = defending.opponent();
        let king = KING_OFFSETS.iter().any(|&(dx, dy)| {
            square
                .offset(dx, dy)
                .is_some_and(|sq| self.piece_at(sq) == Some((enemy, Piece::King)))
        });
        if king {
            return true;
        }

        let forward = defending.pawn_direction();
        [-1, 1].iter().any(|&dx| {
            square
                .offset(dx, forward)
                .is_some_and(|sq| self.piece_at(sq) == Some((enemy, Piece::Pawn)))
        })
    }

    fn ray_attacks(
        &self,
        square: Square,
        enemy: Color,
        directions: &[(isize, isize)],
        slides: fn(Piece) -> bool,
    ) -> bool {
        directions.iter().any(|&(dx, dy)| {
            square
                .ray(dx, dy)
                .find_map(|sq| self.piece_at(sq))
                .is_some_and(|(color, piece)| color == enemy && slides(piece))
        })
    }

    /// True if `color`'s king is attacked. A missing king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_attacked(king, color))
    }

    /// Apply `mv`, test whether `color`'s king (found on `king` before the
    /// move) is attacked afterwards, and take the move back.
    ///
    /// When the king itself is the moving piece its new square is tested.
    pub fn move_leaves_in_check(&mut self, mv: Move, king: Option<Square>, color: Color) -> bool {
        let info = self.make_move(mv);
        let king = if king == Some(mv.from()) {
            Some(mv.to())
        } else {
            king
        };
        let attacked = king.is_some_and(|sq| self.is_attacked(sq, color));
        self.unmake_move(mv, info);
        attacked
    }

    /// `color` is in check and has no legal move.
    #[must_use]
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// `color` is not in check but has no legal move.
    #[must_use]
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }
}
