//! Legal move generation.
//!
//! Candidates come from the per-piece rules in the submodules, in
//! board-scan order. Each candidate is then made on the board, dropped if it
//! leaves the mover's king attacked, annotated with check/checkmate for the
//! opponent, and taken back.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{DIAGONALS, ORTHOGONALS};
use super::{AnnotatedMove, Board, Color, Move, MoveFlag, MoveList, Piece, Square};

/// Default number of checkmate verifications per generation call.
pub const DEFAULT_MATE_BUDGET: u32 = 32;

/// How many checking moves may still be verified for checkmate.
///
/// Verifying a mate means enumerating the opponent's replies, so the count
/// is capped. Once spent, checking moves keep the `Check` flag: check flags
/// are always sound, checkmate flags may be under-reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MateBudget(u32);

impl MateBudget {
    /// Never verify checkmate.
    pub const NONE: MateBudget = MateBudget(0);
    /// Verify every checking move.
    pub const UNLIMITED: MateBudget = MateBudget(u32::MAX);

    #[must_use]
    pub const fn new(verifications: u32) -> Self {
        MateBudget(verifications)
    }

    #[must_use]
    pub const fn remaining(self) -> u32 {
        self.0
    }

    fn try_spend(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

impl Default for MateBudget {
    fn default() -> Self {
        MateBudget(DEFAULT_MATE_BUDGET)
    }
}

impl Board {
    /// Geometric candidates for the piece on `from`, if it belongs to `color`.
    ///
    /// Own-king safety is not checked here.
    #[must_use]
    pub fn pseudo_moves_from(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.push_pseudo_moves(from, color, &mut moves);
        moves
    }

    fn push_pseudo_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let Some((owner, piece)) = self.piece_at(from) else {
            return;
        };
        if owner != color {
            return;
        }
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_slider_moves(from, color, &DIAGONALS, moves),
            Piece::Rook => self.generate_slider_moves(from, color, &ORTHOGONALS, moves),
            Piece::Queen => {
                self.generate_slider_moves(from, color, &DIAGONALS, moves);
                self.generate_slider_moves(from, color, &ORTHOGONALS, moves);
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Geometric candidates for every piece of `color`, in board-scan order.
    #[must_use]
    pub fn pseudo_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.pieces_of(color) {
            self.push_pseudo_moves(from, color, &mut moves);
        }
        moves
    }

    /// Legal moves for `color` with the default checkmate budget.
    ///
    /// The board is used as scratch space and is unchanged on return.
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        self.legal_moves_budgeted(color, MateBudget::default())
    }

    /// Legal moves for `color`, verifying at most `budget` checkmates.
    pub fn legal_moves_budgeted(&mut self, color: Color, mut budget: MateBudget) -> MoveList {
        let candidates = self.pseudo_moves(color);
        let king = self.find_king(color);
        let enemy = color.opponent();
        let mut legal = MoveList::new();

        for candidate in &candidates {
            let mv = candidate.mv;
            let info = self.make_move(mv);
            let own_king = if king == Some(mv.from()) {
                Some(mv.to())
            } else {
                king
            };

            if own_king.is_some_and(|sq| self.is_attacked(sq, color)) {
                self.unmake_move(mv, info);
                continue;
            }

            let flag = if self.is_in_check(enemy) {
                if budget.try_spend() && !self.has_legal_move(enemy) {
                    MoveFlag::Checkmate
                } else {
                    MoveFlag::Check
                }
            } else {
                MoveFlag::None
            };

            self.unmake_move(mv, info);
            legal.push(AnnotatedMove::new(mv, flag));
        }

        legal
    }

    /// True as soon as one legal move for `color` is found.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let king = self.find_king(color);
        for from in Square::all() {
            if self.color_at(from) != Some(color) {
                continue;
            }
            let candidates = self.pseudo_moves_from(from, color);
            for candidate in &candidates {
                if !self.move_leaves_in_check(candidate.mv, king, color) {
                    return true;
                }
            }
        }
        false
    }

    /// True if `mv` is among the legal moves of `color` on this board.
    #[must_use]
    pub fn is_legal(&self, mv: Move, color: Color) -> bool {
        let mut scratch = self.clone();
        scratch.legal_moves_budgeted(color, MateBudget::NONE).contains(mv)
    }
}
