//! Player trait shared by every engine front end.

use crate::board::{AnnotatedMove, Board, Color, Move};

/// Something that can play one side of a game.
pub trait Player {
    /// Display name used in logs and by the host.
    fn name(&self) -> &str;

    /// Pick a move for `color`. Returns [`AnnotatedMove::stalemate`] when
    /// `color` has no legal move.
    fn choose_move(&mut self, board: &Board, color: Color) -> AnnotatedMove;

    /// True if `mv` is one of `color`'s legal moves on `board_before`.
    fn is_valid_move(&self, board_before: &Board, mv: Move, color: Color) -> bool {
        board_before.is_legal(mv, color)
    }
}
