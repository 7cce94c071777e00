use super::super::attacks::KING_OFFSETS;
use super::super::{Board, Color, MoveList, Square};

impl Board {
    /// The 8 neighboring squares not held by `color`. No castling.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (dx, dy) in KING_OFFSETS {
            if let Some(to) = from.offset(dx, dy) {
                if self.color_at(to) != Some(color) {
                    moves.push_plain(from, to);
                }
            }
        }
    }
}
