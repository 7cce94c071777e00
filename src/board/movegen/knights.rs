use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Board, Color, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (dx, dy) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dx, dy) {
                if self.color_at(to) != Some(color) {
                    moves.push_plain(from, to);
                }
            }
        }
    }
}
