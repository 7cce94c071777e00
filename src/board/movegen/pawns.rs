use super::super::{Board, Color, MoveList, Square};

impl Board {
    /// Forward pushes (double step from the start row) and diagonal captures.
    /// No en passant and no promotion: a pawn on the last row has no moves.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let forward = color.pawn_direction();

        if let Some(one) = from.offset(0, forward) {
            if self.is_empty(one) {
                moves.push_plain(from, one);
                if from.y() == color.pawn_start_row() {
                    if let Some(two) = one.offset(0, forward) {
                        if self.is_empty(two) {
                            moves.push_plain(from, two);
                        }
                    }
                }
            }
        }

        for dx in [-1, 1] {
            if let Some(target) = from.offset(dx, forward) {
                if self.color_at(target) == Some(color.opponent()) {
                    moves.push_plain(from, target);
                }
            }
        }
    }
}
