use super::super::{Board, Color, MoveList, Square};

impl Board {
    /// Walk each ray until the edge, an own piece (excluded) or an enemy
    /// piece (included as a capture).
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dx, dy) in directions {
            for to in from.ray(dx, dy) {
                match self.color_at(to) {
                    None => moves.push_plain(from, to),
                    Some(owner) => {
                        if owner != color {
                            moves.push_plain(from, to);
                        }
                        break;
                    }
                }
            }
        }
    }
}
