//! Static position evaluation.
//!
//! Material only, plus a bonus for the check status of the move that led to
//! the position. Lookahead belongs to the search.

use super::{AnnotatedMove, Board, Color, MoveFlag};

/// Bonus for reaching a position by a checking move.
pub const CHECK_BONUS: i32 = 100;

/// Bonus for reaching a position by a mating move. Larger than any material
/// swing short of a king.
pub const CHECKMATE_BONUS: i32 = 9000;

impl Board {
    /// Material balance from `perspective`: own pieces add their value,
    /// enemy pieces subtract it.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.occupied()
            .map(|(_, color, piece)| {
                if color == perspective {
                    piece.value()
                } else {
                    -piece.value()
                }
            })
            .sum()
    }

    /// Score the position reached by `last`, played by `mover`.
    ///
    /// The check bonus counts for `perspective` when `perspective` made the
    /// move and against it otherwise.
    #[must_use]
    pub fn evaluate_after(&self, last: AnnotatedMove, mover: Color, perspective: Color) -> i32 {
        let bonus = match last.flag {
            MoveFlag::Check => CHECK_BONUS,
            MoveFlag::Checkmate => CHECKMATE_BONUS,
            MoveFlag::None | MoveFlag::Stalemate => 0,
        };
        let signed = if mover == perspective { bonus } else { -bonus };
        self.evaluate(perspective) + signed
    }
}
