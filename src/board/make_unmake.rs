use super::{Board, Move, UnmakeInfo};

impl Board {
    /// Apply `m` in place. The returned info restores the board exactly via
    /// [`Board::unmake_move`].
    ///
    /// Moving from an empty square only clears the destination; the search
    /// never does this, but hosts may replay arbitrary moves. A move touching
    /// an off-board square changes nothing.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let previous_hash = self.hash;
        if !m.from().is_on_board() || !m.to().is_on_board() {
            return UnmakeInfo {
                moved: None,
                captured: None,
                previous_hash,
            };
        }
        let moved = self.clear_square(m.from());
        let captured = self.clear_square(m.to());
        if let Some((color, piece)) = moved {
            self.set_piece(m.to(), color, piece);
        }
        UnmakeInfo {
            moved,
            captured,
            previous_hash,
        }
    }

    /// Take back a move previously applied with [`Board::make_move`].
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        if !m.from().is_on_board() || !m.to().is_on_board() {
            return;
        }
        self.clear_square(m.to());
        if let Some((color, piece)) = info.captured {
            self.set_piece(m.to(), color, piece);
        }
        if let Some((color, piece)) = info.moved {
            self.set_piece(m.from(), color, piece);
        }
        debug_assert_eq!(self.hash, info.previous_hash);
        self.hash = info.previous_hash;
    }

    /// Clone the board and apply `m` to the copy.
    #[must_use]
    pub fn with_move(&self, m: Move) -> Board {
        let mut next = self.clone();
        next.make_move(m);
        next
    }
}
