//! Search-backed player.

use log::info;

use crate::board::{
    choose_move, AnnotatedMove, Board, Color, SearchOutcome, SearchParams, SearchState,
};

use super::Player;

#[cfg(debug_assertions)]
const PLAYER_NAME: &str = "ChessPawnsAI (Debug)";
#[cfg(not(debug_assertions))]
const PLAYER_NAME: &str = "ChessPawnsAI";

/// Player that picks moves with the memoized alpha-beta search.
///
/// The score memo lives for as long as the player, so positions seen in
/// earlier turns are not searched again.
pub struct PawnsAi {
    state: SearchState,
    params: SearchParams,
    last: Option<SearchOutcome>,
}

impl PawnsAi {
    /// Create a player with default search parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(SearchParams::default())
    }

    /// Create a player with explicit parameters. A seed in `params` makes
    /// the tie-break between equal moves reproducible.
    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        PawnsAi {
            state: SearchState::new(params.seed),
            params,
            last: None,
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Replace the search parameters. The memo is kept: its entries are keyed
    /// by mate budget, so a budget change never reuses stale scores.
    pub fn set_params(&mut self, params: SearchParams) {
        if let Some(seed) = params.seed {
            self.state.reseed(seed);
        }
        self.params = params;
    }

    /// Outcome of the most recent search, if any.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last.as_ref()
    }

    /// Number of positions held in the score memo.
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.state.memo_len()
    }

    /// Forget every memoized score, e.g. before a new game.
    pub fn new_game(&mut self) {
        self.state.clear_memo();
        self.last = None;
    }
}

impl Default for PawnsAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for PawnsAi {
    fn name(&self) -> &str {
        PLAYER_NAME
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> AnnotatedMove {
        let outcome = choose_move(board, color, &mut self.state, &self.params);
        let chosen = outcome.chosen;
        self.last = Some(outcome);
        info!("{color} ({}) just moved.", self.name());
        chosen
    }
}
