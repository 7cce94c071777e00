//! Uniform random legal-move player.

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{AnnotatedMove, Board, Color};

use super::Player;

/// Player that picks one of its legal moves uniformly at random.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move choice.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> AnnotatedMove {
        let mut scratch = board.clone();
        let moves = scratch.legal_moves(color);
        let chosen = moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_else(AnnotatedMove::stalemate);
        info!("{color} ({}) just moved.", self.name());
        chosen
    }
}
