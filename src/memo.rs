//! Score memo for the search.
//!
//! Caches backed-up alpha-beta values by position. The key carries the
//! remaining depth, the side to move, the evaluating color, the flag of the
//! move that reached the position and the mate budget, so entries computed
//! under different conditions never answer for each other. Fail-soft values are stored with
//! their bound type and only reused when the bound is decisive for the
//! window being searched.

use std::collections::HashMap;

use crate::board::{Color, MoveFlag};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// Identity of a memoized search node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemoKey {
    /// Zobrist hash of the placement after the move.
    pub hash: u64,
    /// Remaining plies below this node.
    pub depth: u32,
    /// Side to move in the position.
    pub to_move: Color,
    /// Color the score is measured for.
    pub perspective: Color,
    /// Flag of the move that reached the position.
    pub reached_by: MoveFlag,
    /// Checkmate verifications allowed per generation; it decides which
    /// replies below this node are flagged mate.
    pub mate_budget: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoEntry {
    pub score: i32,
    pub bound: BoundType,
}

impl MemoEntry {
    /// The stored score if it settles a search with window `(alpha, beta)`.
    #[must_use]
    pub fn usable(&self, alpha: i32, beta: i32) -> Option<i32> {
        match self.bound {
            BoundType::Exact => Some(self.score),
            BoundType::LowerBound if self.score >= beta => Some(self.score),
            BoundType::UpperBound if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

/// Unbounded map from [`MemoKey`] to [`MemoEntry`]. Entries are only ever
/// added or overwritten during a search.
#[derive(Debug, Default)]
pub struct ScoreMemo {
    entries: HashMap<MemoKey, MemoEntry>,
}

impl ScoreMemo {
    #[must_use]
    pub fn new() -> Self {
        ScoreMemo::default()
    }

    #[must_use]
    pub fn probe(&self, key: &MemoKey) -> Option<MemoEntry> {
        self.entries.get(key).copied()
    }

    /// Store an entry. An exact score is never replaced by a bound.
    pub fn store(&mut self, key: MemoKey, score: i32, bound: BoundType) {
        let entry = MemoEntry { score, bound };
        match self.entries.get(&key) {
            Some(existing) if existing.bound == BoundType::Exact && bound != BoundType::Exact => {}
            _ => {
                self.entries.insert(key, entry);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
