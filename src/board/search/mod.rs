//! Search module implementing memoized alpha-beta minimax.
//!
//! Features:
//! - Fail-soft alpha-beta below every root move, cut off when `alpha >= beta`
//! - Score memo keyed by position, depth, side to move, perspective and mate budget
//! - Time-adaptive depth, chosen between root moves only
//! - Seeded uniform tie-break among equally valued root moves
//! - Optional root-parallel search over scoped worker threads

mod constants;
mod params;
mod smp;

use std::time::{Duration, Instant};

use log::{debug, trace};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::memo::{BoundType, MemoKey, ScoreMemo};

use super::movegen::MateBudget;
use super::{AnnotatedMove, Board, Color, MoveFlag, MoveList, ScoredMove};
pub use constants::{INF, STALEMATE_SCORE};
pub use params::{DepthSchedule, SearchParams};

/// Counters collected during one `choose_move` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    pub memo_hits: u64,
    pub memo_stores: u64,
    pub elapsed: Duration,
}

impl SearchStats {
    pub(crate) fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.memo_hits += other.memo_hits;
        self.memo_stores += other.memo_stores;
    }
}

/// Result of a `choose_move` call.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// The move to play, or the stalemate sentinel
    pub chosen: AnnotatedMove,
    /// Backed-up value of the chosen move (`None` for the sentinel)
    pub value: Option<i32>,
    /// Every root move with its value, in generation order
    pub scored: Vec<ScoredMove>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    fn stalemate(stats: SearchStats) -> Self {
        SearchOutcome {
            chosen: AnnotatedMove::stalemate(),
            value: None,
            scored: Vec::new(),
            stats,
        }
    }
}

/// State that outlives a single search: the score memo and the tie-break
/// random source.
pub struct SearchState {
    pub(crate) memo: Mutex<ScoreMemo>,
    rng: StdRng,
}

impl SearchState {
    /// Create a state; a seed makes the tie-break reproducible.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SearchState {
            memo: Mutex::new(ScoreMemo::new()),
            rng,
        }
    }

    /// Replace the tie-break random source.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.lock().len()
    }

    pub fn clear_memo(&mut self) {
        self.memo.get_mut().clear();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(None)
    }
}

/// Pick a move for `color` on `board`.
///
/// Returns the stalemate sentinel, without searching, when `color` has no
/// legal move. Otherwise every root move is scored with alpha-beta to the
/// depth the schedule allows at the moment it is started, and one of the
/// moves sharing the maximum value is drawn uniformly.
pub fn choose_move(
    board: &Board,
    color: Color,
    state: &mut SearchState,
    params: &SearchParams,
) -> SearchOutcome {
    let start = Instant::now();
    let mut scratch = board.clone();
    let roots = scratch.legal_moves_budgeted(color, params.budget());

    if roots.is_empty() {
        debug!("{color} has no legal move; returning stalemate sentinel");
        return SearchOutcome::stalemate(SearchStats {
            elapsed: start.elapsed(),
            ..SearchStats::default()
        });
    }

    let (scored, mut stats) = if params.threads > 1 && roots.len() > 1 {
        smp::search_root_parallel(&scratch, &roots, color, &state.memo, params, start)
    } else {
        search_root(&mut scratch, &roots, color, &state.memo, params, start)
    };
    stats.elapsed = start.elapsed();

    let Some(best_value) = scored.iter().map(|s| s.value).max() else {
        return SearchOutcome::stalemate(stats);
    };
    let ties: Vec<&ScoredMove> = scored.iter().filter(|s| s.value == best_value).collect();
    let chosen = match ties.choose(&mut state.rng) {
        Some(scored_move) => scored_move.annotated,
        None => return SearchOutcome::stalemate(stats),
    };

    debug!(
        "{color} chose {chosen} value {best_value} ({} tied of {}) nodes {} memo hits {} in {:?}",
        ties.len(),
        scored.len(),
        stats.nodes,
        stats.memo_hits,
        stats.elapsed
    );

    SearchOutcome {
        chosen,
        value: Some(best_value),
        scored,
        stats,
    }
}

/// Score the root moves in order on the caller's thread.
fn search_root(
    board: &mut Board,
    roots: &MoveList,
    perspective: Color,
    memo: &Mutex<ScoreMemo>,
    params: &SearchParams,
    start: Instant,
) -> (Vec<ScoredMove>, SearchStats) {
    let schedule = params.schedule();
    let mut searcher = Searcher::new(memo, perspective, params.budget());
    let mut scored = Vec::with_capacity(roots.len());

    for root in roots {
        let depth = schedule.depth_for(start.elapsed());
        let value = searcher.score_root_move(board, *root, depth);
        trace!("root {root} depth {depth} value {value}");
        scored.push(ScoredMove {
            annotated: *root,
            value,
            depth,
        });
    }

    (scored, searcher.stats)
}

/// Alpha-beta worker. Owns nothing but its counters; the board it searches
/// is borrowed mutably and restored after every move.
pub(crate) struct Searcher<'a> {
    memo: &'a Mutex<ScoreMemo>,
    perspective: Color,
    budget: MateBudget,
    pub(crate) stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(memo: &'a Mutex<ScoreMemo>, perspective: Color, budget: MateBudget) -> Self {
        Searcher {
            memo,
            perspective,
            budget,
            stats: SearchStats::default(),
        }
    }

    /// Value of playing `root` for the perspective color, searched `depth`
    /// plies in total (the root move is the first ply).
    pub(crate) fn score_root_move(&mut self, board: &mut Board, root: AnnotatedMove, depth: u32) -> i32 {
        let remaining = depth.saturating_sub(1);
        self.alpha_beta(board, root, self.perspective, remaining, -INF, INF)
    }

    /// Play `last` for `mover`, score the resulting position and take the
    /// move back.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        last: AnnotatedMove,
        mover: Color,
        depth: u32,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        let info = board.make_move(last.mv);
        let value = self.score_position(board, last, mover, depth, alpha, beta);
        board.unmake_move(last.mv, info);
        value
    }

    fn score_position(
        &mut self,
        board: &mut Board,
        last: AnnotatedMove,
        mover: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        let to_move = mover.opponent();
        let key = MemoKey {
            hash: board.hash(),
            depth,
            to_move,
            perspective: self.perspective,
            reached_by: last.flag,
            mate_budget: self.budget.remaining(),
        };

        let cached = self.memo.lock().probe(&key);
        if let Some(entry) = cached {
            if let Some(score) = entry.usable(alpha, beta) {
                self.stats.memo_hits += 1;
                return score;
            }
        }

        if depth == 0 || last.flag == MoveFlag::Checkmate {
            let score = board.evaluate_after(last, mover, self.perspective);
            self.store(key, score, BoundType::Exact);
            return score;
        }

        let replies = board.legal_moves_budgeted(to_move, self.budget);
        if replies.is_empty() {
            let score = if last.flag.gives_check() {
                let mate = AnnotatedMove::new(last.mv, MoveFlag::Checkmate);
                board.evaluate_after(mate, mover, self.perspective)
            } else {
                STALEMATE_SCORE
            };
            self.store(key, score, BoundType::Exact);
            return score;
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let maximizing = to_move == self.perspective;
        let mut best = if maximizing { -INF } else { INF };

        for reply in &replies {
            let value = self.alpha_beta(board, *reply, to_move, depth - 1, alpha, beta);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best <= alpha_orig {
            BoundType::UpperBound
        } else if best >= beta_orig {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.store(key, best, bound);
        best
    }

    fn store(&mut self, key: MemoKey, score: i32, bound: BoundType) {
        self.memo.lock().store(key, score, bound);
        self.stats.memo_stores += 1;
    }
}
