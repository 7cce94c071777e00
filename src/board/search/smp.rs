//! Root-parallel search.
//!
//! Root moves are dealt round-robin to scoped worker threads. Each worker
//! searches its share on a private board clone and reads the depth schedule
//! between its own root moves. The score memo is shared behind a mutex, so
//! workers reuse each other's results.

use std::thread;
use std::time::Instant;

use log::trace;
use parking_lot::Mutex;

use crate::board::{Board, Color, MoveList, ScoredMove};
use crate::memo::ScoreMemo;

use super::{SearchParams, SearchStats, Searcher};

/// Score every root move across `params.threads` workers.
///
/// The returned list is in the same order as `roots`.
pub(crate) fn search_root_parallel(
    board: &Board,
    roots: &MoveList,
    perspective: Color,
    memo: &Mutex<ScoreMemo>,
    params: &SearchParams,
    start: Instant,
) -> (Vec<ScoredMove>, SearchStats) {
    let workers = params.threads.clamp(1, roots.len().max(1));
    let schedule = params.schedule();
    let budget = params.budget();

    let mut indexed: Vec<(usize, ScoredMove)> = Vec::with_capacity(roots.len());
    let mut stats = SearchStats::default();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                scope.spawn(move || {
                    let mut local = board.clone();
                    let mut searcher = Searcher::new(memo, perspective, budget);
                    let mut share = Vec::new();
                    for (idx, root) in roots.iter().enumerate().skip(worker).step_by(workers) {
                        let depth = schedule.depth_for(start.elapsed());
                        let value = searcher.score_root_move(&mut local, *root, depth);
                        trace!("worker {worker} root {root} depth {depth} value {value}");
                        share.push((
                            idx,
                            ScoredMove {
                                annotated: *root,
                                value,
                                depth,
                            },
                        ));
                    }
                    (share, searcher.stats)
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok((share, worker_stats)) => {
                    indexed.extend(share);
                    stats.merge(&worker_stats);
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });

    indexed.sort_by_key(|(idx, _)| *idx);
    (indexed.into_iter().map(|(_, scored)| scored).collect(), stats)
}
