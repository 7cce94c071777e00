use std::time::Duration;

use super::constants::{
    FIRST_THRESHOLD_MS, MINIMAL_DEPTH, NOMINAL_DEPTH, REDUCED_DEPTH, SECOND_THRESHOLD_MS,
};
use crate::board::movegen::{MateBudget, DEFAULT_MATE_BUDGET};

/// Tunable search configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies per root move while under `first_threshold`
    pub nominal_depth: u32,
    /// Plies per root move between the two thresholds
    pub reduced_depth: u32,
    /// Plies per root move past `second_threshold`
    pub minimal_depth: u32,
    pub first_threshold: Duration,
    pub second_threshold: Duration,
    /// Checkmate verifications allowed per move generation
    pub mate_budget: u32,
    /// Worker threads for the root moves (1 = search on the caller's thread)
    pub threads: usize,
    /// Seed for the tie-break among equally valued moves; `None` uses entropy
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            nominal_depth: NOMINAL_DEPTH,
            reduced_depth: REDUCED_DEPTH,
            minimal_depth: MINIMAL_DEPTH,
            first_threshold: Duration::from_millis(FIRST_THRESHOLD_MS),
            second_threshold: Duration::from_millis(SECOND_THRESHOLD_MS),
            mate_budget: DEFAULT_MATE_BUDGET,
            threads: 1,
            seed: None,
        }
    }
}

impl SearchParams {
    /// Fixed depth: every root move is searched `depth` plies regardless of time.
    #[must_use]
    pub fn fixed_depth(depth: u32) -> Self {
        SearchParams {
            nominal_depth: depth,
            reduced_depth: depth,
            minimal_depth: depth,
            ..SearchParams::default()
        }
    }

    /// Set the nominal depth, capping the reduced depths at it.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.nominal_depth = depth;
        self.reduced_depth = self.reduced_depth.min(depth);
        self.minimal_depth = self.minimal_depth.min(depth);
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, first: Duration, second: Duration) -> Self {
        self.first_threshold = first;
        self.second_threshold = second;
        self
    }

    #[must_use]
    pub fn with_mate_budget(mut self, verifications: u32) -> Self {
        self.mate_budget = verifications;
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn schedule(&self) -> DepthSchedule {
        DepthSchedule {
            nominal: self.nominal_depth,
            reduced: self.reduced_depth,
            minimal: self.minimal_depth,
            first_threshold: self.first_threshold,
            second_threshold: self.second_threshold,
        }
    }

    #[must_use]
    pub fn budget(&self) -> MateBudget {
        MateBudget::new(self.mate_budget)
    }
}

/// Maps elapsed search time to the depth used for the next root move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthSchedule {
    pub nominal: u32,
    pub reduced: u32,
    pub minimal: u32,
    pub first_threshold: Duration,
    pub second_threshold: Duration,
}

impl DepthSchedule {
    #[must_use]
    pub fn depth_for(&self, elapsed: Duration) -> u32 {
        if elapsed > self.second_threshold {
            self.minimal
        } else if elapsed > self.first_threshold {
            self.reduced
        } else {
            self.nominal
        }
    }
}
