//! Search constants.

/// Window bound larger than any reachable score.
pub const INF: i32 = 1_000_000;

/// Score of a position where the side to move has no move and is not in check.
pub const STALEMATE_SCORE: i32 = 0;

// ============================================================================
// DEPTH SCHEDULE DEFAULTS
// ============================================================================

/// Plies searched for each root move while time is plentiful
pub const NOMINAL_DEPTH: u32 = 4;

/// Plies once the first time threshold has passed
pub const REDUCED_DEPTH: u32 = 2;

/// Plies once the second time threshold has passed
pub const MINIMAL_DEPTH: u32 = 1;

/// Elapsed milliseconds after which remaining root moves use `REDUCED_DEPTH`
pub const FIRST_THRESHOLD_MS: u64 = 4000;

/// Elapsed milliseconds after which remaining root moves use `MINIMAL_DEPTH`
pub const SECOND_THRESHOLD_MS: u64 = 5000;
