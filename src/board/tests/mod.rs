//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation and check/checkmate flags
//! - `attacks.rs` - Attack detection scenarios
//! - `eval.rs` - Material evaluation
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `search.rs` - Move choice, memo reuse and root parallelism
//! - `proptest.rs` - Property-based tests

mod movegen;
mod search;

use crate::board::{Move, Square};

/// Parse algebraic square notation, panicking on typos in test tables.
pub(super) fn sq(notation: &str) -> Square {
    notation
        .parse()
        .unwrap_or_else(|e| panic!("bad square {notation}: {e}"))
}

pub(super) fn mv(text: &str) -> Move {
    text.parse()
        .unwrap_or_else(|e| panic!("bad move {text}: {e}"))
}
