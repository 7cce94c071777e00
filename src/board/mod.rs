//! Chess board representation and game logic.
//!
//! An 8×8 grid of pieces with make/unmake, legal move generation with
//! check-aware filtering, attack detection, material evaluation and the
//! alpha-beta move search. Castling, en passant and promotion are not
//! modelled.
//!
//! # Example
//! ```
//! use chess_pawns::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveParseError, PlacementError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{
    AnnotatedMove, Color, Move, MoveFlag, MoveList, MoveListIntoIter, Piece, ScoredMove, Square,
};

pub use eval::{CHECKMATE_BONUS, CHECK_BONUS};
pub use movegen::{MateBudget, DEFAULT_MATE_BUDGET};

// Public API - search functions and configuration
pub use search::{
    choose_move, DepthSchedule, SearchOutcome, SearchParams, SearchState, SearchStats,
};
