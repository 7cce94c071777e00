//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_pawns::board::prelude::*;
//! ```

pub use super::{
    choose_move, AnnotatedMove, Board, BoardBuilder, Color, Move, MoveFlag, MoveList, Piece,
    SearchParams, SearchState, Square,
};
