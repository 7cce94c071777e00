//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (x, y) board coordinates
//! - `Move`, `MoveFlag`, `AnnotatedMove` and `MoveList` - move representation
//! - `ScoredMove` - root move with its backed-up search value

mod moves;
mod piece;
mod square;

pub use moves::{AnnotatedMove, Move, MoveFlag, MoveList, MoveListIntoIter, ScoredMove};
pub use piece::{Color, Piece};
pub use square::Square;
