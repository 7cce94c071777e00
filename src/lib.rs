pub mod board;
pub mod engine;
pub mod memo;
mod zobrist;

pub use board::{AnnotatedMove, Board, Color, Move, MoveFlag, Piece, Square};
pub use engine::{PawnsAi, Player, RandomPlayer};
pub use memo::ScoreMemo;
