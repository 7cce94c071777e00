//! Host-facing players.
//!
//! A [`Player`] is what a game driver talks to: it names itself, picks a
//! move for one side and validates moves against the legal move list.
//! [`PawnsAi`] wraps the alpha-beta search; [`RandomPlayer`] plays any
//! legal move.

mod controller;
mod player;
mod random;

pub use controller::PawnsAi;
pub use player::Player;
pub use random::RandomPlayer;
