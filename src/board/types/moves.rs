//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A move from one square to another.
///
/// Identity is the `(from, to)` pair only. Check and checkmate status live
/// in [`AnnotatedMove`], search values in [`ScoredMove`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// The null move (`from == to == a8`), carried by the stalemate sentinel.
    pub const NULL: Move = Move {
        from: Square::ORIGIN,
        to: Square::ORIGIN,
    };

    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation such as `e2e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() {
            return Err(MoveParseError::InvalidSquare {
                notation: s.to_string(),
            });
        }
        if s.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let square = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        Ok(Move::new(square(&s[..2])?, square(&s[2..])?))
    }
}

/// Annotation attached to a generated move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveFlag {
    #[default]
    None,
    /// The move attacks the opponent's king.
    Check,
    /// The move attacks the opponent's king and leaves no legal reply.
    Checkmate,
    /// Sentinel: the side to move had no legal move at all.
    Stalemate,
}

impl MoveFlag {
    /// True for `Check` and `Checkmate`.
    #[inline]
    #[must_use]
    pub const fn gives_check(self) -> bool {
        matches!(self, MoveFlag::Check | MoveFlag::Checkmate)
    }
}

/// A move together with the flag the generator computed for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedMove {
    pub mv: Move,
    pub flag: MoveFlag,
}

impl AnnotatedMove {
    #[inline]
    #[must_use]
    pub const fn new(mv: Move, flag: MoveFlag) -> Self {
        AnnotatedMove { mv, flag }
    }

    #[inline]
    #[must_use]
    pub const fn plain(mv: Move) -> Self {
        AnnotatedMove {
            mv,
            flag: MoveFlag::None,
        }
    }

    /// Returned when the side to move has no legal move. Callers must
    /// special-case it rather than apply it.
    #[inline]
    #[must_use]
    pub const fn stalemate() -> Self {
        AnnotatedMove {
            mv: Move::NULL,
            flag: MoveFlag::Stalemate,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.flag == MoveFlag::Stalemate
    }
}

impl fmt::Display for AnnotatedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flag {
            MoveFlag::None => write!(f, "{}", self.mv),
            MoveFlag::Check => write!(f, "{}+", self.mv),
            MoveFlag::Checkmate => write!(f, "{}#", self.mv),
            MoveFlag::Stalemate => write!(f, "(stalemate)"),
        }
    }
}

impl From<AnnotatedMove> for Move {
    fn from(annotated: AnnotatedMove) -> Self {
        annotated.mv
    }
}

/// A root move with the value the search backed up for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub annotated: AnnotatedMove,
    pub value: i32,
    /// Depth the move was searched at.
    pub depth: u32,
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of annotated moves with a fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [AnnotatedMove; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [AnnotatedMove::plain(Move::NULL); MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: AnnotatedMove) {
        debug_assert!(self.len < MAX_MOVES, "move list overflow");
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
            self.len += 1;
        }
    }

    pub(crate) fn push_plain(&mut self, from: Square, to: Square) {
        self.push(AnnotatedMove::plain(Move::new(from, to)));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[AnnotatedMove] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedMove> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<AnnotatedMove> {
        self.as_slice().get(idx).copied()
    }

    /// Membership by move identity; flags are ignored.
    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.iter().any(|m| m.mv == mv)
    }

    /// Find the annotated entry for a move.
    #[must_use]
    pub fn find(&self, mv: Move) -> Option<AnnotatedMove> {
        self.iter().find(|m| m.mv == mv).copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a AnnotatedMove;
    type IntoIter = std::slice::Iter<'a, AnnotatedMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = AnnotatedMove;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = AnnotatedMove;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = AnnotatedMove;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
