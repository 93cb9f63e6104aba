/*
  Checkers, a draughts rules library.
  Copyright (C) 2022 The Checkers Authors.

  Checkers is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Checkers is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Positions, which are coordinates on a board.

use crate::constants::BOARD_DIM;

use super::Direction;

use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Sub},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// A position: a column `x` and a row `y`, both counted from zero at the
/// top-left corner of the board.
///
/// A `Pos` may lie off the board, since it is the result of stepping from a
/// square near an edge. Use `is_on_board` or `is_usable` before treating it
/// as a square. An absent position is `Option<Pos>`.
pub struct Pos {
    /// The column, from left to right.
    pub x: i8,
    /// The row, from top to bottom.
    pub y: i8,
}

impl Pos {
    #[inline(always)]
    #[must_use]
    /// Create a position from a column and row.
    pub const fn new(x: i8, y: i8) -> Pos {
        Pos { x, y }
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    /// Create a position from a column and row given as indices. Returns
    /// `None` if either index is past the edge of the board.
    pub fn from_indices(x: usize, y: usize) -> Option<Pos> {
        if x < BOARD_DIM && y < BOARD_DIM {
            Some(Pos::new(x as i8, y as i8))
        } else {
            None
        }
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    /// Determine whether this position is inside the 8x8 board.
    pub const fn is_on_board(self) -> bool {
        0 <= self.x && self.x < BOARD_DIM as i8 && 0 <= self.y && self.y < BOARD_DIM as i8
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this position is a dark square, i.e. one on which a
    /// piece may sit. These are the on-board squares where `x + y` is odd.
    pub const fn is_usable(self) -> bool {
        self.is_on_board() && (self.x + self.y) % 2 == 1
    }

    #[must_use]
    /// Get the square exactly halfway between this position and `other`.
    /// For a two-square jump, this is the square of the captured piece.
    /// Returns `None` if the two positions are an odd number of columns or
    /// rows apart, since then no square lies exactly between them.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkers::Pos;
    ///
    /// assert_eq!(Pos::new(1, 2).midpoint(Pos::new(3, 4)), Some(Pos::new(2, 3)));
    /// assert_eq!(Pos::new(1, 2).midpoint(Pos::new(2, 3)), None);
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn midpoint(self, other: Pos) -> Option<Pos> {
        let sx = i16::from(self.x) + i16::from(other.x);
        let sy = i16::from(self.y) + i16::from(other.y);
        if sx % 2 != 0 || sy % 2 != 0 {
            return None;
        }
        Some(Pos::new((sx / 2) as i8, (sy / 2) as i8))
    }
}

impl Hash for Pos {
    #[allow(clippy::cast_sign_loss)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        // a single write, so that `Pos` may key a `nohash_hasher` map
        state.write_u16(u16::from_le_bytes([self.x as u8, self.y as u8]));
    }
}

impl nohash_hasher::IsEnabled for Pos {}

impl Add<Direction> for Pos {
    type Output = Pos;
    #[inline(always)]
    fn add(self, rhs: Direction) -> Self::Output {
        Pos::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl AddAssign<Direction> for Pos {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs;
    }
}

impl Sub<Pos> for Pos {
    type Output = Direction;
    #[inline(always)]
    fn sub(self, rhs: Pos) -> Self::Output {
        Direction::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
