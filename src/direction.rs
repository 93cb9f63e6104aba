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

//! Steps between positions on the board.

use super::Pos;

use std::ops::{Add, Mul, Neg};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A difference between two positions, in columns (`dx`) and rows (`dy`).
/// Row 0 is the top of the board, so a positive `dy` points down.
pub struct Direction {
    /// The column step.
    pub dx: i8,
    /// The row step.
    pub dy: i8,
}

impl Direction {
    /// A `Direction` corresponding to a move from nowhere to nowhere.
    pub const NODIR: Direction = Direction::new(0, 0);

    /// One square up and to the left.
    pub const UP_LEFT: Direction = Direction::new(-1, -1);

    /// One square up and to the right.
    pub const UP_RIGHT: Direction = Direction::new(1, -1);

    /// One square down and to the left.
    pub const DOWN_LEFT: Direction = Direction::new(-1, 1);

    /// One square down and to the right.
    pub const DOWN_RIGHT: Direction = Direction::new(1, 1);

    /// The four one-square diagonal steps a king may take.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    #[inline]
    #[must_use]
    /// Create a new Direction based on how far it moves in columns and rows.
    pub const fn new(dx: i8, dy: i8) -> Direction {
        Direction { dx, dy }
    }
}

impl Neg for Direction {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Direction::new(-self.dx, -self.dy)
    }
}

impl Mul<Direction> for i8 {
    type Output = Direction;
    fn mul(self, rhs: Direction) -> Direction {
        Direction::new(self * rhs.dx, self * rhs.dy)
    }
}

impl Add<Pos> for Direction {
    type Output = Pos;
    fn add(self, rhs: Pos) -> Self::Output {
        rhs + self
    }
}

impl Add<Direction> for Direction {
    type Output = Self;
    fn add(self, rhs: Direction) -> Self::Output {
        Direction::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}
