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

//! Representation of the two players.

use super::Direction;

use std::{
    fmt::{Display, Formatter},
    ops::Not,
};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// An enum representing the possible owners of a piece, and the player whose
/// turn it is.
///
/// An empty square has no player; code which needs to express that uses
/// `Option<Player>` rather than a third variant.
pub enum Player {
    /// The black player, who moves first and whose men advance toward
    /// increasing row indices.
    Black = 0,
    /// The red player, whose men advance toward decreasing row indices.
    Red = 1,
}

impl Player {
    /// The total number of players.
    pub const NUM: usize = 2;

    /// Both players, in index order.
    pub const ALL: [Player; Player::NUM] = [Player::Black, Player::Red];

    #[inline(always)]
    #[must_use]
    /// Get the opponent of this player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the row step that a man of this player advances by.
    pub const fn forward(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::Red => -1,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the two diagonal directions a man of this player may move in,
    /// leftward first.
    pub const fn forward_diagonals(self) -> [Direction; 2] {
        [
            Direction::new(-1, self.forward()),
            Direction::new(1, self.forward()),
        ]
    }

    #[must_use]
    /// Get the lowercase symbol used for a man of this player.
    pub const fn code(self) -> char {
        match self {
            Player::Black => 'b',
            Player::Red => 'r',
        }
    }

    #[must_use]
    /// Get the name of this player, as in `"black"` or `"red"`.
    pub const fn name(self) -> &'static str {
        match self {
            Player::Black => "black",
            Player::Red => "red",
        }
    }

    #[must_use]
    /// Look up a player by name. Returns `None` for anything other than
    /// `"black"` or `"red"`.
    pub fn from_name(name: &str) -> Option<Player> {
        Player::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl Not for Player {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
