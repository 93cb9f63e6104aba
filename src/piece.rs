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

//! Pieces, which know their owner and whether they have been crowned.

use crate::constants::EMPTY_CODE;

use super::Player;

use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
/// A piece on the board. Contains no information about its location.
///
/// An empty square holds no `Piece`; code which needs to talk about the
/// contents of a square uses `Option<Piece>`.
pub struct Piece {
    /// The player who owns this piece.
    pub player: Player,
    /// Whether this piece has been crowned. Kings may move in all four
    /// diagonal directions, while men only move forward.
    pub king: bool,
}

impl Piece {
    /// Total number of distinct pieces.
    pub const NUM_TYPES: usize = 4;

    /// Array containing every piece: both men, then both kings.
    pub const ALL: [Piece; Piece::NUM_TYPES] = [
        Piece::man(Player::Black),
        Piece::man(Player::Red),
        Piece::king(Player::Black),
        Piece::king(Player::Red),
    ];

    #[must_use]
    /// Create an uncrowned piece for `player`.
    pub const fn man(player: Player) -> Piece {
        Piece {
            player,
            king: false,
        }
    }

    #[must_use]
    /// Create a crowned piece for `player`.
    pub const fn king(player: Player) -> Piece {
        Piece { player, king: true }
    }

    #[must_use]
    /// Get the symbol of this piece: the owner's letter, uppercase for a king
    /// and lowercase for a man.
    pub const fn code(self) -> char {
        let c = self.player.code();
        if self.king {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    #[must_use]
    /// Given a symbol, convert it to a piece. Accepts exactly `r`, `b`, `R`
    /// and `B`; the empty symbol and every other character give `None`.
    pub const fn from_code(c: char) -> Option<Piece> {
        match c {
            'b' => Some(Piece::man(Player::Black)),
            'r' => Some(Piece::man(Player::Red)),
            'B' => Some(Piece::king(Player::Black)),
            'R' => Some(Piece::king(Player::Red)),
            _ => None,
        }
    }
}

#[must_use]
/// Get the symbol for the contents of a square.
pub const fn cell_code(cell: Option<Piece>) -> char {
    match cell {
        Some(p) => p.code(),
        None => EMPTY_CODE,
    }
}

#[must_use]
/// Decode the symbol for the contents of a square. Returns `Some(None)` for
/// the empty symbol, `Some(Some(piece))` for a piece symbol, and `None` for
/// any character outside the symbol set.
pub const fn decode_cell(c: char) -> Option<Option<Piece>> {
    match c {
        EMPTY_CODE => Some(None),
        _ => match Piece::from_code(c) {
            Some(p) => Some(Some(p)),
            None => None,
        },
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}
