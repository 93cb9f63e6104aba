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

//! Board strings used by tests.

#![allow(dead_code)]

/// A board with no pieces on it.
pub const EMPTY_BOARD: &str =
    "********|********|********|********|********|********|********|********";

/// The opening position: Black men on the first three rows, Red men on the
/// last three.
pub const START_BOARD: &str =
    "*b*b*b*b|b*b*b*b*|*b*b*b*b|********|********|r*r*r*r*|*r*r*r*r|r*r*r*r*";

/// A lone red king at (2, 3).
pub const RED_KING_BOARD: &str =
    "********|********|********|**R*****|********|********|********|********";

/// A mid-game board with men and kings of both players. Black can jump from
/// (3, 2) over (4, 3).
pub const MIXED_BOARD: &str =
    "*b*b***B|b*b*****|***b*b**|****r***|*R******|r*****r*|*r*r*b*r|********";

/// One character short of a board string.
pub const SHORT_BOARD: &str =
    "********|********|********|********|********|********|********|*******";

/// A full-length board with an unknown piece in the first row.
pub const UNKNOWN_PIECE_BOARD: &str =
    "***q****|********|********|********|********|********|********|********";

/// A full-length string with the last separator moved one cell early, so
/// that one row is too long.
pub const LONG_ROW_BOARD: &str =
    "********|********|********|********|********|********|*********|*******";

/// A full-length string with an extra separator at the end, which leaves the
/// eighth row one cell short.
pub const EXTRA_ROW_BOARD: &str =
    "********|********|********|********|********|********|********|*******|";
