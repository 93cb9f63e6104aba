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

//! Fixed dimensions and symbols of the board and its text format.

/// The number of rows (and columns) on a board.
pub const BOARD_DIM: usize = 8;

/// The number of dark squares on which pieces may sit.
pub const NUM_USABLE: usize = BOARD_DIM * BOARD_DIM / 2;

/// The character placed between rows of a board string.
pub const ROW_SEP: char = '|';

/// The character used for a square with no piece on it.
pub const EMPTY_CODE: char = '*';

/// The exact length of a board string: every cell plus the separators
/// between rows.
pub const BOARD_STRING_LEN: usize = BOARD_DIM * BOARD_DIM + (BOARD_DIM - 1);
