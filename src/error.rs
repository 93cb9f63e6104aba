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

//! Errors produced when reading a board string.

use crate::constants::{BOARD_DIM, BOARD_STRING_LEN};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
/// The reasons a board string can be rejected.
pub enum ParseError {
    /// The string is not exactly as long as a board string must be.
    #[error("invalid board string: expected {expected} characters, got {len}", expected = BOARD_STRING_LEN)]
    Length {
        /// The length of the rejected string, in bytes.
        len: usize,
    },
    /// A cell holds a character which is not a piece or empty symbol.
    #[error("invalid board, invalid piece {symbol:?} at {x}, {y}")]
    InvalidSymbol { symbol: char, x: usize, y: usize },
    /// A cell or row lies past the edge of the board.
    #[error("invalid board, piece out of bounds: {x}, {y}")]
    OutOfBounds { x: usize, y: usize },
    /// A row has fewer cells than the board is wide.
    #[error("invalid board, row {y} has {width} cells instead of {dim}", dim = BOARD_DIM)]
    RowWidth { y: usize, width: usize },
}
