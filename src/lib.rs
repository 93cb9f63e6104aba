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

//! Rules substrate for checkers (draughts) on an 8x8 board.
//!
//! This crate provides the board geometry, precomputed tables of every
//! single-step move and capturing jump from each usable square, and a
//! canonical text format for board states. Playing a game (turn order,
//! legality, multi-jumps, crowning) is left to the caller.

pub mod constants;

mod direction;
pub use direction::Direction;

mod error;
pub use error::ParseError;

mod game;
pub use game::Game;

pub mod movegen;

pub mod piece;
pub use piece::Piece;

mod player;
pub use player::Player;

mod pos;
pub use pos::Pos;

#[cfg(test)]
mod boards;
