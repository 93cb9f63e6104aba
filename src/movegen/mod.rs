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

//! Lookup tables for every single-step move and capturing jump on the board.
//!
//! The tables are built once, on first access, and never change afterward,
//! so they may be read from any number of threads.


use crate::constants::{BOARD_DIM, NUM_USABLE};

use super::{Piece, Player, Pos};

use nohash_hasher::{IntMap, IntSet};
use once_cell::sync::Lazy;

/// A set of positions.
pub type PosSet = IntSet<Pos>;

/// A map from the destination of a jump to the square it captures.
pub type JumpMap = IntMap<Pos, Pos>;

/// The 32 dark squares of the board, which are the only squares a piece may
/// ever occupy. In each row, these start at column 1 for even rows and
/// column 0 for odd rows.
pub static USABLE: Lazy<PosSet> = Lazy::new(|| {
    let mut usable = PosSet::with_capacity_and_hasher(NUM_USABLE, Default::default());
    for y in 0..BOARD_DIM {
        for x in ((y + 1) % 2..BOARD_DIM).step_by(2) {
            // both indices are below `BOARD_DIM`
            if let Some(pos) = Pos::from_indices(x, y) {
                usable.insert(pos);
            }
        }
    }
    debug_assert_eq!(usable.len(), NUM_USABLE);
    usable
});

/// A master copy of the step tables, built from `USABLE`.
static TABLES: Lazy<StepTables> = Lazy::new(StepTables::build);

#[derive(Clone, Debug, Default)]
/// Every move and jump that can be made from each usable square, ignoring
/// what else is on the board.
struct StepTables {
    /// `moves[player][pos]` holds the one-square forward moves a man of
    /// `player` can make from `pos`.
    moves: [IntMap<Pos, PosSet>; Player::NUM],
    /// `jumps[player][pos][to]` is the square captured when a man of
    /// `player` jumps from `pos` to `to`.
    jumps: [IntMap<Pos, JumpMap>; Player::NUM],
    /// The union of both players' moves from each square.
    king_moves: IntMap<Pos, PosSet>,
    /// The union of both players' jumps from each square.
    king_jumps: IntMap<Pos, JumpMap>,
}

impl StepTables {
    /// Compute the tables. Destinations off the board or on light squares are
    /// left out entirely.
    fn build() -> StepTables {
        let mut tables = StepTables::default();

        for &pos in USABLE.iter() {
            let mut king_moves = PosSet::default();
            let mut king_jumps = JumpMap::default();

            for player in Player::ALL {
                let mut moves = PosSet::default();
                let mut jumps = JumpMap::default();

                for dir in player.forward_diagonals() {
                    let mov = pos + dir;
                    if is_usable(mov) {
                        moves.insert(mov);
                        king_moves.insert(mov);
                    }

                    let jmp = pos + 2 * dir;
                    if is_usable(jmp) {
                        if let Some(capture) = pos.midpoint(jmp) {
                            jumps.insert(jmp, capture);
                            king_jumps.insert(jmp, capture);
                        }
                    }
                }

                tables.moves[player as usize].insert(pos, moves);
                tables.jumps[player as usize].insert(pos, jumps);
            }

            tables.king_moves.insert(pos, king_moves);
            tables.king_jumps.insert(pos, king_jumps);
        }

        tables
    }
}

/// Build every table now, rather than on first access. Calling this more
/// than once is harmless.
pub fn init() {
    Lazy::force(&TABLES);
}

#[inline(always)]
#[must_use]
/// Get the set of usable squares.
pub fn usable() -> &'static PosSet {
    &USABLE
}

#[inline(always)]
#[must_use]
/// Determine whether a piece may ever sit on `pos`.
pub fn is_usable(pos: Pos) -> bool {
    USABLE.contains(&pos)
}

#[must_use]
/// Get the squares a man of `player` on `pos` could step to.
/// Returns `None` if `pos` is not a usable square.
///
/// # Examples
///
/// ```
/// use checkers::{movegen::moves, Player, Pos};
///
/// let dests = moves(Player::Black, Pos::new(1, 0)).unwrap();
/// assert!(dests.contains(&Pos::new(0, 1)));
/// assert!(dests.contains(&Pos::new(2, 1)));
/// assert_eq!(dests.len(), 2);
/// ```
pub fn moves(player: Player, pos: Pos) -> Option<&'static PosSet> {
    TABLES.moves[player as usize].get(&pos)
}

#[must_use]
/// Get the jumps a man of `player` on `pos` could make, as a map from each
/// landing square to the square jumped over.
/// Returns `None` if `pos` is not a usable square.
pub fn jumps(player: Player, pos: Pos) -> Option<&'static JumpMap> {
    TABLES.jumps[player as usize].get(&pos)
}

#[must_use]
/// Get the squares a king on `pos` could step to, in any direction.
/// Returns `None` if `pos` is not a usable square.
pub fn king_moves(pos: Pos) -> Option<&'static PosSet> {
    TABLES.king_moves.get(&pos)
}

#[must_use]
/// Get the jumps a king on `pos` could make, in any direction.
/// Returns `None` if `pos` is not a usable square.
pub fn king_jumps(pos: Pos) -> Option<&'static JumpMap> {
    TABLES.king_jumps.get(&pos)
}

#[must_use]
/// Get the steps available to `piece` on `pos`: the king table for a crowned
/// piece, otherwise its owner's forward table.
pub fn piece_moves(piece: Piece, pos: Pos) -> Option<&'static PosSet> {
    if piece.king {
        king_moves(pos)
    } else {
        moves(piece.player, pos)
    }
}

#[must_use]
/// Get the jumps available to `piece` on `pos`: the king table for a crowned
/// piece, otherwise its owner's forward table.
pub fn piece_jumps(piece: Piece, pos: Pos) -> Option<&'static JumpMap> {
    if piece.king {
        king_jumps(pos)
    } else {
        jumps(piece.player, pos)
    }
}
