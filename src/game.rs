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

//! Game state: which pieces are where, and whose turn it is.

use crate::{
    constants::{BOARD_DIM, BOARD_STRING_LEN, ROW_SEP},
    movegen::USABLE,
    piece::{cell_code, decode_cell},
    ParseError,
};

use super::{Piece, Player, Pos};

use nohash_hasher::IntMap;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// The state of a game of checkers.
///
/// Pieces are stored sparsely: a position with no entry in `pieces` is
/// empty. A `Game` is not synchronized; whoever applies moves to it must
/// own it.
pub struct Game {
    /// The pieces on the board, keyed by their positions.
    pub pieces: IntMap<Pos, Piece>,
    /// The player whose turn it is.
    pub turn: Player,
}

impl Game {
    #[must_use]
    /// Create a game with no pieces on the board and Black to move.
    pub fn empty() -> Game {
        Game {
            pieces: IntMap::default(),
            turn: Player::Black,
        }
    }

    #[must_use]
    /// Create a game in the opening position: Black men on every usable square
    /// of the first three rows, Red men on the last three, Black to move.
    pub fn new() -> Game {
        let mut game = Game::empty();
        for &pos in USABLE.iter() {
            let player = match pos.y {
                0..=2 => Player::Black,
                5..=7 => Player::Red,
                _ => continue,
            };
            game.add_piece(pos, Piece::man(player));
        }
        game
    }

    /// Read a game from its board string. The turn is always set to Black;
    /// callers who need another player to move must set `turn` afterward.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if the string is not exactly 71
    /// characters, if any cell holds a character other than `r`, `b`, `R`,
    /// `B` or `*`, or if the rows are not eight cells each.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkers::{Game, Piece, Player, Pos};
    ///
    /// let s = "********|********|********|**R*****|********|********|********|********";
    /// let game = Game::parse(s).unwrap();
    /// assert_eq!(game.piece_at(Pos::new(2, 3)), Some(Piece::king(Player::Red)));
    /// assert_eq!(game.to_string(), s);
    /// ```
    pub fn parse(s: &str) -> Result<Game, ParseError> {
        if s.len() != BOARD_STRING_LEN {
            return Err(ParseError::Length { len: s.len() });
        }

        let mut game = Game::empty();
        for (y, row) in s.split(ROW_SEP).enumerate() {
            let mut width = 0;
            for (x, c) in row.chars().enumerate() {
                let pos = Pos::from_indices(x, y).ok_or(ParseError::OutOfBounds { x, y })?;
                let cell = decode_cell(c).ok_or(ParseError::InvalidSymbol { symbol: c, x, y })?;
                if let Some(piece) = cell {
                    game.pieces.insert(pos, piece);
                }
                width = x + 1;
            }
            if width != BOARD_DIM {
                return Err(ParseError::RowWidth { y, width });
            }
        }

        Ok(game)
    }

    #[inline(always)]
    #[must_use]
    /// Get the piece on `pos`, if there is one.
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.pieces.get(&pos).copied()
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether any piece is on `pos`.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.pieces.contains_key(&pos)
    }

    /// Put `piece` on `pos`, returning whatever piece was there before.
    /// `pos` should be on the board, or the piece will never be written out.
    pub fn add_piece(&mut self, pos: Pos, piece: Piece) -> Option<Piece> {
        debug_assert!(pos.is_on_board());
        self.pieces.insert(pos, piece)
    }

    /// Remove and return the piece on `pos`, if there is one.
    pub fn remove_piece(&mut self, pos: Pos) -> Option<Piece> {
        self.pieces.remove(&pos)
    }

    /// Iterate over the positions and pieces belonging to `player`, in no
    /// particular order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.pieces
            .iter()
            .filter(move |(_, piece)| piece.player == player)
            .map(|(&pos, &piece)| (pos, piece))
    }

    #[must_use]
    /// Count the pieces `player` has left on the board.
    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Game, ParseError> {
        Game::parse(s)
    }
}

impl Display for Game {
    /// Write the board string of this game: eight rows from top to bottom,
    /// separated by `|`, with one symbol per cell. Light squares and empty
    /// dark squares are both written as `*`. The turn is not written.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_DIM {
            for x in 0..BOARD_DIM {
                let cell = Pos::from_indices(x, y).and_then(|pos| self.piece_at(pos));
                write!(f, "{}", cell_code(cell))?;
            }
            if y < BOARD_DIM - 1 {
                write!(f, "{ROW_SEP}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{boards::*, constants::EMPTY_CODE};

    #[test]
    /// Test that an empty board string gives a game with no pieces, and that
    /// it is written back out unchanged.
    fn parse_empty_board() {
        let game = Game::parse(EMPTY_BOARD).unwrap();
        assert!(game.pieces.is_empty());
        assert_eq!(game.turn, Player::Black);
        assert_eq!(game.to_string(), EMPTY_BOARD);
        assert_eq!(Game::empty().to_string(), EMPTY_BOARD);
    }

    #[test]
    /// Test that a lone king is read at the right position.
    fn parse_red_king() {
        let game: Game = RED_KING_BOARD.parse().unwrap();
        assert_eq!(game.pieces.len(), 1);
        assert_eq!(
            game.pieces.get(&Pos::new(2, 3)),
            Some(&Piece::king(Player::Red))
        );
        assert!(game.is_occupied(Pos::new(2, 3)));
        assert!(!game.is_occupied(Pos::new(3, 2)));
        assert_eq!(game.piece_at(Pos::new(3, 2)), None);
        assert_eq!(game.to_string(), RED_KING_BOARD);
    }

    #[test]
    /// Test that the opening position has twelve men a side and matches its
    /// board string.
    fn opening_position() {
        let game = Game::new();
        assert_eq!(game.count(Player::Black), 12);
        assert_eq!(game.count(Player::Red), 12);
        assert!(game.pieces.values().all(|p| !p.king));
        assert!(game.pieces.keys().all(|pos| pos.is_usable()));
        assert_eq!(game.turn, Player::Black);
        assert_eq!(game.to_string(), START_BOARD);
        assert_eq!(Game::parse(START_BOARD).unwrap(), Game::default());
    }

    #[test]
    /// Test that a board with every kind of piece is read correctly.
    fn parse_mixed_board() {
        let game = Game::parse(MIXED_BOARD).unwrap();
        assert_eq!(game.piece_at(Pos::new(7, 0)), Some(Piece::king(Player::Black)));
        assert_eq!(game.piece_at(Pos::new(1, 4)), Some(Piece::king(Player::Red)));
        assert_eq!(game.piece_at(Pos::new(3, 2)), Some(Piece::man(Player::Black)));
        assert_eq!(game.piece_at(Pos::new(4, 3)), Some(Piece::man(Player::Red)));
        assert_eq!(game.count(Player::Black), 8);
        assert_eq!(game.count(Player::Red), 7);
        assert_eq!(game.to_string(), MIXED_BOARD);
    }

    #[test]
    /// Test that the output is always exactly 71 characters.
    fn output_length() {
        for game in [Game::empty(), Game::new()] {
            assert_eq!(game.to_string().len(), BOARD_STRING_LEN);
        }
    }

    #[test]
    /// Test that a string one character short is rejected for its length.
    fn reject_short_string() {
        assert_eq!(
            Game::parse(SHORT_BOARD),
            Err(ParseError::Length { len: 70 })
        );
        assert_eq!(Game::parse(""), Err(ParseError::Length { len: 0 }));
        let long = format!("{EMPTY_BOARD}*");
        assert_eq!(Game::parse(&long), Err(ParseError::Length { len: 72 }));
    }

    #[test]
    /// Test that an unknown piece letter is rejected.
    fn reject_unknown_piece() {
        assert_eq!(
            Game::parse(UNKNOWN_PIECE_BOARD),
            Err(ParseError::InvalidSymbol {
                symbol: 'q',
                x: 3,
                y: 0
            })
        );
    }

    #[test]
    /// Test that misplaced row separators are rejected even when the length
    /// is right.
    fn reject_misplaced_separators() {
        assert_eq!(
            Game::parse(LONG_ROW_BOARD),
            Err(ParseError::OutOfBounds { x: 8, y: 6 })
        );
        assert_eq!(
            Game::parse(EXTRA_ROW_BOARD),
            Err(ParseError::RowWidth { y: 7, width: 7 })
        );
    }

    #[test]
    /// Test that a rejected string never yields a game.
    fn rejection_is_total() {
        let mut s = String::from(START_BOARD);
        s.replace_range(70..71, "x");
        assert!(Game::parse(&s).is_err());
    }

    #[test]
    /// Test that adding and removing pieces is reflected in the output.
    fn add_and_remove() {
        let mut game = Game::empty();
        let pos = Pos::new(2, 3);
        assert_eq!(game.add_piece(pos, Piece::man(Player::Red)), None);
        assert_eq!(
            game.add_piece(pos, Piece::king(Player::Red)),
            Some(Piece::man(Player::Red))
        );
        assert_eq!(game.to_string(), RED_KING_BOARD);
        assert_eq!(game.remove_piece(pos), Some(Piece::king(Player::Red)));
        assert_eq!(game.remove_piece(pos), None);
        assert_eq!(game.to_string(), EMPTY_BOARD);
    }

    #[test]
    /// Test that the parsed turn is Black, and that changing it does not
    /// change the board string.
    fn turn_is_not_serialized() {
        let mut game = Game::parse(MIXED_BOARD).unwrap();
        assert_eq!(game.turn, Player::Black);
        game.turn = !game.turn;
        assert_eq!(game.to_string(), MIXED_BOARD);
        assert_eq!(Game::parse(&game.to_string()).unwrap().turn, Player::Black);
    }

    #[test]
    /// Test that random board strings are written back out exactly as they
    /// were read.
    fn random_round_trips() {
        const SYMBOLS: [char; 5] = ['r', 'b', 'R', 'B', EMPTY_CODE];
        fastrand::seed(12345);
        for _ in 0..500 {
            let rows: Vec<String> = (0..BOARD_DIM)
                .map(|_| {
                    (0..BOARD_DIM)
                        .map(|_| SYMBOLS[fastrand::usize(..SYMBOLS.len())])
                        .collect()
                })
                .collect();
            let s = rows.join(ROW_SEP.to_string().as_str());
            assert_eq!(s.len(), BOARD_STRING_LEN);
            let game = Game::parse(&s).unwrap();
            let filled = s.chars().filter(|&c| c != EMPTY_CODE && c != ROW_SEP).count();
            assert_eq!(game.pieces.len(), filled);
            assert_eq!(game.to_string(), s);
        }
    }
}
