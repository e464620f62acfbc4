// This file is part of the xiangqi library.
// Copyright (C) 2026 The xiangqi authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt};

use bitflags::bitflags;

use crate::{
    attacks::{self, Destinations},
    board::Board,
    color::Color,
    role::Role,
    square::Square,
    types::{Move, MoveList},
};

/// A Xiangqi position: the board and the side to move.
///
/// # Examples
///
/// ```
/// use xiangqi::Xiangqi;
///
/// let pos = Xiangqi::default();
/// assert_eq!(pos.legal_moves().len(), 44);
/// assert!(!pos.is_check());
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Xiangqi {
    board: Board,
    turn: Color,
}

impl Default for Xiangqi {
    fn default() -> Xiangqi {
        Xiangqi {
            board: Board::new(),
            turn: Color::Red,
        }
    }
}

impl Xiangqi {
    /// Validates a board and side to move and constructs a position.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] if the setup is not a legal position.
    /// A face-off of the two Generals counts as the side not to move being
    /// in check and can be waived with
    /// [`PositionError::ignore_opposite_check`].
    pub fn from_setup(board: Board, turn: Color) -> Result<Xiangqi, PositionError> {
        let pos = Xiangqi { board, turn };
        let mut kinds = PositionErrorKinds::empty();

        if pos.board.count() == 0 {
            kinds |= PositionErrorKinds::EMPTY_BOARD;
        }
        for color in Color::ALL {
            let generals = pos
                .board
                .pieces()
                .filter(|(_, piece)| *piece == color.general())
                .count();
            if generals == 0 {
                kinds |= PositionErrorKinds::MISSING_GENERAL;
            } else if generals > 1 {
                kinds |= PositionErrorKinds::TOO_MANY_GENERALS;
            }
        }
        for (sq, piece) in pos.board.pieces() {
            if piece.role == Role::General && !sq.in_palace(piece.color) {
                kinds |= PositionErrorKinds::GENERAL_OUTSIDE_PALACE;
            }
        }
        if !kinds.intersects(
            PositionErrorKinds::MISSING_GENERAL | PositionErrorKinds::TOO_MANY_GENERALS,
        ) && board_in_check(&pos.board, !pos.turn)
        {
            kinds |= PositionErrorKinds::OPPOSITE_CHECK;
        }

        if kinds.is_empty() {
            Ok(pos)
        } else {
            Err(PositionError { pos, kinds })
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Checks if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.in_check(self.turn)
    }

    /// Checks if the given side's General is attacked: some enemy piece has
    /// a pseudo-legal move onto its square. Two Generals facing each other
    /// over an open file count, through the flying-general move.
    ///
    /// # Panics
    ///
    /// Panics if the given side has no General on the board. Validated
    /// positions always have one; a board edited by hand is the caller's
    /// responsibility.
    pub fn in_check(&self, color: Color) -> bool {
        board_in_check(&self.board, color)
    }

    /// The legal destination squares of the piece on `from`, for whichever
    /// side it belongs to, or an empty list for an empty square.
    ///
    /// A pseudo-legal destination is kept by simulating the move on a
    /// scratch copy of the board and discarding it if the mover's own
    /// General ends up attacked. This position is never mutated.
    pub fn legal_destinations(&self, from: Square) -> Destinations {
        let Some(piece) = self.board.piece_at(from) else {
            return Destinations::new();
        };
        let mut out = attacks::pseudo_legal_from(&self.board, from);
        out.retain(|to| {
            let mut scratch = self.board.clone();
            scratch.remove_piece_at(from);
            scratch.set_piece_at(*to, piece);
            !board_in_check(&scratch, piece.color)
        });
        out
    }

    /// Generates all legal moves for the side to move, in square index
    /// order of the origin square.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.board.pieces() {
            if piece.color != self.turn {
                continue;
            }
            for to in self.legal_destinations(from) {
                moves.push(Move {
                    role: piece.role,
                    from,
                    capture: self.board.piece_at(to).map(|captured| captured.role),
                    to,
                });
            }
        }
        moves
    }

    /// Tests a move for legality.
    pub fn is_legal(&self, m: Move) -> bool {
        self.board.piece_at(m.from) == Some(m.role.of(self.turn))
            && self.board.piece_at(m.to).map(|captured| captured.role) == m.capture
            && self.legal_destinations(m.from).contains(&m.to)
    }

    /// Validates and plays a move.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the move is not legal, leaving no trace of
    /// it on the position.
    pub fn play(mut self, m: Move) -> Result<Xiangqi, PlayError> {
        if self.is_legal(m) {
            self.play_unchecked(m);
            Ok(self)
        } else {
            Err(PlayError { m })
        }
    }

    /// Plays a move without checking legality: relocates the piece,
    /// discarding any captured piece, and flips the side to move.
    ///
    /// Playing a move that is not legal in this position leaves the
    /// position in an unspecified state; callers either validate with
    /// [`Xiangqi::play`] or iterate a precomputed
    /// [`Xiangqi::legal_moves`] list.
    pub fn play_unchecked(&mut self, m: Move) {
        if let Some(piece) = self.board.remove_piece_at(m.from) {
            self.board.set_piece_at(m.to, piece);
        }
        self.turn = !self.turn;
    }
}

/// The check detector. Bottoms out at pseudo-legal generation: it must not
/// consult the legality filter, which itself is defined in terms of this
/// function.
fn board_in_check(board: &Board, color: Color) -> bool {
    let general = board.general_of(color).expect("general on the board");
    board
        .pieces()
        .filter(|(_, piece)| piece.color != color)
        .any(|(sq, _)| attacks::pseudo_legal_from(board, sq).contains(&general))
}

bitflags! {
    /// Reasons for a [`PositionError`].
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 0;

        /// A side has no General.
        const MISSING_GENERAL = 1 << 1;

        /// A side has more than one General.
        const TOO_MANY_GENERALS = 1 << 2;

        /// A General stands outside its own palace.
        const GENERAL_OUTSIDE_PALACE = 1 << 3;

        /// The side not to move is in check.
        const OPPOSITE_CHECK = 1 << 4;
    }
}

/// Error when constructing an illegal position.
#[derive(Clone, Debug)]
pub struct PositionError {
    pos: Xiangqi,
    kinds: PositionErrorKinds,
}

impl PositionError {
    pub fn kinds(&self) -> PositionErrorKinds {
        self.kinds
    }

    /// Gets the position despite the side not to move being in check, e.g.
    /// to inspect a constructed face-off of the two Generals.
    ///
    /// # Errors
    ///
    /// Returns `self` if there were other errors as well.
    pub fn ignore_opposite_check(self) -> Result<Xiangqi, PositionError> {
        let kinds = self.kinds - PositionErrorKinds::OPPOSITE_CHECK;
        if kinds.is_empty() {
            Ok(self.pos)
        } else {
            Err(PositionError { kinds, ..self })
        }
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal position: ")?;
        let mut first = true;
        for (kind, description) in [
            (PositionErrorKinds::EMPTY_BOARD, "empty board"),
            (PositionErrorKinds::MISSING_GENERAL, "missing general"),
            (PositionErrorKinds::TOO_MANY_GENERALS, "too many generals"),
            (
                PositionErrorKinds::GENERAL_OUTSIDE_PALACE,
                "general outside palace",
            ),
            (PositionErrorKinds::OPPOSITE_CHECK, "opposite check"),
        ] {
            if self.kinds.contains(kind) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(description)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl Error for PositionError {}

/// Error when trying to play an illegal move.
#[derive(Clone, Debug)]
pub struct PlayError {
    m: Move,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move: {}", self.m)
    }
}

impl Error for PlayError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    fn board(pieces: &[(&str, Piece)]) -> Board {
        let mut board = Board::empty();
        for (name, piece) in pieces {
            board.set_piece_at(sq(name), *piece);
        }
        board
    }

    #[test]
    fn test_default_position() {
        let pos = Xiangqi::default();
        assert_eq!(pos.turn(), Color::Red);
        assert!(!pos.is_check());
        assert!(!pos.in_check(Color::Black));
    }

    #[test]
    fn test_play_validates() {
        let pos = Xiangqi::default();
        let illegal = Move {
            role: Role::General,
            from: sq("e1"),
            capture: None,
            to: sq("e3"),
        };
        assert!(pos.clone().play(illegal).is_err());

        let legal = Move {
            role: Role::Horse,
            from: sq("b1"),
            capture: None,
            to: sq("c3"),
        };
        let pos = pos.play(legal).expect("legal move");
        assert_eq!(pos.turn(), Color::Black);
    }

    #[test]
    fn test_missing_general() {
        let setup = board(&[("e1", Color::Red.general())]);
        let err = Xiangqi::from_setup(setup, Color::Red).unwrap_err();
        assert!(err.kinds().contains(PositionErrorKinds::MISSING_GENERAL));
        assert!(err.ignore_opposite_check().is_err());
    }

    #[test]
    fn test_empty_board() {
        let err = Xiangqi::from_setup(Board::empty(), Color::Red).unwrap_err();
        assert!(err.kinds().contains(PositionErrorKinds::EMPTY_BOARD));
        assert!(err.kinds().contains(PositionErrorKinds::MISSING_GENERAL));
    }

    #[test]
    fn test_general_outside_palace() {
        let setup = board(&[
            ("e1", Color::Red.general()),
            ("a10", Color::Black.general()),
        ]);
        let err = Xiangqi::from_setup(setup, Color::Red).unwrap_err();
        assert!(err
            .kinds()
            .contains(PositionErrorKinds::GENERAL_OUTSIDE_PALACE));
    }

    #[test]
    fn test_opposite_check_waiver() {
        let setup = board(&[
            ("e1", Color::Red.general()),
            ("e10", Color::Black.general()),
        ]);
        let err = Xiangqi::from_setup(setup.clone(), Color::Red).unwrap_err();
        assert_eq!(err.kinds(), PositionErrorKinds::OPPOSITE_CHECK);

        let pos = Xiangqi::from_setup(setup, Color::Red)
            .or_else(PositionError::ignore_opposite_check)
            .expect("waived");
        assert!(pos.in_check(Color::Red));
        assert!(pos.in_check(Color::Black));
    }
}
