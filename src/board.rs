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

//! The piece placement on the 9x10 board.

use std::fmt;

use crate::{
    color::{ByColor, Color},
    role::Role,
    square::{File, Rank, Square},
    types::Piece,
};

/// The board part of the FEN for the standard starting position.
pub const STARTING_BOARD_FEN: &str =
    "rheagaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAGAEHR";

/// The piece placement: at most one piece on each of the 90 squares.
///
/// The board keeps track of where each side's General stands. The cache is
/// maintained inside [`Board::set_piece_at`] and [`Board::remove_piece_at`],
/// so it cannot desynchronize from the grid.
///
/// # Examples
///
/// ```
/// use xiangqi::{Board, Color, Role};
///
/// let board = Board::new(); // standard starting position
/// let general = board.piece_at("e1".parse()?).unwrap();
/// assert_eq!(general.color, Color::Red);
/// assert_eq!(general.role, Role::General);
/// # Ok::<_, xiangqi::ParseSquareError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    pieces: [Option<Piece>; 90],
    generals: ByColor<Option<Square>>,
}

impl Board {
    /// An empty board.
    pub fn empty() -> Board {
        Board {
            pieces: [None; 90],
            generals: ByColor::default(),
        }
    }

    /// The standard starting position: two Chariots, Horses, Elephants,
    /// Advisors and Cannons, one General and five Pawns per side.
    pub fn new() -> Board {
        const BACK_RANK: [Role; 9] = [
            Role::Chariot,
            Role::Horse,
            Role::Elephant,
            Role::Advisor,
            Role::General,
            Role::Advisor,
            Role::Elephant,
            Role::Horse,
            Role::Chariot,
        ];

        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.backrank();
            // Rank offsets count from the back rank toward the river.
            let forward = color.fold(-1, 1);
            let relative = |offset: i32| {
                Rank::new((back.index() as i32 + forward * offset) as u32)
            };

            for (file, role) in BACK_RANK.into_iter().enumerate() {
                let sq = Square::from_coords(File::new(file as u32), back);
                board.set_piece_at(sq, role.of(color));
            }
            for file in [File::B, File::H] {
                board.set_piece_at(Square::from_coords(file, relative(2)), color.cannon());
            }
            for file in [File::A, File::C, File::E, File::G, File::I] {
                board.set_piece_at(Square::from_coords(file, relative(3)), color.pawn());
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pieces[sq.index()]
    }

    /// Puts a piece on a square, discarding any piece that was there.
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.remove_piece_at(sq);
        self.pieces[sq.index()] = Some(piece);
        if piece.role == Role::General {
            *self.generals.by_color_mut(piece.color) = Some(sq);
        }
    }

    /// Takes the piece off a square, returning it.
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.pieces[sq.index()].take();
        if let Some(piece) = piece {
            if piece.role == Role::General {
                let cached = self.generals.by_color_mut(piece.color);
                if *cached == Some(sq) {
                    *cached = None;
                }
            }
        }
        piece
    }

    /// The square of the given side's General, or `None` if it is not on
    /// the board.
    #[inline]
    pub fn general_of(&self, color: Color) -> Option<Square> {
        *self.generals.by_color(color)
    }

    /// Iterates over all pieces in square index order: files ascending
    /// within ranks ascending from Black's back rank.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| piece.map(|piece| (Square::new(index as u32), piece)))
    }

    /// The number of pieces on the board.
    pub fn count(&self) -> usize {
        self.pieces.iter().filter(|piece| piece.is_some()).count()
    }

    /// Parses the board part of a FEN, e.g.
    /// `rheagaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAGAEHR`.
    /// Black's back rank comes first, uppercase letters are Red.
    pub fn from_board_fen(board_fen: &str) -> Option<Board> {
        let mut board = Board::empty();
        let mut rank = 0u32;
        let mut file = 0u32;

        for ch in board_fen.chars() {
            match ch {
                '/' => {
                    if file != 9 || rank >= 9 {
                        return None;
                    }
                    file = 0;
                    rank += 1;
                }
                '1'..='9' => {
                    file += ch.to_digit(10).expect("digit");
                    if file > 9 {
                        return None;
                    }
                }
                _ => {
                    if file >= 9 {
                        return None;
                    }
                    let piece = Piece::from_char(ch)?;
                    board.set_piece_at(
                        Square::from_coords(File::new(file), Rank::new(rank)),
                        piece,
                    );
                    file += 1;
                }
            }
        }

        if rank == 9 && file == 9 {
            Some(board)
        } else {
            None
        }
    }

    /// Writes the board part of a FEN.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for rank in Rank::ALL {
            let mut empty = 0;
            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank.index() < 9 {
                fen.push('/');
            }
        }
        fen
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL {
            write!(f, "{:>2}", rank.number())?;
            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => write!(f, " {}", piece.char())?,
                    None => f.write_str(" .")?,
                }
            }
            writeln!(f)?;
        }
        f.write_str("  ")?;
        for file in File::ALL {
            write!(f, " {}", file.char())?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_fen() {
        assert_eq!(Board::new().board_fen(), STARTING_BOARD_FEN);
        assert_eq!(Board::from_board_fen(STARTING_BOARD_FEN), Some(Board::new()));
    }

    #[test]
    fn test_rejects_malformed_fen() {
        for fen in [
            "",
            "rheagaehr",
            "rheagaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9",
            "rheagaehr/10/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAGAEHR",
            "rheagaehrr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAGAEHR",
            "rheaqaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAGAEHR",
        ] {
            assert_eq!(Board::from_board_fen(fen), None, "accepted {fen:?}");
        }
    }

    #[test]
    fn test_general_cache() {
        let mut board = Board::new();
        assert_eq!(board.general_of(Color::Red), Some("e1".parse().unwrap()));
        assert_eq!(board.general_of(Color::Black), Some("e10".parse().unwrap()));

        let general = board.remove_piece_at("e1".parse().unwrap()).unwrap();
        assert_eq!(board.general_of(Color::Red), None);

        board.set_piece_at("e2".parse().unwrap(), general);
        assert_eq!(board.general_of(Color::Red), Some("e2".parse().unwrap()));
        assert_eq!(board.general_of(Color::Black), Some("e10".parse().unwrap()));
    }

    #[test]
    fn test_count() {
        assert_eq!(Board::new().count(), 32);
        assert_eq!(Board::empty().count(), 0);
    }
}
