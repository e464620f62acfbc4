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

use std::fmt::{self, Write as _};

use arrayvec::ArrayVec;

use crate::{color::Color, role::Role, square::Square};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// The letter identifier of the piece, uppercase for Red.
    pub fn char(self) -> char {
        self.color
            .fold(self.role.upper_char(), self.role.char())
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| role.of(Color::from_red(ch.is_ascii_uppercase())))
    }
}

/// Information about a move.
///
/// Xiangqi has no castling, en passant, promotions or drops, so every move
/// relocates one piece and captures at most the piece on the destination.
///
/// # Display
///
/// `Move` implements [`fmt::Display`] using long algebraic notation, e.g.
/// `Hb1-c3` or `Cb3xb10`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    /// The kind of the moved piece.
    pub role: Role,
    /// The origin square.
    pub from: Square,
    /// The kind of the captured piece, if any.
    pub capture: Option<Role>,
    /// The destination square.
    pub to: Square,
}

impl Move {
    /// Checks if the move is a capture.
    pub const fn is_capture(self) -> bool {
        self.capture.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.role != Role::Pawn {
            f.write_char(self.role.upper_char())?;
        }
        write!(
            f,
            "{}{}{}",
            self.from,
            if self.capture.is_some() { 'x' } else { '-' },
            self.to
        )
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is limited, but there is enough space to hold the legal
/// moves of any Xiangqi position.
///
/// # Example
///
/// ```
/// use xiangqi::{Role, Xiangqi};
///
/// let pos = Xiangqi::default();
/// let mut moves = pos.legal_moves();
/// moves.retain(|m| m.role == Role::Cannon);
/// assert_eq!(moves.len(), 24);
/// ```
pub type MoveList = ArrayVec<Move, 128>;
