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

//! Parse and write FENs.

use std::{error::Error, fmt, num::NonZeroU32, str::FromStr};

use crate::{
    board::Board,
    color::Color,
    position::{PositionError, Xiangqi},
};

/// A FEN record: board, side to move and move counters.
///
/// The third and fourth fields of a chess FEN have no Xiangqi meaning and
/// are written and accepted as `-` placeholders.
///
/// # Examples
///
/// ```
/// use xiangqi::fen::Fen;
///
/// let fen: Fen = "rheagaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAGAEHR r - - 0 1"
///     .parse()?;
/// let pos = fen.into_position()?;
/// assert_eq!(pos.legal_moves().len(), 44);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Fen {
    pub board: Board,
    pub turn: Color,
    pub halfmoves: u32,
    pub fullmoves: NonZeroU32,
}

impl Fen {
    /// The FEN of the empty board with Red to move.
    pub fn empty() -> Fen {
        Fen {
            board: Board::empty(),
            ..Fen::default()
        }
    }

    pub fn from_position(pos: &Xiangqi) -> Fen {
        Fen {
            board: pos.board().clone(),
            turn: pos.turn(),
            ..Fen::default()
        }
    }

    /// Validates the record and constructs a position.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] if the board and side to move do not form
    /// a legal position.
    pub fn into_position(self) -> Result<Xiangqi, PositionError> {
        Xiangqi::from_setup(self.board, self.turn)
    }
}

impl Default for Fen {
    fn default() -> Fen {
        Fen {
            board: Board::new(),
            turn: Color::Red,
            halfmoves: 0,
            fullmoves: NonZeroU32::MIN,
        }
    }
}

/// Error when parsing an invalid FEN.
#[derive(Clone, Debug)]
pub enum ParseFenError {
    InvalidBoard,
    InvalidTurn,
    InvalidHalfmoveClock,
    InvalidFullmoves,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseFenError::InvalidBoard => "invalid board part in fen",
            ParseFenError::InvalidTurn => "invalid turn part in fen",
            ParseFenError::InvalidHalfmoveClock => "invalid halfmove clock in fen",
            ParseFenError::InvalidFullmoves => "invalid fullmove counter in fen",
        })
    }
}

impl Error for ParseFenError {}

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Fen, ParseFenError> {
        let mut parts = s.split(' ');

        let board = parts
            .next()
            .and_then(Board::from_board_fen)
            .ok_or(ParseFenError::InvalidBoard)?;

        let turn = match parts.next() {
            None | Some("r") | Some("w") => Color::Red,
            Some("b") => Color::Black,
            Some(_) => return Err(ParseFenError::InvalidTurn),
        };

        // Castling and en passant fields carried over from chess FENs.
        for _ in 0..2 {
            match parts.next() {
                None | Some("-") => (),
                Some(_) => return Err(ParseFenError::InvalidBoard),
            }
        }

        let halfmoves = match parts.next() {
            None => 0,
            Some(part) => btoi::btou(part.as_bytes())
                .map_err(|_| ParseFenError::InvalidHalfmoveClock)?,
        };

        let fullmoves = match parts.next() {
            None => NonZeroU32::MIN,
            Some(part) => btoi::btou(part.as_bytes())
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or(ParseFenError::InvalidFullmoves)?,
        };

        if parts.next().is_some() {
            return Err(ParseFenError::InvalidBoard);
        }

        Ok(Fen {
            board,
            turn,
            halfmoves,
            fullmoves,
        })
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - - {} {}",
            self.board.board_fen(),
            self.turn.char(),
            self.halfmoves,
            self.fullmoves
        )
    }
}
