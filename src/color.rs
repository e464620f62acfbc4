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

use std::{error::Error, fmt, ops, str::FromStr};

use crate::{role::Role, square::Rank, types::Piece};

/// `Red` or `Black`. Red moves first.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Color {
    Black = 0,
    Red = 1,
}

impl Color {
    #[inline]
    pub fn from_red(red: bool) -> Color {
        if red {
            Color::Red
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn fold<T>(self, red: T, black: T) -> T {
        match self {
            Color::Red => red,
            Color::Black => black,
        }
    }

    #[inline]
    pub fn is_red(self) -> bool {
        self == Color::Red
    }
    #[inline]
    pub fn is_black(self) -> bool {
        self == Color::Black
    }

    /// The back rank of this side: row 9 for Red, row 0 for Black.
    #[inline]
    pub fn backrank(self) -> Rank {
        self.fold(Rank::new(9), Rank::new(0))
    }

    pub fn char(self) -> char {
        self.fold('r', 'b')
    }

    #[inline]
    pub fn general(self) -> Piece {
        Role::General.of(self)
    }
    #[inline]
    pub fn advisor(self) -> Piece {
        Role::Advisor.of(self)
    }
    #[inline]
    pub fn elephant(self) -> Piece {
        Role::Elephant.of(self)
    }
    #[inline]
    pub fn horse(self) -> Piece {
        Role::Horse.of(self)
    }
    #[inline]
    pub fn chariot(self) -> Piece {
        Role::Chariot.of(self)
    }
    #[inline]
    pub fn cannon(self) -> Piece {
        Role::Cannon.of(self)
    }
    #[inline]
    pub fn pawn(self) -> Piece {
        Role::Pawn.of(self)
    }

    /// `Red` and `Black`, in this order.
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];
}

impl ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.fold(Color::Black, Color::Red)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("red", "black"))
    }
}

/// Error when parsing an invalid color name.
#[derive(Clone, Debug)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid color")
    }
}

impl Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Color, ParseColorError> {
        Ok(match s {
            "red" => Color::Red,
            "black" => Color::Black,
            _ => return Err(ParseColorError),
        })
    }
}

/// Container with values for each [`Color`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct ByColor<T> {
    pub red: T,
    pub black: T,
}

impl<T> ByColor<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> ByColor<T>
    where
        F: FnMut(Color) -> T,
    {
        ByColor {
            red: init(Color::Red),
            black: init(Color::Black),
        }
    }

    #[inline]
    pub fn by_color(&self, color: Color) -> &T {
        match color {
            Color::Red => &self.red,
            Color::Black => &self.black,
        }
    }

    #[inline]
    pub fn by_color_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Red => &mut self.red,
            Color::Black => &mut self.black,
        }
    }

    #[inline]
    pub fn into_color(self, color: Color) -> T {
        match color {
            Color::Red => self.red,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn map<U, F>(self, mut f: F) -> ByColor<U>
    where
        F: FnMut(T) -> U,
    {
        ByColor {
            red: f(self.red),
            black: f(self.black),
        }
    }
}
