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

use std::num;

use crate::{color::Color, types::Piece, util::overflow_error};

/// Piece types: `Pawn`, `Cannon`, `Chariot`, `Horse`, `Elephant`, `Advisor`,
/// `General`.
///
/// # Examples
///
/// ```
/// use xiangqi::Role;
///
/// // Piece types are indexed from 1 to 7.
/// assert_eq!(u32::from(Role::Pawn), 1);
/// assert_eq!(u32::from(Role::General), 7);
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    Pawn = 1,
    Cannon = 2,
    Chariot = 3,
    Horse = 4,
    Elephant = 5,
    Advisor = 6,
    General = 7,
}

impl Role {
    /// Gets the piece type from its letter identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use xiangqi::Role;
    ///
    /// assert_eq!(Role::from_char('G'), Some(Role::General));
    /// assert_eq!(Role::from_char('h'), Some(Role::Horse));
    ///
    /// assert_eq!(Role::from_char('X'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'P' | 'p' => Some(Self::Pawn),
            'C' | 'c' => Some(Self::Cannon),
            'R' | 'r' => Some(Self::Chariot),
            'H' | 'h' => Some(Self::Horse),
            'E' | 'e' => Some(Self::Elephant),
            'A' | 'a' => Some(Self::Advisor),
            'G' | 'g' => Some(Self::General),
            _ => None,
        }
    }

    /// Gets a [`Piece`] of the given color.
    ///
    /// # Examples
    ///
    /// ```
    /// use xiangqi::{Color, Role};
    ///
    /// assert_eq!(Role::General.of(Color::Black), Color::Black.general());
    /// ```
    #[inline]
    pub const fn of(self, color: Color) -> Piece {
        Piece { color, role: self }
    }

    /// Gets the lowercase letter for the piece type. The Chariot uses `r`,
    /// leaving `c` for the Cannon.
    pub const fn char(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Cannon => 'c',
            Self::Chariot => 'r',
            Self::Horse => 'h',
            Self::Elephant => 'e',
            Self::Advisor => 'a',
            Self::General => 'g',
        }
    }

    /// Gets the uppercase letter for the piece type.
    ///
    /// # Examples
    ///
    /// ```
    /// use xiangqi::Role;
    ///
    /// assert_eq!(Role::Chariot.upper_char(), 'R');
    /// ```
    pub const fn upper_char(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Cannon => 'C',
            Self::Chariot => 'R',
            Self::Horse => 'H',
            Self::Elephant => 'E',
            Self::Advisor => 'A',
            Self::General => 'G',
        }
    }

    /// `Pawn`, `Cannon`, `Chariot`, `Horse`, `Elephant`, `Advisor`, and
    /// `General`, in this order.
    pub const ALL: [Self; 7] = [
        Self::Pawn,
        Self::Cannon,
        Self::Chariot,
        Self::Horse,
        Self::Elephant,
        Self::Advisor,
        Self::General,
    ];
}

macro_rules! int_from_role_impl {
    ($($t:ty)+) => {
        $(impl From<Role> for $t {
            #[inline]
            fn from(role: Role) -> Self {
                role as Self
            }
        })+
    }
}

int_from_role_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

macro_rules! try_role_from_int_impl {
    ($($t:ty)+) => {
        $(impl std::convert::TryFrom<$t> for Role {
            type Error = num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<Self, Self::Error> {
                Ok(match value {
                    1 => Self::Pawn,
                    2 => Self::Cannon,
                    3 => Self::Chariot,
                    4 => Self::Horse,
                    5 => Self::Elephant,
                    6 => Self::Advisor,
                    7 => Self::General,
                    _ => return Err(overflow_error()),
                })
            }
        })+
    }
}

try_role_from_int_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
