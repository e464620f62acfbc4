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

use std::{error::Error, fmt, str::FromStr};

use crate::color::Color;

/// A file (column) of the 9x10 board, indexed 0 to 8 and lettered `a` to
/// `i` from Red's left.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct File(u8);

impl File {
    /// Gets a `File` from an index between 0 and 8.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=8`.
    #[inline]
    pub const fn new(index: u32) -> File {
        assert!(index < 9);
        File(index as u8)
    }

    pub const fn from_char(ch: char) -> Option<File> {
        if 'a' <= ch && ch <= 'i' {
            Some(File(ch as u8 - b'a'))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0 as u32
    }

    pub const fn char(self) -> char {
        (b'a' + self.0) as char
    }

    #[allow(missing_docs)]
    pub const A: File = File(0);
    #[allow(missing_docs)]
    pub const B: File = File(1);
    #[allow(missing_docs)]
    pub const C: File = File(2);
    #[allow(missing_docs)]
    pub const D: File = File(3);
    #[allow(missing_docs)]
    pub const E: File = File(4);
    #[allow(missing_docs)]
    pub const F: File = File(5);
    #[allow(missing_docs)]
    pub const G: File = File(6);
    #[allow(missing_docs)]
    pub const H: File = File(7);
    #[allow(missing_docs)]
    pub const I: File = File(8);

    /// All files, from `a` to `i`.
    pub const ALL: [File; 9] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
        File::I,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A rank (row) of the 9x10 board. Row index 0 is Black's back rank and row
/// index 9 is Red's back rank; the displayed rank number counts the other
/// way, from `1` at Red's edge to `10` at Black's edge.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Rank(u8);

impl Rank {
    /// Gets a `Rank` from a row index between 0 and 9.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=9`.
    #[inline]
    pub const fn new(index: u32) -> Rank {
        assert!(index < 10);
        Rank(index as u8)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0 as u32
    }

    /// The displayed rank number, `10 - index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xiangqi::Rank;
    ///
    /// assert_eq!(Rank::new(9).number(), 1); // Red's back rank
    /// assert_eq!(Rank::new(0).number(), 10); // Black's back rank
    /// ```
    #[inline]
    pub const fn number(self) -> u32 {
        10 - self.0 as u32
    }

    /// Gets a `Rank` from a displayed rank number between 1 and 10.
    pub const fn from_number(number: u32) -> Option<Rank> {
        if 1 <= number && number <= 10 {
            Some(Rank((10 - number) as u8))
        } else {
            None
        }
    }

    /// All ranks, in row index order from Black's back rank to Red's.
    pub const ALL: [Rank; 10] = [
        Rank(0),
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A square of the 9x10 board.
///
/// Squares are addressed by a lowercase file letter followed by a rank
/// number, `a1` to `i10`, where `a1` is the left end of Red's back rank.
///
/// # Examples
///
/// ```
/// use xiangqi::Square;
///
/// let sq: Square = "b1".parse()?;
/// assert_eq!(sq.file().index(), 1);
/// assert_eq!(sq.rank().index(), 9);
/// # Ok::<_, xiangqi::ParseSquareError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets a `Square` from an index between 0 and 89.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=89`.
    #[inline]
    pub const fn new(index: u32) -> Square {
        assert!(index < 90);
        Square(index as u8)
    }

    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square(rank.0 * 9 + file.0)
    }

    #[inline]
    pub const fn file(self) -> File {
        File(self.0 % 9)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank(self.0 / 9)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square shifted by the given file and rank deltas, or `None` if
    /// the result falls outside the board.
    ///
    /// Rank deltas count in row indexes, so a positive `d_rank` moves
    /// toward Red's edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use xiangqi::Square;
    ///
    /// let sq: Square = "e4".parse()?;
    /// assert_eq!(sq.offset(0, -1), Some("e5".parse()?));
    /// assert_eq!(sq.offset(-5, 0), None);
    /// # Ok::<_, xiangqi::ParseSquareError>(())
    /// ```
    #[must_use]
    pub fn offset(self, d_file: i32, d_rank: i32) -> Option<Square> {
        let file = self.file().index() as i32 + d_file;
        let rank = self.rank().index() as i32 + d_rank;
        if (0..9).contains(&file) && (0..10).contains(&rank) {
            Some(Square::from_coords(
                File::new(file as u32),
                Rank::new(rank as u32),
            ))
        } else {
            None
        }
    }

    /// Whether the square lies inside the palace (fortress) of the given
    /// side: files `d` to `f` intersected with the three rows nearest that
    /// side's back rank.
    pub const fn in_palace(self, color: Color) -> bool {
        let file = self.file().index();
        let rank = self.rank().index();
        3 <= file
            && file <= 5
            && match color {
                Color::Red => 7 <= rank,
                Color::Black => rank <= 2,
            }
    }

    /// Whether the square lies on the given side's own half of the board,
    /// i.e. has not crossed the river.
    pub const fn behind_river(self, color: Color) -> bool {
        match color {
            Color::Red => 5 <= self.rank().index(),
            Color::Black => self.rank().index() <= 4,
        }
    }

    /// Parses a square from ASCII bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not a valid square name.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        if s.len() < 2 || 3 < s.len() {
            return Err(ParseSquareError);
        }
        let file = File::from_char(char::from(s[0])).ok_or(ParseSquareError)?;
        let number: u32 = btoi::btou(&s[1..]).map_err(|_| ParseSquareError)?;
        // Three characters are only ever needed for rank 10. This also
        // rejects zero-padded forms like `a01`.
        if s.len() == 3 && number != 10 {
            return Err(ParseSquareError);
        }
        let rank = Rank::from_number(number).ok_or(ParseSquareError)?;
        Ok(Square::from_coords(file, rank))
    }

    /// All 90 squares, in index order: files ascending within ranks
    /// ascending from Black's back rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..90).map(Square::new)
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().char().to_ascii_uppercase(), self.rank())
    }
}
