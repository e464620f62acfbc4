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

//! Count legal move paths.

use crate::position::Xiangqi;

/// Counts legal move paths of a given length.
///
/// Useful to test the correctness and performance of move generation.
///
/// # Examples
///
/// ```
/// use xiangqi::{perft, Xiangqi};
///
/// let pos = Xiangqi::default();
/// assert_eq!(perft(&pos, 1), 44);
/// assert_eq!(perft(&pos, 2), 1920);
/// ```
pub fn perft(pos: &Xiangqi, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = pos.legal_moves();
        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .map(|m| {
                    let mut child = pos.clone();
                    child.play_unchecked(*m);
                    perft(&child, depth - 1)
                })
                .sum()
        }
    }
}
