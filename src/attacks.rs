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

//! Pseudo-legal destination generation for each piece kind.
//!
//! A pseudo-legal move follows the piece's movement pattern and blocking
//! rules, but may still leave the mover's own General attacked; the
//! [position](crate::Xiangqi) layer filters those out. Destinations are
//! produced in a fixed per-kind direction order, so results are
//! deterministic.
//!
//! # Examples
//!
//! ```
//! use xiangqi::{attacks, Board, Color};
//!
//! let board = Board::new();
//! let moves = attacks::pseudo_legal_moves(&board, "b3".parse()?, Color::Red.cannon())?;
//! // The Cannon may jump the enemy Cannon on b8 to capture the Horse
//! // on b10, the only screen capture in the starting position.
//! assert!(moves.contains(&"b10".parse()?));
//! assert_eq!(moves.len(), 12);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::{error::Error, fmt};

use arrayvec::ArrayVec;

use crate::{
    board::Board,
    color::Color,
    role::Role,
    square::Square,
    types::Piece,
};

/// An inline container for the destination squares of a single piece. A
/// Chariot in a board corner reaches at most 17 squares, the most of any
/// kind.
pub type Destinations = ArrayVec<Square, 18>;

const ORTHOGONALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The four orthogonal leg squares a Horse steps over, each guarding two
/// destinations.
const HORSE_LEGS: [((i32, i32), [(i32, i32); 2]); 4] = [
    ((1, 0), [(2, -1), (2, 1)]),
    ((-1, 0), [(-2, -1), (-2, 1)]),
    ((0, 1), [(-1, 2), (1, 2)]),
    ((0, -1), [(1, -2), (-1, -2)]),
];

/// Error when generating moves for a square that does not hold the claimed
/// piece. This signals a mismatch between caller and board, not a rule
/// violation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PieceMismatchError;

impl fmt::Display for PieceMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("square does not hold the claimed piece")
    }
}

impl Error for PieceMismatchError {}

/// Generates the pseudo-legal destinations of the piece on `from`.
///
/// # Errors
///
/// Returns [`PieceMismatchError`] if `from` does not hold exactly `piece`.
pub fn pseudo_legal_moves(
    board: &Board,
    from: Square,
    piece: Piece,
) -> Result<Destinations, PieceMismatchError> {
    if board.piece_at(from) != Some(piece) {
        return Err(PieceMismatchError);
    }
    Ok(moves_by_role(board, from, piece))
}

/// Pseudo-legal capture destinations.
///
/// Xiangqi has no capture-only or move-only submoves (the Cannon's screen
/// jump is already generated only onto enemy pieces), so this is the
/// pseudo-legal move set restricted to occupied destinations.
///
/// # Errors
///
/// Returns [`PieceMismatchError`] if `from` does not hold exactly `piece`.
pub fn pseudo_legal_captures(
    board: &Board,
    from: Square,
    piece: Piece,
) -> Result<Destinations, PieceMismatchError> {
    let mut moves = pseudo_legal_moves(board, from, piece)?;
    moves.retain(|to| board.piece_at(*to).is_some());
    Ok(moves)
}

/// Generates the pseudo-legal destinations of whatever piece stands on
/// `from`, or an empty list for an empty square. The check detector uses
/// this entry point.
pub fn pseudo_legal_from(board: &Board, from: Square) -> Destinations {
    board
        .piece_at(from)
        .map_or_else(Destinations::new, |piece| moves_by_role(board, from, piece))
}

fn moves_by_role(board: &Board, from: Square, piece: Piece) -> Destinations {
    match piece.role {
        Role::Pawn => pawn_moves(board, from, piece.color),
        Role::Cannon => cannon_moves(board, from, piece.color),
        Role::Chariot => chariot_moves(board, from, piece.color),
        Role::Horse => horse_moves(board, from, piece.color),
        Role::Elephant => elephant_moves(board, from, piece.color),
        Role::Advisor => advisor_moves(board, from, piece.color),
        Role::General => general_moves(board, from, piece.color),
    }
}

/// Pushes `to` if it is empty or holds an enemy piece.
fn push_step(board: &Board, color: Color, to: Square, out: &mut Destinations) {
    match board.piece_at(to) {
        None => out.push(to),
        Some(piece) => {
            if piece.color != color {
                out.push(to);
            }
        }
    }
}

/// The Chariot slides orthogonally until blocked and may capture the first
/// enemy piece it meets.
pub fn chariot_moves(board: &Board, from: Square, color: Color) -> Destinations {
    let mut out = Destinations::new();
    for (d_file, d_rank) in ORTHOGONALS {
        let mut sq = from;
        while let Some(to) = sq.offset(d_file, d_rank) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(piece) => {
                    if piece.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            sq = to;
        }
    }
    out
}

/// The Cannon slides like a Chariot onto empty squares, but captures only
/// by jumping exactly one screen piece of either side and landing on the
/// first enemy piece beyond it.
pub fn cannon_moves(board: &Board, from: Square, color: Color) -> Destinations {
    let mut out = Destinations::new();
    for (d_file, d_rank) in ORTHOGONALS {
        let mut sq = from;
        let mut screen = false;
        while let Some(to) = sq.offset(d_file, d_rank) {
            match board.piece_at(to) {
                None => {
                    if !screen {
                        out.push(to);
                    }
                }
                Some(piece) => {
                    if screen {
                        if piece.color != color {
                            out.push(to);
                        }
                        break;
                    }
                    screen = true;
                }
            }
            sq = to;
        }
    }
    out
}

/// The Horse moves one orthogonal step and one diagonal step outward; the
/// orthogonal leg square must be empty.
pub fn horse_moves(board: &Board, from: Square, color: Color) -> Destinations {
    let mut out = Destinations::new();
    for ((leg_file, leg_rank), steps) in HORSE_LEGS {
        let leg_clear = from
            .offset(leg_file, leg_rank)
            .map_or(false, |leg| board.piece_at(leg).is_none());
        if !leg_clear {
            continue;
        }
        for (d_file, d_rank) in steps {
            if let Some(to) = from.offset(d_file, d_rank) {
                push_step(board, color, to, &mut out);
            }
        }
    }
    out
}

/// The Elephant moves exactly two squares diagonally, cannot jump the
/// intermediate leg square, and may not cross the river.
pub fn elephant_moves(board: &Board, from: Square, color: Color) -> Destinations {
    let mut out = Destinations::new();
    for (d_file, d_rank) in DIAGONALS {
        let Some(leg) = from.offset(d_file, d_rank) else {
            continue;
        };
        let Some(to) = from.offset(2 * d_file, 2 * d_rank) else {
            continue;
        };
        if board.piece_at(leg).is_none() && to.behind_river(color) {
            push_step(board, color, to, &mut out);
        }
    }
    out
}

/// The Advisor moves one square diagonally and never leaves its palace.
pub fn advisor_moves(board: &Board, from: Square, color: Color) -> Destinations {
    let mut out = Destinations::new();
    for (d_file, d_rank) in DIAGONALS {
        if let Some(to) = from.offset(d_file, d_rank) {
            if to.in_palace(color) {
                push_step(board, color, to, &mut out);
            }
        }
    }
    out
}

/// The General moves one square orthogonally within its palace. If the
/// enemy General stands on the same file with nothing in between, it may
/// also fly straight across the board to capture it.
pub fn general_moves(board: &Board, from: Square, color: Color) -> Destinations {
    let mut out = Destinations::new();
    for (d_file, d_rank) in ORTHOGONALS {
        if let Some(to) = from.offset(d_file, d_rank) {
            if to.in_palace(color) {
                push_step(board, color, to, &mut out);
            }
        }
    }

    if let Some(enemy) = board.general_of(!color) {
        if enemy.file() == from.file() && open_file_between(board, from, enemy) {
            out.push(enemy);
        }
    }
    out
}

fn open_file_between(board: &Board, a: Square, b: Square) -> bool {
    let d_rank = if a.rank() < b.rank() { 1 } else { -1 };
    let mut sq = a;
    loop {
        sq = match sq.offset(0, d_rank) {
            Some(next) => next,
            None => return false,
        };
        if sq == b {
            return true;
        }
        if board.piece_at(sq).is_some() {
            return false;
        }
    }
}

/// The Pawn moves one square straight toward the enemy side; once across
/// the river it may also move one square sideways. Captures follow the same
/// pattern.
pub fn pawn_moves(board: &Board, from: Square, color: Color) -> Destinations {
    let mut out = Destinations::new();
    let forward = color.fold(-1, 1);
    if let Some(to) = from.offset(0, forward) {
        push_step(board, color, to, &mut out);
    }
    if !from.behind_river(color) {
        for d_file in [1, -1] {
            if let Some(to) = from.offset(d_file, 0) {
                push_step(board, color, to, &mut out);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    fn board(fens: &[(&str, Piece)]) -> Board {
        let mut board = Board::empty();
        for (name, piece) in fens {
            board.set_piece_at(sq(name), *piece);
        }
        board
    }

    #[test]
    fn test_piece_mismatch() {
        let board = Board::new();
        assert_eq!(
            pseudo_legal_moves(&board, sq("b1"), Color::Red.chariot()),
            Err(PieceMismatchError)
        );
        assert_eq!(
            pseudo_legal_moves(&board, sq("b1"), Color::Black.horse()),
            Err(PieceMismatchError)
        );
        assert!(pseudo_legal_moves(&board, sq("b1"), Color::Red.horse()).is_ok());
    }

    #[test]
    fn test_captures_only() {
        let b = board(&[
            ("e5", Color::Red.chariot()),
            ("e7", Color::Black.pawn()),
            ("c5", Color::Black.horse()),
        ]);
        let captures = pseudo_legal_captures(&b, sq("e5"), Color::Red.chariot()).unwrap();
        assert_eq!(captures.len(), 2);
        assert!(captures.contains(&sq("e7")));
        assert!(captures.contains(&sq("c5")));
    }

    #[test]
    fn test_chariot_blocking() {
        let board = board(&[
            ("e5", Color::Red.chariot()),
            ("e7", Color::Black.pawn()),
            ("e3", Color::Red.pawn()),
        ]);
        let moves = chariot_moves(&board, sq("e5"), Color::Red);
        assert!(moves.contains(&sq("e6")));
        assert!(moves.contains(&sq("e7"))); // capture
        assert!(!moves.contains(&sq("e8"))); // beyond the capture
        assert!(moves.contains(&sq("e4")));
        assert!(!moves.contains(&sq("e3"))); // friendly
        assert!(moves.contains(&sq("a5")));
        assert!(moves.contains(&sq("i5")));
    }

    #[test]
    fn test_cannon_screen() {
        let mut b = board(&[
            ("e4", Color::Red.cannon()),
            ("e6", Color::Red.pawn()),
            ("e8", Color::Black.chariot()),
        ]);
        let moves = cannon_moves(&b, sq("e4"), Color::Red);
        assert!(moves.contains(&sq("e5")));
        assert!(!moves.contains(&sq("e6"))); // may not capture the screen
        assert!(!moves.contains(&sq("e7"))); // may not pass the screen quietly
        assert!(moves.contains(&sq("e8"))); // screen capture

        // A second intervening piece invalidates the capture.
        b.set_piece_at(sq("e7"), Color::Black.pawn());
        let moves = cannon_moves(&b, sq("e4"), Color::Red);
        assert!(!moves.contains(&sq("e8")));
        assert!(moves.contains(&sq("e7"))); // now the first jump target

        // Without any screen there is no capture at all.
        b.remove_piece_at(sq("e6"));
        b.remove_piece_at(sq("e7"));
        let moves = cannon_moves(&b, sq("e4"), Color::Red);
        assert!(!moves.contains(&sq("e8")));
        assert!(moves.contains(&sq("e7")));
    }

    #[test]
    fn test_horse_legs() {
        let mut b = board(&[("e5", Color::Red.horse())]);
        let moves = horse_moves(&b, sq("e5"), Color::Red);
        assert_eq!(moves.len(), 8);

        // Blocking the leg toward the enemy removes exactly the two
        // destinations behind it.
        b.set_piece_at(sq("e6"), Color::Black.pawn());
        let moves = horse_moves(&b, sq("e5"), Color::Red);
        assert_eq!(moves.len(), 6);
        assert!(!moves.contains(&sq("d7")));
        assert!(!moves.contains(&sq("f7")));
        assert!(moves.contains(&sq("g6")));
    }

    #[test]
    fn test_elephant_river_and_leg() {
        let mut b = board(&[("c5", Color::Red.elephant())]);
        let moves = elephant_moves(&b, sq("c5"), Color::Red);
        // c5 is on the river bank; both forward diagonals would cross.
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&sq("a3")));
        assert!(moves.contains(&sq("e3")));

        b.set_piece_at(sq("d4"), Color::Red.pawn()); // block a leg
        let moves = elephant_moves(&b, sq("c5"), Color::Red);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&sq("a3")));
    }

    #[test]
    fn test_advisor_palace() {
        let b = board(&[("e2", Color::Red.advisor())]);
        let moves = advisor_moves(&b, sq("e2"), Color::Red);
        assert_eq!(moves.len(), 4);
        for to in moves {
            assert!(to.in_palace(Color::Red));
        }
    }

    #[test]
    fn test_flying_general() {
        let mut b = board(&[
            ("e1", Color::Red.general()),
            ("e10", Color::Black.general()),
        ]);
        let moves = general_moves(&b, sq("e1"), Color::Red);
        assert!(moves.contains(&sq("e10")));
        let moves = general_moves(&b, sq("e10"), Color::Black);
        assert!(moves.contains(&sq("e1")));

        // Any piece in between closes the file.
        b.set_piece_at(sq("e5"), Color::Red.pawn());
        let moves = general_moves(&b, sq("e1"), Color::Red);
        assert!(!moves.contains(&sq("e10")));
    }

    #[test]
    fn test_pawn_before_crossing() {
        // Red pawn still on its own half: one square forward, no sideways
        // steps, and captures work exactly like moves.
        let b = board(&[
            ("e5", Color::Red.pawn()),
            ("e6", Color::Black.pawn()),
            ("d6", Color::Black.pawn()),
        ]);
        let moves = pawn_moves(&b, sq("e5"), Color::Red);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&sq("e6"))); // straight capture
        assert!(!moves.contains(&sq("d6"))); // no diagonal capture
    }

    #[test]
    fn test_pawn_after_crossing() {
        // Across the river: forward and sideways, never backward.
        let b = board(&[("e7", Color::Red.pawn())]);
        let moves = pawn_moves(&b, sq("e7"), Color::Red);
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&sq("e8")));
        assert!(moves.contains(&sq("d7")));
        assert!(moves.contains(&sq("f7")));

        let b = board(&[("e5", Color::Black.pawn())]);
        let moves = pawn_moves(&b, sq("e5"), Color::Black);
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&sq("e4")));
        assert!(moves.contains(&sq("d5")));
        assert!(moves.contains(&sq("f5")));
    }

    #[test]
    fn test_pawn_at_last_rank() {
        let b = board(&[("e10", Color::Red.pawn())]);
        let moves = pawn_moves(&b, sq("e10"), Color::Red);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&sq("d10")));
        assert!(moves.contains(&sq("f10")));
    }
}
