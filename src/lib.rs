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

//! A library for Xiangqi (Chinese chess) move generation.
//!
//! # Features
//!
//! * Square, piece and board representation with a tracked General square
//!   per side.
//! * Pseudo-legal movement rules for all seven piece kinds, including the
//!   Cannon screen, Horse and Elephant leg blocking, palace and river
//!   confinement and the flying-general rule.
//! * Check detection and a legality filter that simulates each candidate
//!   move on a scratch board.
//! * Move application with and without validation.
//! * Parse and write FENs.
//!
//! # Examples
//!
//! ```
//! use xiangqi::{Move, Role, Xiangqi};
//!
//! let pos = Xiangqi::default();
//! assert_eq!(pos.legal_moves().len(), 44);
//!
//! let pos = pos.play(Move {
//!     role: Role::Cannon,
//!     from: "b3".parse()?,
//!     capture: None,
//!     to: "e3".parse()?,
//! })?;
//! assert_eq!(pos.turn(), xiangqi::Color::Black);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

#![doc(html_root_url = "https://docs.rs/xiangqi/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod attacks;
mod board;
mod color;
pub mod fen;
mod perft;
mod position;
mod role;
mod square;
mod types;
mod util;

pub use board::{Board, STARTING_BOARD_FEN};
pub use color::{ByColor, Color, ParseColorError};
pub use perft::perft;
pub use position::{PlayError, PositionError, PositionErrorKinds, Xiangqi};
pub use role::Role;
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::{Move, MoveList, Piece};
