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

use xiangqi::{
    attacks, Board, Color, Move, Piece, PositionError, PositionErrorKinds, Role, Square, Xiangqi,
};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

fn setup(pieces: &[(&str, Piece)], turn: Color) -> Xiangqi {
    let mut board = Board::empty();
    for (name, piece) in pieces {
        board.set_piece_at(sq(name), *piece);
    }
    Xiangqi::from_setup(board, turn).expect("legal setup")
}

#[test]
fn test_opening_move_counts() {
    let pos = Xiangqi::default();
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 44);

    let count = |role: Role| moves.iter().filter(|m| m.role == role).count();
    assert_eq!(count(Role::Pawn), 5);
    assert_eq!(count(Role::Cannon), 24);
    assert_eq!(count(Role::Chariot), 4);
    assert_eq!(count(Role::Horse), 4);
    assert_eq!(count(Role::Elephant), 4);
    assert_eq!(count(Role::Advisor), 2);
    assert_eq!(count(Role::General), 1);
}

#[test]
fn test_opening_horse_jump() {
    let pos = Xiangqi::default();
    let m = Move {
        role: Role::Horse,
        from: sq("b1"),
        capture: None,
        to: sq("c3"),
    };
    assert!(pos.is_legal(m));

    let pos = pos.play(m).expect("legal move");
    assert_eq!(pos.turn(), Color::Black);
    assert_eq!(pos.board().piece_at(sq("c3")), Some(Color::Red.horse()));
    assert_eq!(pos.board().piece_at(sq("b1")), None);
}

#[test]
fn test_wrong_role_rejected() {
    let pos = Xiangqi::default();
    let m = Move {
        role: Role::Chariot,
        from: sq("b1"),
        capture: None,
        to: sq("b2"),
    };
    assert!(!pos.is_legal(m));
    assert!(pos.play(m).is_err());
}

#[test]
fn test_flying_general_face_off() {
    let mut board = Board::empty();
    board.set_piece_at(sq("e1"), Color::Red.general());
    board.set_piece_at(sq("e10"), Color::Black.general());

    let err = Xiangqi::from_setup(board.clone(), Color::Red).unwrap_err();
    assert_eq!(err.kinds(), PositionErrorKinds::OPPOSITE_CHECK);

    let pos = Xiangqi::from_setup(board, Color::Red)
        .or_else(PositionError::ignore_opposite_check)
        .expect("waived");
    assert!(pos.in_check(Color::Red));
    assert!(pos.in_check(Color::Black));

    // Capturing the enemy General across the open file is the only way to
    // leave the file. Stepping aside within it stays in check.
    let destinations = pos.legal_destinations(sq("e1"));
    assert!(destinations.contains(&sq("e10")));
    assert!(destinations.contains(&sq("d1")));
    assert!(destinations.contains(&sq("f1")));
    assert!(!destinations.contains(&sq("e2")));
}

#[test]
fn test_blocked_file_is_not_a_face_off() {
    let pos = setup(
        &[
            ("e1", Color::Red.general()),
            ("e10", Color::Black.general()),
            ("e5", Color::Black.pawn()),
        ],
        Color::Red,
    );
    assert!(!pos.in_check(Color::Red));
    assert!(!pos.in_check(Color::Black));
}

#[test]
fn test_pinned_chariot() {
    let pos = setup(
        &[
            ("e1", Color::Red.general()),
            ("e5", Color::Red.chariot()),
            ("e10", Color::Black.chariot()),
            ("d10", Color::Black.general()),
        ],
        Color::Red,
    );
    assert!(!pos.is_check());

    let destinations = pos.legal_destinations(sq("e5"));
    assert_eq!(destinations.len(), 8);
    assert!(destinations.iter().all(|to| to.file() == sq("e5").file()));
    assert!(destinations.contains(&sq("e10")));
    assert!(!destinations.contains(&sq("a5")));
}

#[test]
fn test_check_must_be_addressed() {
    let pos = setup(
        &[
            ("e1", Color::Red.general()),
            ("e10", Color::Black.general()),
            ("e8", Color::Red.chariot()),
            ("h10", Color::Black.chariot()),
        ],
        Color::Black,
    );
    assert!(pos.is_check());

    for m in pos.legal_moves() {
        let child = pos.clone().play(m).expect("legal move");
        assert!(
            !child.in_check(Color::Black),
            "{m} leaves black in check"
        );
    }
}

#[test]
fn test_elephant_never_crosses_river() {
    for from in Square::all() {
        let mut board = Board::empty();
        board.set_piece_at(from, Color::Red.elephant());
        for to in attacks::pseudo_legal_from(&board, from) {
            assert!(to.behind_river(Color::Red), "elephant {from} reaches {to}");
        }
    }
}

#[test]
fn test_advisor_and_general_stay_in_palace() {
    for role in [Role::Advisor, Role::General] {
        for color in Color::ALL {
            for from in Square::all() {
                let mut board = Board::empty();
                board.set_piece_at(from, role.of(color));
                for to in attacks::pseudo_legal_from(&board, from) {
                    assert!(to.in_palace(color), "{role:?} {from} reaches {to}");
                }
            }
        }
    }
}

#[test]
fn test_legal_moves_never_self_check() {
    let pos = Xiangqi::default();
    for m in pos.legal_moves() {
        let child = pos.clone().play(m).expect("legal move");
        assert!(!child.in_check(Color::Red));
        for reply in child.legal_moves() {
            let grandchild = child.clone().play(reply).expect("legal reply");
            assert!(!grandchild.in_check(Color::Black), "{reply} self-checks");
        }
    }
}
