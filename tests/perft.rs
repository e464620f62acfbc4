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

use xiangqi::{perft, Xiangqi};

#[test]
fn test_startpos() {
    let pos = Xiangqi::default();
    assert_eq!(perft(&pos, 0), 1);
    assert_eq!(perft(&pos, 1), 44);
    assert_eq!(perft(&pos, 2), 1920);
    assert_eq!(perft(&pos, 3), 79_666);
}

#[test]
#[ignore]
fn test_startpos_deep() {
    let pos = Xiangqi::default();
    assert_eq!(perft(&pos, 4), 3_290_240);
}
