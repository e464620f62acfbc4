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

use std::num::TryFromIntError;

pub(crate) fn overflow_error() -> TryFromIntError {
    // The standard library keeps the constructor private to be able to
    // provide error details in the future, but it is unlikely that something
    // more specific than "overflow" will be added.
    u32::try_from(u64::MAX).unwrap_err()
}
