/*
 * uniranges - code point ranges
 *
 * Copyright 2026 uniranges contributors
 *
 * This file is part of uniranges.
 *
 * uniranges is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * uniranges is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with uniranges. If not, see <http://www.gnu.org/licenses/>.
 */

//! Immutable contiguous spans of code points.

use std::fmt;

use crate::error::{Error, ErrorKind, Result};

/// Code points are restricted to the Basic Multilingual Plane.
pub const MAX_CODE_POINT: u32 = 0xFFFF;

/// Number of code points in `0..=MAX_CODE_POINT`.
pub const DOMAIN_SIZE: u32 = MAX_CODE_POINT + 1;

/// A contiguous, ordered span of code points, described by its first code
/// point and its length.
///
/// Values are immutable: there is no way to change either field once the
/// range has been created.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct UnicodeRange {
    first_code_point: u32,
    length: u32,
}

impl UnicodeRange {
    /// Creates a range spanning `first..=last`.
    ///
    /// Fails with [`ErrorKind::InvalidRange`] if either boundary lies outside
    /// `0..=0xFFFF` or if `first > last`. Use [`UnicodeRange::empty`] for a
    /// range that contains no code points.
    pub fn create(first: u32, last: u32) -> Result<Self> {
        if first > MAX_CODE_POINT {
            return Err(out_of_domain("first", first));
        }
        if last > MAX_CODE_POINT {
            return Err(out_of_domain("last", last));
        }
        if first > last {
            return Err(Error::new(format!(
                "first code point U+{:04X} comes after last code point U+{:04X}",
                first, last
            ))
            .set_summary("Could not create range")
            .set_kind(ErrorKind::InvalidRange));
        }
        Ok(Self {
            first_code_point: first,
            length: last - first + 1,
        })
    }

    /// Same as [`UnicodeRange::create`], taking the boundaries as `char`s.
    pub fn from_chars(first: char, last: char) -> Result<Self> {
        Self::create(first as u32, last as u32)
    }

    /// The canonical empty range.
    pub const fn empty() -> Self {
        Self {
            first_code_point: 0,
            length: 0,
        }
    }

    /// Construction path for the predefined block table, whose bounds are
    /// checked when the table is compiled.
    pub(crate) const fn from_block(first: u16, last: u16) -> Self {
        Self {
            first_code_point: first as u32,
            length: last as u32 - first as u32 + 1,
        }
    }

    #[inline]
    pub const fn first_code_point(&self) -> u32 {
        self.first_code_point
    }

    #[inline]
    pub const fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The last code point of the span, or `None` for an empty range.
    pub const fn last_code_point(&self) -> Option<u32> {
        if self.length == 0 {
            None
        } else {
            Some(self.first_code_point + self.length - 1)
        }
    }

    /// Returns `true` iff `first_code_point <= code_point <= last_code_point`.
    #[inline]
    pub const fn contains(&self, code_point: u32) -> bool {
        code_point >= self.first_code_point && code_point - self.first_code_point < self.length
    }

    #[inline]
    pub const fn contains_char(&self, c: char) -> bool {
        self.contains(c as u32)
    }

    /// Iterates over every code point in the span, in ascending order.
    pub fn code_points(&self) -> std::ops::Range<u32> {
        self.first_code_point..(self.first_code_point + self.length)
    }
}

impl Default for UnicodeRange {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for UnicodeRange {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self.last_code_point() {
            None => write!(fmt, "(empty)"),
            Some(last) => write!(fmt, "U+{:04X}..U+{:04X}", self.first_code_point, last),
        }
    }
}

fn out_of_domain(which: &'static str, code_point: u32) -> Error {
    Error::new(format!(
        "{} code point U+{:04X} is outside the supported domain U+0000..U+{:04X}",
        which, code_point, MAX_CODE_POINT
    ))
    .set_summary("Could not create range")
    .set_kind(ErrorKind::InvalidRange)
}
