/*
 * uniranges - range registry
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

//! A table of named [`UnicodeRange`]s, each built on first access.
//!
//! Every [`RangeName`] owns one slot. A slot goes from unpublished to
//! published exactly once and never back. Publication is lock-free: threads
//! that touch an unpublished slot at the same time may each build a value,
//! the first compare-exchange wins and the others drop their copy. All
//! competing values are equal, so callers cannot tell who won.
//!
//! ```rust
//! use uniranges::{RangeName, UnicodeRangeRegistry};
//!
//! let registry = UnicodeRangeRegistry::new();
//! let all = registry.get("All").unwrap();
//! assert_eq!(all.first_code_point(), 0);
//! assert_eq!(all.length(), 0x10000);
//! assert!(all.contains('A' as u32));
//! assert!(!all.contains(0x10000));
//!
//! assert!(registry.range(RangeName::None).is_empty());
//! assert!(registry.get("Bogus").is_err());
//! ```

use std::fmt;

use once_cell::race::OnceBox;

use super::{blocks::RangeName, range::UnicodeRange};
use crate::error::Result;

pub struct UnicodeRangeRegistry {
    slots: [OnceBox<UnicodeRange>; RangeName::COUNT],
}

impl UnicodeRangeRegistry {
    /// Creates a registry with every slot unpublished.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| OnceBox::new()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceBox<UnicodeRangeRegistry> = OnceBox::new();

        GLOBAL.get_or_init(|| Box::new(Self::new()))
    }

    /// Returns the range for `name`, building and publishing it on first
    /// access.
    pub fn range(&self, name: RangeName) -> &UnicodeRange {
        let slot = &self.slots[name.index()];
        if let Some(range) = slot.get() {
            return range;
        }
        self.publish(name)
    }

    /// Looks up a range by its name, e.g. `"BasicLatin"`.
    ///
    /// Fails with [`ErrorKind::UnknownRangeName`](crate::ErrorKind) for names
    /// with no predefined definition. A failed lookup publishes nothing.
    pub fn get(&self, name: &str) -> Result<&UnicodeRange> {
        let name: RangeName = name.parse()?;
        Ok(self.range(name))
    }

    /// The block containing `code_point`, together with its range.
    pub fn classify(&self, code_point: u32) -> Option<(RangeName, &UnicodeRange)> {
        let name = RangeName::for_code_point(code_point)?;
        Some((name, self.range(name)))
    }

    /// Publishes every name in `names` ahead of first access.
    pub fn preload<I>(&self, names: I)
    where
        I: IntoIterator<Item = RangeName>,
    {
        for name in names {
            self.range(name);
        }
    }

    pub fn is_published(&self, name: RangeName) -> bool {
        self.slots[name.index()].get().is_some()
    }

    pub fn published_count(&self) -> usize {
        self.slots.iter().filter(|s| s.get().is_some()).count()
    }

    #[cold]
    #[inline(never)]
    fn publish(&self, name: RangeName) -> &UnicodeRange {
        let slot = &self.slots[name.index()];
        let range = name.build();
        match slot.set(Box::new(range)) {
            Ok(()) => {
                log::trace!("published range {} = {}", name, range);
            }
            Err(_) => {
                // Another thread published first; its value equals ours.
                log::trace!("range {} was already published, dropping duplicate", name);
            }
        }
        slot.get_or_init(|| Box::new(range))
    }
}

impl Default for UnicodeRangeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UnicodeRangeRegistry {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct(stringify!(UnicodeRangeRegistry))
            .field("slots", &RangeName::COUNT)
            .field("published", &self.published_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_registry_all() {
        let registry = UnicodeRangeRegistry::new();
        assert!(!registry.is_published(RangeName::All));

        let all = registry.get("All").unwrap();
        assert_eq!(all.first_code_point(), 0);
        assert_eq!(all.length(), 0x10000);
        assert!(all.contains(0x0041));
        assert!(!all.contains(0x10000));
        assert!(registry.is_published(RangeName::All));
        assert_eq!(registry.published_count(), 1);
    }

    #[test]
    fn test_registry_none() {
        let registry = UnicodeRangeRegistry::new();
        let none = registry.range(RangeName::None);
        assert_eq!(none.first_code_point(), 0);
        assert_eq!(none.length(), 0);
        assert!(!none.contains(0));
    }

    #[test]
    fn test_registry_unknown_name_publishes_nothing() {
        let registry = UnicodeRangeRegistry::new();
        let before = *registry.range(RangeName::BasicLatin);

        let err = registry.get("Bogus").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownRangeName);
        assert_eq!(registry.published_count(), 1);
        assert_eq!(*registry.range(RangeName::BasicLatin), before);
    }

    #[test]
    fn test_registry_repeated_get_returns_same_slot() {
        let registry = UnicodeRangeRegistry::new();
        let first = registry.range(RangeName::Hiragana);
        let second = registry.get("Hiragana").unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.first_code_point(), 0x3040);
        assert_eq!(first.length(), 0x60);
    }

    #[test]
    fn test_registry_entries_are_distinct() {
        let registry = UnicodeRangeRegistry::new();
        // Same bounds, different blocks: no sharing between slots.
        let all = registry.range(RangeName::All);
        let all_again = registry.range(RangeName::All);
        let latin = registry.range(RangeName::BasicLatin);
        assert!(std::ptr::eq(all, all_again));
        assert!(!std::ptr::eq(all, latin));
    }

    #[test]
    fn test_registry_classify_and_preload() {
        let registry = UnicodeRangeRegistry::new();
        let (name, range) = registry.classify('λ' as u32).unwrap();
        assert_eq!(name, RangeName::GreekandCoptic);
        assert!(range.contains_char('λ'));
        assert!(registry.classify(0xE000).is_none());

        registry.preload(RangeName::ALL_NAMES.iter().copied());
        assert_eq!(registry.published_count(), RangeName::COUNT);
        assert_eq!(
            format!("{:?}", registry),
            format!(
                "UnicodeRangeRegistry {{ slots: {0}, published: {0} }}",
                RangeName::COUNT
            )
        );
    }
}
