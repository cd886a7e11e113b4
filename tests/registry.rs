//
// uniranges
//
// Copyright 2026 uniranges contributors
//
// This file is part of uniranges.
//
// uniranges is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// uniranges is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with uniranges. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

use std::{
    io::Write,
    sync::{Arc, Barrier},
    thread,
};

use rusty_fork::rusty_fork_test;
use tempfile::NamedTempFile;
use uniranges::{
    ErrorKind, LogLevel, RangeName, RegistrySettings, StderrLogger, UnicodeRange,
    UnicodeRangeRegistry,
};

const THREADS: usize = 16;

/// Calls `get(name)` from `THREADS` threads released at the same instant and
/// returns what each thread observed.
fn concurrent_first_touch(
    registry: &UnicodeRangeRegistry,
    name: &'static str,
) -> Vec<UnicodeRange> {
    let barrier = Barrier::new(THREADS);
    thread::scope(|s| {
        let handles = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    *registry.get(name).unwrap()
                })
            })
            .collect::<Vec<_>>();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

#[test]
fn test_concurrent_get_observes_equal_values() {
    for &name in RangeName::ALL_NAMES {
        let registry = UnicodeRangeRegistry::new();
        let observed = concurrent_first_touch(&registry, name.as_str());
        assert_eq!(observed.len(), THREADS);
        let expected = *registry.range(name);
        for range in observed {
            assert_eq!(range.first_code_point(), expected.first_code_point(), "{}", name);
            assert_eq!(range.length(), expected.length(), "{}", name);
        }
        assert_eq!(registry.published_count(), 1);
    }
}

#[test]
fn test_concurrent_get_returns_published_slot() {
    let registry = Arc::new(UnicodeRangeRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.range(RangeName::CjkUnifiedIdeographs) as *const UnicodeRange as usize
            })
        })
        .collect::<Vec<_>>();
    let published =
        registry.range(RangeName::CjkUnifiedIdeographs) as *const UnicodeRange as usize;
    for h in handles {
        // Losers of the publish race return the winner's value, not their own.
        assert_eq!(h.join().unwrap(), published);
    }
}

#[test]
fn test_get_is_repeatable() {
    let registry = UnicodeRangeRegistry::new();
    let first = *registry.get("All").unwrap();
    for _ in 0..100 {
        assert_eq!(*registry.get("All").unwrap(), first);
    }
    assert_eq!(first.first_code_point(), 0);
    assert_eq!(first.length(), 0x10000);
    assert!(first.contains(0x0041));
    assert!(!first.contains(0x10000));

    let none = registry.get("None").unwrap();
    assert_eq!(none.first_code_point(), 0);
    assert_eq!(none.length(), 0);
    assert!(!none.contains(0));
}

#[test]
fn test_unknown_name_leaves_published_slots_unchanged() {
    let registry = UnicodeRangeRegistry::new();
    let all = registry.get("All").unwrap() as *const UnicodeRange;
    let latin = *registry.get("BasicLatin").unwrap();

    let err = registry.get("Bogus").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownRangeName);

    assert_eq!(registry.published_count(), 2);
    assert!(std::ptr::eq(registry.get("All").unwrap(), all));
    assert_eq!(*registry.get("BasicLatin").unwrap(), latin);
}

#[test]
fn test_settings_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"log_level = \"DEBUG\"\npreload = [\"Arabic\", \"Thai\"]\n")
        .unwrap();
    file.flush().unwrap();

    let settings = RegistrySettings::from_path(file.path()).unwrap();
    assert_eq!(settings.log_level, LogLevel::DEBUG);
    let registry = settings.build_registry().unwrap();
    assert!(registry.is_published(RangeName::Arabic));
    assert!(registry.is_published(RangeName::Thai));
    assert_eq!(registry.published_count(), 2);

    let missing = file.path().with_extension("missing");
    let err = RegistrySettings::from_path(&missing).unwrap_err();
    assert_eq!(err.kind, ErrorKind::OSError);
}

rusty_fork_test! {
#[test]
fn test_global_registry_first_touch() {
    let logger = StderrLogger::new(LogLevel::TRACE);
    assert_eq!(logger.log_level(), LogLevel::TRACE);

    let registry = UnicodeRangeRegistry::global();
    assert!(std::ptr::eq(registry, UnicodeRangeRegistry::global()));
    assert_eq!(registry.published_count(), 0);

    let observed = concurrent_first_touch(registry, "All");
    assert!(observed.iter().all(|r| *r == *registry.range(RangeName::All)));
    assert_eq!(registry.published_count(), 1);
}

#[test]
fn test_settings_apply_log_level() {
    let settings = RegistrySettings::from_toml_str("log_level = \"TRACE\"").unwrap();
    settings.build_registry().unwrap();
    assert_eq!(uniranges::log::max_level(), uniranges::log::LevelFilter::Trace);

    let settings = RegistrySettings::from_toml_str("log_level = \"ERROR\"").unwrap();
    let logger = settings.init_logging();
    assert_eq!(logger.log_level(), LogLevel::ERROR);
    assert_eq!(uniranges::log::max_level(), uniranges::log::LevelFilter::Error);
}
}
