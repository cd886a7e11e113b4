/*
 * uniranges - lib.rs
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

#![deny(
    rustdoc::redundant_explicit_links,
    unsafe_op_in_unsafe_fn,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
)]
//! A registry of predefined Unicode code point ranges.
//!
//! ## Description
//!
//! - [`UnicodeRange`] is an immutable span of code points in the Basic
//!   Multilingual Plane (`U+0000..U+FFFF`), with membership and length
//!   queries. (see module [`text::range`])
//! - [`RangeName`] names the predefined ranges: `None`, `All` and one entry
//!   per Unicode block. (see module [`text::blocks`])
//! - [`UnicodeRangeRegistry`] builds each named range on first access and
//!   publishes it without locking, so it can be shared freely between
//!   threads. (see module [`text::registry`])
//!
//! Other exports are
//! - Registry settings read from TOML (see module [`conf`])
//! - A [`log`] backend writing to standard error (see
//!   [`StderrLogger`](utils::logging::StderrLogger))

pub mod conf;
pub use conf::RegistrySettings;
pub mod error;
pub use error::*;
pub mod text;
pub use text::{RangeName, UnicodeRange, UnicodeRangeRegistry, DOMAIN_SIZE, MAX_CODE_POINT};
pub mod utils;
pub use utils::logging::{LogLevel, StderrLogger};

#[macro_use]
extern crate serde_derive;
pub extern crate log;
