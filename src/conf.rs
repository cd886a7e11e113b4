/*
 * uniranges - configuration module.
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

//! Registry settings, read from TOML.
//!
//! ```toml
//! log_level = "DEBUG"
//! preload = ["BasicLatin", "Latin1Supplement"]
//! ```
//!
//! Settings only choose which predefined ranges get published eagerly; they
//! cannot define new ranges.

use std::path::Path;

use crate::{
    error::{Result, ResultIntoError},
    text::{RangeName, UnicodeRangeRegistry},
    utils::logging::{LogLevel, StderrLogger},
};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySettings {
    pub log_level: LogLevel,
    /// Names to publish when the registry is built.
    pub preload: Vec<String>,
}

impl RegistrySettings {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .chain_err_summary(|| format!("Could not read settings file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .chain_err_summary(|| format!("Invalid settings file {}", path.display()))
    }

    /// Resolves [`RegistrySettings::preload`] into range names.
    pub fn preload_names(&self) -> Result<Vec<RangeName>> {
        self.preload
            .iter()
            .map(|n| n.parse::<RangeName>())
            .collect::<Result<Vec<_>>>()
            .chain_err_summary(|| "Invalid preload entry")
    }

    /// Creates a registry with every preload name already published, and sets
    /// the global `log` max level to [`RegistrySettings::log_level`].
    ///
    /// Fails with [`ErrorKind::UnknownRangeName`](crate::ErrorKind) before
    /// publishing anything if any preload entry is not a predefined name.
    pub fn build_registry(&self) -> Result<UnicodeRangeRegistry> {
        let names = self.preload_names()?;
        log::set_max_level(self.log_level.into());
        let registry = UnicodeRangeRegistry::new();
        registry.preload(names.iter().copied());
        log::debug!(
            "built range registry with {} of {} ranges preloaded",
            registry.published_count(),
            RangeName::COUNT
        );
        Ok(registry)
    }

    /// Installs a [`StderrLogger`] at [`RegistrySettings::log_level`].
    pub fn init_logging(&self) -> StderrLogger {
        StderrLogger::new(self.log_level)
    }
}
