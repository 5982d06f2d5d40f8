// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! IOP run configuration
//!
//! Loaded from a TOML file; every field is optional.
//!
//! ```toml
//! ram_size = 2097152
//! load_address = 0x00010000
//! entry_point = 0x00010000
//! instructions = 100000
//! fatal_policy = "halt"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{IopError, Result};
use crate::core::memory::Ram;

/// What to do when the interpreter reports a fatal fault
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FatalPolicy {
    /// Print the diagnostic and terminate the process
    #[default]
    Abort,
    /// Stop this core only and report its final state
    Halt,
}

/// IOP run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IopConfig {
    /// Main RAM size in bytes (power of two)
    pub ram_size: usize,

    /// Address the program image is copied to
    pub load_address: u32,

    /// First instruction executed; defaults to `load_address`
    pub entry_point: Option<u32>,

    /// Number of instructions to execute
    pub instructions: u64,

    pub fatal_policy: FatalPolicy,
}

impl Default for IopConfig {
    fn default() -> Self {
        Self {
            ram_size: Ram::DEFAULT_SIZE,
            load_address: 0x0001_0000,
            entry_point: None,
            instructions: 100_000,
            fatal_policy: FatalPolicy::Abort,
        }
    }
}

impl IopConfig {
    /// Parse and validate a TOML configuration
    ///
    /// # Example
    ///
    /// ```
    /// use psrx_iop::core::config::{FatalPolicy, IopConfig};
    ///
    /// let config = IopConfig::from_toml("fatal_policy = \"halt\"").unwrap();
    /// assert_eq!(config.fatal_policy, FatalPolicy::Halt);
    /// assert_eq!(config.entry(), config.load_address);
    /// ```
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| IopError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading config from: {}", path.display());
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Check field constraints
    pub fn validate(&self) -> Result<()> {
        if !self.ram_size.is_power_of_two() || self.ram_size < Ram::MIN_SIZE {
            return Err(IopError::Config(format!(
                "ram_size must be a power of two of at least {} bytes, got {}",
                Ram::MIN_SIZE,
                self.ram_size
            )));
        }
        Ok(())
    }

    /// Entry point, falling back to the load address
    pub fn entry(&self) -> u32 {
        self.entry_point.unwrap_or(self.load_address)
    }
}
