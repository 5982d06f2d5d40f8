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

//! Core IOP components
//!
//! - Instruction interpreter (MIPS R3000A)
//! - Reference execution context (registers, COP0, delay slots)
//! - Main RAM
//! - Run configuration

pub mod config;
pub mod error;
pub mod interpreter;
pub mod iop;
pub mod memory;

// Re-export commonly used types
pub use config::{FatalPolicy, IopConfig};
pub use error::{DispatchLevel, InterpreterError, IopError, Result};
pub use interpreter::{interpret, ExecutionContext};
pub use iop::Iop;
pub use memory::Ram;
