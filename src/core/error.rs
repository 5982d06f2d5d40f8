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

//! Error types
//!
//! Two layers of errors exist:
//! - [`InterpreterError`]: fatal conditions raised while executing a single
//!   instruction word (unknown opcode, division by zero). The interpreter
//!   reports them before mutating any state.
//! - [`IopError`]: crate-wide error for everything around the interpreter
//!   (configuration, program loading, a halted core).

use std::fmt;
use thiserror::Error;

/// Result type for IOP operations
pub type Result<T> = std::result::Result<T, IopError>;

/// Main error type for the IOP crate
#[derive(Error, Debug)]
pub enum IopError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Program too large: {size} bytes does not fit in {capacity} bytes of RAM")]
    ProgramTooLarge { size: usize, capacity: usize },

    #[error("Invalid register index: {index} (valid range: 0-31)")]
    InvalidRegister { index: u8 },

    #[error("Interpreter fault at PC=0x{pc:08X}: {source}")]
    Interpreter {
        pc: u32,
        #[source]
        source: InterpreterError,
    },
}

/// Fatal conditions raised by the instruction interpreter
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterError {
    /// No handler exists for the opcode at the given dispatch level
    ///
    /// For the coprocessor level `op` is `(cop_id << 8) | rs`.
    #[error("Unrecognized {level} op ${op:02X}")]
    UnknownOpcode { level: DispatchLevel, op: u16 },

    /// DIV or DIVU with a zero divisor
    #[error("{} division by zero", division_mnemonic(.signed))]
    DivisionByZero { signed: bool },
}

/// Decode table an instruction was being looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchLevel {
    /// Primary opcode (bits 31-26)
    Primary,
    /// SPECIAL funct field (opcode 0x00)
    Special,
    /// REGIMM rt field (opcode 0x01)
    Regimm,
    /// Coprocessor id + rs field (opcodes 0x10-0x13)
    Cop,
}

fn division_mnemonic(signed: &bool) -> &'static str {
    if *signed {
        "DIV"
    } else {
        "DIVU"
    }
}

impl fmt::Display for DispatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DispatchLevel::Primary => "regular",
            DispatchLevel::Special => "special",
            DispatchLevel::Regimm => "regimm",
            DispatchLevel::Cop => "cop",
        };
        f.write_str(name)
    }
}
