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

//! MIPS R3000A instruction interpreter
//!
//! A stateless decode-and-execute engine: one instruction word goes in, its
//! architectural effect is applied to an [`ExecutionContext`], and the call
//! returns. Nothing is retained between calls, so the same interpreter can
//! drive any number of independent contexts.
//!
//! # Dispatch hierarchy
//!
//! ```text
//! primary opcode (31-26)
//! ├── 0x00 SPECIAL  -> funct (5-0)
//! ├── 0x01 REGIMM   -> rt (20-16)
//! ├── 0x10-0x13 COP -> (cop_id << 8) | rs
//! └── everything else handled directly
//! ```
//!
//! # Fatal conditions
//!
//! Unknown opcodes at any level and division by zero are returned as
//! [`InterpreterError`]. The faulting instruction has not touched the
//! context when the error comes back; the caller decides whether that
//! stops the core, the emulator, or the process.

use crate::core::error::InterpreterError;

mod context;
mod decode;
mod instructions;
#[cfg(test)]
mod tests;

pub use context::ExecutionContext;

/// Result type for instruction execution
pub type Result<T> = std::result::Result<T, InterpreterError>;

/// Execute one instruction word against `ctx`
///
/// A zero word is skipped without touching the context.
///
/// # Example
///
/// ```
/// use psrx_iop::core::interpreter::interpret;
/// use psrx_iop::core::iop::Iop;
///
/// let mut iop = Iop::new();
/// iop.set_reg(1, 40);
///
/// // ADDIU $2, $1, 2
/// interpret(&mut iop, 0x24220002).unwrap();
/// assert_eq!(iop.reg(2), 42);
/// ```
///
/// # Errors
///
/// [`InterpreterError::UnknownOpcode`] for an unrecognized encoding and
/// [`InterpreterError::DivisionByZero`] for DIV/DIVU with a zero divisor.
#[inline]
pub fn interpret<C: ExecutionContext>(ctx: &mut C, instruction: u32) -> Result<()> {
    if instruction == 0 {
        return Ok(());
    }
    instructions::execute(ctx, instruction)
}
