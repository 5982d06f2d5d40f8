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

//! Execution context contract
//!
//! The interpreter owns no state. Everything an instruction reads or writes
//! lives behind this trait: register file, program counter, memory bus,
//! coprocessor banks and exception entry.

/// CPU state an instruction executes against
///
/// # Delay slots
///
/// [`jump`](ExecutionContext::jump) and [`branch`](ExecutionContext::branch)
/// only *request* a control transfer. Executing the delay slot before the
/// transfer takes effect is the implementor's responsibility.
///
/// # Register 0
///
/// If r0 must read as zero, the implementor enforces it in
/// [`gpr`](ExecutionContext::gpr) / [`set_gpr`](ExecutionContext::set_gpr).
pub trait ExecutionContext {
    /// Read general purpose register `index` (0-31)
    fn gpr(&self, index: u8) -> u32;

    /// Write general purpose register `index` (0-31)
    fn set_gpr(&mut self, index: u8, value: u32);

    /// Address of the instruction being executed
    fn pc(&self) -> u32;

    /// Transfer control to `address` after the delay slot
    fn jump(&mut self, address: u32);

    /// Report a conditional branch
    ///
    /// `offset` is the byte offset relative to the delay slot address.
    /// Called for every branch instruction, taken or not.
    fn branch(&mut self, condition: bool, offset: i32);

    fn hi(&self) -> u32;
    fn set_hi(&mut self, value: u32);
    fn lo(&self) -> u32;
    fn set_lo(&mut self, value: u32);

    fn read8(&mut self, address: u32) -> u8;

    /// Little-endian halfword read
    fn read16(&mut self, address: u32) -> u16;

    /// Little-endian word read
    fn read32(&mut self, address: u32) -> u32;

    fn write8(&mut self, address: u32, value: u8);

    /// Little-endian halfword write
    fn write16(&mut self, address: u32, value: u16);

    /// Little-endian word write
    fn write32(&mut self, address: u32, value: u32);

    /// Move coprocessor `cop_id` register `cop_reg` into GPR `gpr`
    fn mfc(&mut self, cop_id: u8, cop_reg: u8, gpr: u8);

    /// Move GPR `gpr` into coprocessor `cop_id` register `cop_reg`
    fn mtc(&mut self, cop_id: u8, cop_reg: u8, gpr: u8);

    /// Return from exception
    fn rfe(&mut self);

    /// Enter the system call exception
    fn syscall_exception(&mut self);
}
