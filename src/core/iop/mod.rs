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

//! Reference IOP execution context
//!
//! [`Iop`] owns everything the instruction interpreter treats as external:
//! register file, PC with branch delay slot scheduling, HI/LO, COP0 and
//! main RAM. It is what the interpreter runs against in the `psrx-iop`
//! binary and in the integration tests.

use serde::Serialize;

use crate::core::config::IopConfig;
use crate::core::error::{IopError, Result};
use crate::core::interpreter::{interpret, ExecutionContext};
use crate::core::memory::Ram;

mod cop0;
#[cfg(test)]
mod tests;

use cop0::Cop0;
pub use cop0::{ExceptionCause, StatusFlags};

/// MIPS R3000A I/O processor
///
/// # Delay slots
///
/// `pc` is the address of the next instruction to fetch and `next_pc` the
/// one after it. A jump or taken branch only replaces `next_pc`, so the
/// instruction already at `pc` (the delay slot) runs before the transfer.
///
/// # Example
/// ```
/// use psrx_iop::core::iop::Iop;
///
/// let mut iop = Iop::new();
/// iop.reset();
/// assert_eq!(iop.reg(0), 0); // r0 is always 0
/// ```
pub struct Iop {
    /// General purpose registers (r0-r31)
    ///
    /// r0 is hardwired to always return 0
    regs: [u32; 32],

    /// Address of the next instruction to fetch
    pc: u32,

    /// Address fetched after `pc` (branch target once a branch is taken)
    next_pc: u32,

    /// Address of the instruction being executed
    current_pc: u32,

    /// HI register (multiplication/division result upper 32 bits)
    hi: u32,

    /// LO register (multiplication/division result lower 32 bits)
    lo: u32,

    /// Coprocessor 0 (System Control Unit)
    cop0: Cop0,

    /// Main RAM
    ram: Ram,

    /// Set when the executing instruction redirected `next_pc`
    branch_taken: bool,

    /// The executing instruction sits in a branch delay slot
    in_delay_slot: bool,

    /// Where execution starts after reset
    reset_vector: u32,

    /// Current instruction (for debugging)
    current_instruction: u32,

    /// Instructions retired since reset
    instructions: u64,
}

impl Iop {
    /// BIOS entry point
    pub const RESET_VECTOR: u32 = 0xBFC0_0000;

    /// Exception vector with SR.BEV = 1
    const BOOT_EXCEPTION_VECTOR: u32 = 0xBFC0_0180;

    /// Exception vector with SR.BEV = 0
    const EXCEPTION_VECTOR: u32 = 0x8000_0080;

    /// CAUSE.BD: exception taken in a branch delay slot
    const CAUSE_BD: u32 = 1 << 31;

    /// CAUSE.ExcCode field
    const CAUSE_EXCCODE_MASK: u32 = 0x7C;

    /// Create an IOP with 2MB of RAM, starting at the BIOS entry point
    pub fn new() -> Self {
        Self::with_ram(Ram::new(), Self::RESET_VECTOR)
    }

    /// Create an IOP from configuration
    ///
    /// RAM is sized from `config.ram_size` and execution starts at
    /// `config.entry()`.
    ///
    /// # Errors
    ///
    /// Returns [`IopError::Config`] for an invalid RAM size.
    pub fn with_config(config: &IopConfig) -> Result<Self> {
        let ram = Ram::with_size(config.ram_size)?;
        Ok(Self::with_ram(ram, config.entry()))
    }

    fn with_ram(ram: Ram, reset_vector: u32) -> Self {
        Self {
            regs: [0u32; 32],
            pc: reset_vector,
            next_pc: reset_vector.wrapping_add(4),
            current_pc: reset_vector,
            hi: 0,
            lo: 0,
            cop0: Cop0::new(),
            ram,
            branch_taken: false,
            in_delay_slot: false,
            reset_vector,
            current_instruction: 0,
            instructions: 0,
        }
    }

    /// Reset CPU state
    ///
    /// Registers, COP0 and the PC return to their power-on values.
    /// RAM contents are kept so a loaded program survives a reset.
    pub fn reset(&mut self) {
        self.regs = [0u32; 32];
        self.set_pc(self.reset_vector);
        self.hi = 0;
        self.lo = 0;
        self.cop0.reset();
        self.current_instruction = 0;
        self.instructions = 0;
    }

    /// Read from general purpose register
    ///
    /// r0 always returns 0.
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u32 {
        if index == 0 {
            0
        } else {
            self.regs[(index & 0x1F) as usize]
        }
    }

    /// Write to general purpose register
    ///
    /// Writes to r0 are ignored.
    ///
    /// # Example
    /// ```
    /// use psrx_iop::core::iop::Iop;
    ///
    /// let mut iop = Iop::new();
    /// iop.set_reg(1, 0x12345678);
    /// assert_eq!(iop.reg(1), 0x12345678);
    ///
    /// iop.set_reg(0, 0xDEADBEEF);
    /// assert_eq!(iop.reg(0), 0);
    /// ```
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        let index = index & 0x1F;
        if index != 0 {
            self.regs[index as usize] = value;
        }
    }

    /// Checked register access for callers with untrusted indices
    ///
    /// # Errors
    ///
    /// Returns [`IopError::InvalidRegister`] for an index above 31.
    pub fn try_reg(&self, index: u8) -> Result<u32> {
        if index > 31 {
            return Err(IopError::InvalidRegister { index });
        }
        Ok(self.reg(index))
    }

    /// Address of the next instruction to fetch
    ///
    /// Between steps this is the instruction [`step`](Self::step) runs
    /// next. The interpreter sees the executing instruction's address
    /// through [`ExecutionContext::pc`] instead.
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Address fetched after [`pc`](Self::pc)
    pub fn next_pc(&self) -> u32 {
        self.next_pc
    }

    /// Redirect execution to `address`, discarding any pending branch
    pub fn set_pc(&mut self, address: u32) {
        self.pc = address;
        self.next_pc = address.wrapping_add(4);
        self.current_pc = address;
        self.branch_taken = false;
        self.in_delay_slot = false;
    }

    /// Whether the last executed instruction was in a branch delay slot
    pub fn in_delay_slot(&self) -> bool {
        self.in_delay_slot
    }

    /// Read a COP0 register
    pub fn cop0_reg(&self, index: u8) -> u32 {
        self.cop0.read(index)
    }

    /// Status register decoded as flags
    pub fn status(&self) -> StatusFlags {
        self.cop0.status()
    }

    /// Instructions retired since reset
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    pub fn ram_mut(&mut self) -> &mut Ram {
        &mut self.ram
    }

    /// Copy a program image into RAM at `address`
    pub fn load_program(&mut self, address: u32, image: &[u8]) -> Result<()> {
        self.ram.load(address, image)
    }

    /// Execute one instruction
    ///
    /// Fetches the word at `pc`, advances `pc`/`next_pc` and hands the word
    /// to the interpreter.
    ///
    /// # Errors
    ///
    /// An interpreter fault is returned as [`IopError::Interpreter`]. The
    /// PC is rolled back first, so the IOP stays halted on the faulting
    /// instruction and stepping again reports the same fault.
    ///
    /// # Example
    ///
    /// ```
    /// use psrx_iop::core::iop::Iop;
    ///
    /// let mut iop = Iop::new();
    /// iop.set_pc(0x80000000);
    /// iop.ram_mut().write32(0x80000000, 0x24010007); // ADDIU $1, $0, 7
    ///
    /// iop.step().unwrap();
    /// assert_eq!(iop.reg(1), 7);
    /// assert_eq!(iop.pc(), 0x80000004);
    /// ```
    pub fn step(&mut self) -> Result<()> {
        let pc = self.pc;
        let next_pc = self.next_pc;
        let was_branch_taken = self.branch_taken;

        let instruction = self.ram.read32(pc);
        self.current_pc = pc;
        self.current_instruction = instruction;

        // A transfer requested by the previous instruction makes this one
        // its delay slot.
        self.in_delay_slot = was_branch_taken;
        self.branch_taken = false;

        self.pc = next_pc;
        self.next_pc = next_pc.wrapping_add(4);

        log::trace!("IOP 0x{:08X}: 0x{:08X}", pc, instruction);

        if let Err(source) = interpret(self, instruction) {
            self.pc = pc;
            self.next_pc = next_pc;
            self.branch_taken = was_branch_taken;
            return Err(IopError::Interpreter { pc, source });
        }

        self.instructions += 1;
        Ok(())
    }

    /// Execute up to `count` instructions
    ///
    /// Returns the number of instructions executed, stopping at the first
    /// fault.
    pub fn run(&mut self, count: u64) -> Result<u64> {
        for executed in 0..count {
            if let Err(e) = self.step() {
                log::debug!("IOP halted after {} instructions", executed);
                return Err(e);
            }
        }
        Ok(count)
    }

    /// Enter an exception
    ///
    /// Pushes the COP0 mode stack, records the cause and EPC, and vectors to
    /// the handler selected by SR.BEV. A pending branch is discarded.
    fn exception(&mut self, cause: ExceptionCause) {
        self.cop0.push_mode();

        let cause_reg = self.cop0.regs[Cop0::CAUSE] & !Self::CAUSE_EXCCODE_MASK;
        let mut cause_reg = cause_reg | ((cause as u32) << 2);

        // In a delay slot EPC points at the branch so it is re-executed
        let epc = if self.in_delay_slot {
            cause_reg |= Self::CAUSE_BD;
            self.current_pc.wrapping_sub(4)
        } else {
            cause_reg &= !Self::CAUSE_BD;
            self.current_pc
        };
        self.cop0.regs[Cop0::CAUSE] = cause_reg;
        self.cop0.regs[Cop0::EPC] = epc;

        let handler = if self.cop0.status().contains(StatusFlags::BEV) {
            Self::BOOT_EXCEPTION_VECTOR
        } else {
            Self::EXCEPTION_VECTOR
        };

        log::warn!(
            "IOP EXCEPTION: cause={:?}, EPC=0x{:08X}, handler=0x{:08X}, in_delay={}, instruction=0x{:08X}",
            cause,
            epc,
            handler,
            self.in_delay_slot,
            self.current_instruction
        );

        self.pc = handler;
        self.next_pc = handler.wrapping_add(4);
        self.branch_taken = false;
    }

    /// With SR.ISC set, stores go to the (unmodelled) cache instead of RAM
    fn store_isolated(&self, address: u32) -> bool {
        let isolated = self.cop0.status().contains(StatusFlags::ISC);
        if isolated {
            log::trace!("Isolated store to 0x{:08X} dropped", address);
        }
        isolated
    }

    /// Capture the architectural register state
    pub fn snapshot(&self) -> RegisterSnapshot {
        let mut gpr = [0u32; 32];
        for (i, value) in gpr.iter_mut().enumerate() {
            *value = self.reg(i as u8);
        }

        RegisterSnapshot {
            pc: self.pc,
            next_pc: self.next_pc,
            hi: self.hi,
            lo: self.lo,
            gpr,
            sr: self.cop0.regs[Cop0::SR],
            cause: self.cop0.regs[Cop0::CAUSE],
            epc: self.cop0.regs[Cop0::EPC],
            instructions: self.instructions,
        }
    }

    /// Dump all IOP registers for debugging
    pub fn dump_registers(&self) {
        print!("{}", self.snapshot());
    }
}

impl Default for Iop {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionContext for Iop {
    #[inline(always)]
    fn gpr(&self, index: u8) -> u32 {
        self.reg(index)
    }

    #[inline(always)]
    fn set_gpr(&mut self, index: u8, value: u32) {
        self.set_reg(index, value);
    }

    #[inline(always)]
    fn pc(&self) -> u32 {
        self.current_pc
    }

    fn jump(&mut self, address: u32) {
        self.next_pc = address;
        self.branch_taken = true;
    }

    fn branch(&mut self, condition: bool, offset: i32) {
        if condition {
            // Relative to this branch's delay slot; self.pc may already hold
            // an earlier jump's target when the branch sits in its delay slot
            let delay_slot = self.current_pc.wrapping_add(4);
            self.next_pc = delay_slot.wrapping_add(offset as u32);
            self.branch_taken = true;
        }
    }

    fn hi(&self) -> u32 {
        self.hi
    }

    fn set_hi(&mut self, value: u32) {
        self.hi = value;
    }

    fn lo(&self) -> u32 {
        self.lo
    }

    fn set_lo(&mut self, value: u32) {
        self.lo = value;
    }

    fn read8(&mut self, address: u32) -> u8 {
        self.ram.read8(address)
    }

    fn read16(&mut self, address: u32) -> u16 {
        self.ram.read16(address)
    }

    fn read32(&mut self, address: u32) -> u32 {
        self.ram.read32(address)
    }

    fn write8(&mut self, address: u32, value: u8) {
        if !self.store_isolated(address) {
            self.ram.write8(address, value);
        }
    }

    fn write16(&mut self, address: u32, value: u16) {
        if !self.store_isolated(address) {
            self.ram.write16(address, value);
        }
    }

    fn write32(&mut self, address: u32, value: u32) {
        if !self.store_isolated(address) {
            self.ram.write32(address, value);
        }
    }

    fn mfc(&mut self, cop_id: u8, cop_reg: u8, gpr: u8) {
        let value = match cop_id {
            0 => self.cop0.read(cop_reg),
            _ => {
                log::warn!(
                    "MFC{} from unimplemented coprocessor (r{}) at PC=0x{:08X}",
                    cop_id,
                    cop_reg,
                    self.current_pc
                );
                0
            }
        };
        self.set_reg(gpr, value);
    }

    fn mtc(&mut self, cop_id: u8, cop_reg: u8, gpr: u8) {
        let value = self.reg(gpr);
        match cop_id {
            0 => {
                log::debug!("MTC0 r{} = 0x{:08X}", cop_reg, value);
                self.cop0.write(cop_reg, value);
            }
            _ => log::warn!(
                "MTC{} to unimplemented coprocessor (r{} = 0x{:08X}) at PC=0x{:08X}",
                cop_id,
                cop_reg,
                value,
                self.current_pc
            ),
        }
    }

    fn rfe(&mut self) {
        self.cop0.pop_mode();
        log::debug!("RFE: SR = 0x{:08X}", self.cop0.regs[Cop0::SR]);
    }

    fn syscall_exception(&mut self) {
        log::debug!(
            "SYSCALL at PC=0x{:08X} (a0=0x{:08X})",
            self.current_pc,
            self.reg(4)
        );
        self.exception(ExceptionCause::Syscall);
    }
}

/// Architectural register state of an [`Iop`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterSnapshot {
    pub pc: u32,
    pub next_pc: u32,
    pub hi: u32,
    pub lo: u32,
    pub gpr: [u32; 32],
    pub sr: u32,
    pub cause: u32,
    pub epc: u32,
    pub instructions: u64,
}

impl std::fmt::Display for RegisterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "IOP Registers:")?;
        writeln!(f, "PC: 0x{:08X}  Next PC: 0x{:08X}", self.pc, self.next_pc)?;
        writeln!(f, "HI: 0x{:08X}  LO: 0x{:08X}", self.hi, self.lo)?;
        writeln!(f)?;

        // General-purpose registers in rows of 4
        for (i, value) in self.gpr.iter().enumerate() {
            write!(f, "r{:2}: 0x{:08X}  ", i, value)?;
            if i % 4 == 3 {
                writeln!(f)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "COP0 Registers:")?;
        writeln!(f, "SR:    0x{:08X}", self.sr)?;
        writeln!(f, "CAUSE: 0x{:08X}", self.cause)?;
        writeln!(f, "EPC:   0x{:08X}", self.epc)?;
        writeln!(f, "Instructions: {}", self.instructions)
    }
}
