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

use bitflags::bitflags;

/// Coprocessor 0 (System Control)
///
/// On the IOP, COP0 holds the exception state: status register with the
/// KU/IE mode stack, exception cause and exception PC.
pub(super) struct Cop0 {
    /// COP0 registers (32 registers)
    pub(super) regs: [u32; 32],
}

bitflags! {
    /// Status Register (COP0 r12) bits used by the IOP
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u32 {
        /// Interrupt enable, current
        const IEC = 1 << 0;
        /// Kernel/user mode, current
        const KUC = 1 << 1;
        /// Interrupt enable, previous
        const IEP = 1 << 2;
        /// Kernel/user mode, previous
        const KUP = 1 << 3;
        /// Interrupt enable, old
        const IEO = 1 << 4;
        /// Kernel/user mode, old
        const KUO = 1 << 5;
        /// Isolate cache
        const ISC = 1 << 16;
        /// Boot exception vectors in ROM
        const BEV = 1 << 22;
        /// COP0 usable in user mode
        const CU0 = 1 << 28;
    }
}

impl Cop0 {
    /// Status Register
    pub const SR: usize = 12;
    /// Cause Register
    pub const CAUSE: usize = 13;
    /// Exception PC
    pub const EPC: usize = 14;
    /// Processor ID
    pub const PRID: usize = 15;

    /// KU/IE three-level mode stack, SR bits [5:0]
    pub const MODE_STACK: u32 = 0x3F;

    /// CAUSE bits writable by software (IP1:IP0)
    const CAUSE_WRITE_MASK: u32 = 0x0300;

    /// Status register at reset: boot vectors, COP0 usable
    const SR_RESET: u32 = StatusFlags::BEV.bits() | StatusFlags::CU0.bits();

    /// R3000A processor identifier
    const PRID_RESET: u32 = 0x0000_0002;

    pub(super) fn new() -> Self {
        let mut cop0 = Self { regs: [0u32; 32] };
        cop0.reset();
        cop0
    }

    /// Reset COP0 registers to initial state
    pub(super) fn reset(&mut self) {
        self.regs = [0u32; 32];
        self.regs[Self::SR] = Self::SR_RESET;
        self.regs[Self::PRID] = Self::PRID_RESET;
    }

    pub(super) fn status(&self) -> StatusFlags {
        StatusFlags::from_bits_retain(self.regs[Self::SR])
    }

    pub(super) fn read(&self, index: u8) -> u32 {
        self.regs[(index & 0x1F) as usize]
    }

    /// MTC0 write
    ///
    /// PRID is read-only and only the software interrupt bits of CAUSE
    /// can be written.
    pub(super) fn write(&mut self, index: u8, value: u32) {
        let index = (index & 0x1F) as usize;
        match index {
            Self::PRID => {
                log::debug!("Ignoring write 0x{:08X} to COP0 PRID", value);
            }
            Self::CAUSE => {
                let cause = self.regs[Self::CAUSE];
                self.regs[Self::CAUSE] =
                    (cause & !Self::CAUSE_WRITE_MASK) | (value & Self::CAUSE_WRITE_MASK);
            }
            _ => self.regs[index] = value,
        }
    }

    /// Pop the KU/IE mode stack (RFE)
    ///
    /// previous -> current, old -> previous. The old pair keeps its value.
    pub(super) fn pop_mode(&mut self) {
        let sr = self.regs[Self::SR];
        self.regs[Self::SR] = (sr & !0x0F) | ((sr >> 2) & 0x0F);
    }

    /// Push the KU/IE mode stack on exception entry
    ///
    /// current -> previous, previous -> old; the new current mode is kernel
    /// with interrupts disabled.
    pub(super) fn push_mode(&mut self) {
        let sr = self.regs[Self::SR];
        let mode = sr & Self::MODE_STACK;
        self.regs[Self::SR] = (sr & !Self::MODE_STACK) | ((mode << 2) & Self::MODE_STACK);
    }
}

/// Exception cause codes (CAUSE.ExcCode) raised by the IOP
///
/// SYSCALL is the only exception an instruction can raise here; every
/// other fault is returned to the caller as an interpreter error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ExceptionCause {
    /// Syscall instruction executed
    Syscall = 8,
}
