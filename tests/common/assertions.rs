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

//! Custom assertions for IOP testing

use psrx_iop::core::iop::Iop;

/// Assert IOP register has expected value
#[allow(dead_code)]
pub fn assert_iop_reg(iop: &Iop, reg: u8, expected: u32) {
    let actual = iop.reg(reg);
    assert_eq!(
        actual, expected,
        "Register ${} mismatch: expected 0x{:08X}, got 0x{:08X}",
        reg, expected, actual
    );
}

/// Assert IOP PC is at expected address
#[allow(dead_code)]
pub fn assert_iop_pc(iop: &Iop, expected: u32) {
    let actual = iop.pc();
    assert_eq!(
        actual, expected,
        "PC mismatch: expected 0x{:08X}, got 0x{:08X}",
        expected, actual
    );
}

/// Assert RAM contains expected value at address
#[allow(dead_code)]
pub fn assert_memory_word(iop: &Iop, addr: u32, expected: u32) {
    let actual = iop.ram().read32(addr);
    assert_eq!(
        actual, expected,
        "Memory at 0x{:08X} mismatch: expected 0x{:08X}, got 0x{:08X}",
        addr, expected, actual
    );
}
