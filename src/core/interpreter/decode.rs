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

//! Instruction field extraction
//!
//! MIPS instruction formats:
//!
//! ```text
//! R-type: | op (6) | rs (5) | rt (5) | rd (5) | shamt (5) | funct (6) |
//! I-type: | op (6) | rs (5) | rt (5) |        immediate (16)          |
//! J-type: | op (6) |                  target (26)                     |
//! ```
//!
//! Handlers pull only the fields they use straight from the raw word;
//! no decoded form is kept between calls.

/// Primary opcode (bits 31-26)
#[inline(always)]
pub(super) fn opcode(instr: u32) -> u8 {
    (instr >> 26) as u8
}

/// Source register (bits 25-21)
#[inline(always)]
pub(super) fn rs(instr: u32) -> u8 {
    ((instr >> 21) & 0x1F) as u8
}

/// Target register (bits 20-16)
#[inline(always)]
pub(super) fn rt(instr: u32) -> u8 {
    ((instr >> 16) & 0x1F) as u8
}

/// Destination register (bits 15-11)
#[inline(always)]
pub(super) fn rd(instr: u32) -> u8 {
    ((instr >> 11) & 0x1F) as u8
}

/// Shift amount (bits 10-6)
#[inline(always)]
pub(super) fn shamt(instr: u32) -> u32 {
    (instr >> 6) & 0x1F
}

/// Function code (bits 5-0)
#[inline(always)]
pub(super) fn funct(instr: u32) -> u8 {
    (instr & 0x3F) as u8
}

/// Zero-extended 16-bit immediate
#[inline(always)]
pub(super) fn imm(instr: u32) -> u32 {
    instr & 0xFFFF
}

/// Sign-extended 16-bit immediate
#[inline(always)]
pub(super) fn imm_se(instr: u32) -> u32 {
    (instr & 0xFFFF) as i16 as i32 as u32
}

/// 26-bit jump target (word index)
#[inline(always)]
pub(super) fn target(instr: u32) -> u32 {
    instr & 0x03FF_FFFF
}

/// Coprocessor id (low 2 bits of the primary opcode)
#[inline(always)]
pub(super) fn cop_id(instr: u32) -> u8 {
    ((instr >> 26) & 0x3) as u8
}

/// Effective address for loads and stores: `gpr[base] + sign_extend(offset)`
#[inline(always)]
pub(super) fn effective_address(base_value: u32, instr: u32) -> u32 {
    base_value.wrapping_add(imm_se(instr))
}

/// Word-scaled branch offset: `sign_extend(imm) << 2`
#[inline(always)]
pub(super) fn branch_offset(instr: u32) -> i32 {
    ((instr & 0xFFFF) as i16 as i32) << 2
}
