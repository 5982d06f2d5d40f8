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

//! Interpreter test modules
//!
//! Every test runs the interpreter against [`MockContext`], which records
//! control transfers and coprocessor traffic instead of acting on them.
//! - `arithmetic`: add/sub, set-less-than, logical and shift instructions
//! - `multiply`: MULTU, DIV/DIVU and HI/LO transfers
//! - `memory`: loads, stores and the unaligned LWL/LWR/SWL/SWR forms
//! - `control_flow`: jumps, links and branch offsets
//! - `coprocessor`: MFC/MTC/RFE routing and SYSCALL
//! - `dispatch`: zero word, unknown opcodes at every level, fatal errors
//! - `decode`: field extraction
//! - `properties`: randomized invariants



#[cfg(test)]
mod multiply;







pub(super) use mock::{Event, MockContext};

/// Encode an R-type (SPECIAL) instruction
pub(super) fn r_type(funct: u32, rs: u32, rt: u32, rd: u32, shamt: u32) -> u32 {
    (rs << 21) | (rt << 16) | (rd << 11) | (shamt << 6) | funct
}

/// Encode an I-type instruction
pub(super) fn i_type(op: u32, rs: u32, rt: u32, imm: u16) -> u32 {
    (op << 26) | (rs << 21) | (rt << 16) | imm as u32
}

/// Encode a J-type instruction
pub(super) fn j_type(op: u32, target: u32) -> u32 {
    (op << 26) | (target & 0x03FF_FFFF)
}

/// Encode a coprocessor instruction with the given rs sub-op
pub(super) fn cop_type(cop: u32, sub: u32, rt: u32, rd: u32) -> u32 {
    ((0x10 | cop) << 26) | (sub << 21) | (rt << 16) | (rd << 11)
}
