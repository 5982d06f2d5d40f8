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

use super::super::context::ExecutionContext;
use super::super::decode::{rd, rs, target};
use super::super::Result;

// === Jump Instructions ===

/// Absolute target of J/JAL: 26-bit word index inside the 256MB segment of
/// the delay slot
#[inline(always)]
fn jump_target(pc: u32, instr: u32) -> u32 {
    (target(instr) << 2) | (pc.wrapping_add(4) & 0xF000_0000)
}

/// J: Jump
///
/// Format: j target
/// Operation: jump(((PC + 4) & 0xF0000000) | (target << 2))
pub(super) fn op_j<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let address = jump_target(ctx.pc(), instr);
    ctx.jump(address);
    Ok(())
}

/// JAL: Jump and Link
///
/// The return address skips the delay slot.
///
/// Format: jal target
/// Operation: r31 = PC + 8; jump(((PC + 4) & 0xF0000000) | (target << 2))
pub(super) fn op_jal<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let pc = ctx.pc();
    ctx.jump(jump_target(pc, instr));
    ctx.set_gpr(31, pc.wrapping_add(8));
    Ok(())
}

/// JR: Jump Register
///
/// Format: jr rs
/// Operation: jump(rs)
pub(super) fn op_jr<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let address = ctx.gpr(rs(instr));
    ctx.jump(address);
    Ok(())
}

/// JALR: Jump And Link Register
///
/// rs is read before rd is written, so `jalr r31, r31` jumps to the old
/// value.
///
/// Format: jalr rd, rs
/// Operation: rd = PC + 8; jump(rs)
pub(super) fn op_jalr<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let return_address = ctx.pc().wrapping_add(8);
    let address = ctx.gpr(rs(instr));
    ctx.jump(address);
    ctx.set_gpr(rd(instr), return_address);
    Ok(())
}
