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
use super::super::decode::{branch_offset, rs, rt};
use super::super::Result;

// === Branch Instructions ===
//
// Every branch reports its condition and word-scaled offset to the context,
// taken or not. The target is relative to the delay slot address
// (branch address + 4); computing it and honouring the delay slot is the
// context's job.

/// BEQ: Branch on Equal
///
/// Format: beq rs, rt, offset
/// Operation: if (rs == rt) branch(sign_extend(offset) << 2)
pub(super) fn op_beq<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let condition = ctx.gpr(rs(instr)) == ctx.gpr(rt(instr));
    ctx.branch(condition, branch_offset(instr));
    Ok(())
}

/// BNE: Branch on Not Equal
///
/// Format: bne rs, rt, offset
pub(super) fn op_bne<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let condition = ctx.gpr(rs(instr)) != ctx.gpr(rt(instr));
    ctx.branch(condition, branch_offset(instr));
    Ok(())
}

/// BLEZ: Branch on Less Than or Equal to Zero (signed)
///
/// Format: blez rs, offset
pub(super) fn op_blez<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let condition = (ctx.gpr(rs(instr)) as i32) <= 0;
    ctx.branch(condition, branch_offset(instr));
    Ok(())
}

/// BGTZ: Branch on Greater Than Zero (signed)
///
/// Format: bgtz rs, offset
pub(super) fn op_bgtz<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let condition = (ctx.gpr(rs(instr)) as i32) > 0;
    ctx.branch(condition, branch_offset(instr));
    Ok(())
}

/// BLTZ: Branch on Less Than Zero (signed, REGIMM rt = 0x00)
///
/// Format: bltz rs, offset
pub(super) fn op_bltz<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let condition = (ctx.gpr(rs(instr)) as i32) < 0;
    ctx.branch(condition, branch_offset(instr));
    Ok(())
}

/// BGEZ: Branch on Greater Than or Equal to Zero (signed, REGIMM rt = 0x01)
///
/// Format: bgez rs, offset
pub(super) fn op_bgez<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let condition = (ctx.gpr(rs(instr)) as i32) >= 0;
    ctx.branch(condition, branch_offset(instr));
    Ok(())
}
