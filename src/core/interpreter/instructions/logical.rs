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

//! Bitwise logical instructions

use super::super::context::ExecutionContext;
use super::super::decode::{imm, rd, rs, rt};
use super::super::Result;

/// LUI: Load Upper Immediate
///
/// Format: lui rt, imm
/// Operation: rt = imm << 16
pub(super) fn op_lui<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    ctx.set_gpr(rt(instr), imm(instr) << 16);
    Ok(())
}

/// AND: Bitwise AND
///
/// Format: and rd, rs, rt
pub(super) fn op_and<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let result = ctx.gpr(rs(instr)) & ctx.gpr(rt(instr));
    ctx.set_gpr(rd(instr), result);
    Ok(())
}

/// ANDI: AND Immediate
///
/// Unlike ADDI, the immediate is ZERO-extended.
///
/// Format: andi rt, rs, imm
/// Operation: rt = rs & zero_extend(imm)
pub(super) fn op_andi<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let result = ctx.gpr(rs(instr)) & imm(instr);
    ctx.set_gpr(rt(instr), result);
    Ok(())
}

/// OR: Bitwise OR
///
/// Format: or rd, rs, rt
pub(super) fn op_or<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let result = ctx.gpr(rs(instr)) | ctx.gpr(rt(instr));
    ctx.set_gpr(rd(instr), result);
    Ok(())
}

/// ORI: OR Immediate (zero-extended)
///
/// Format: ori rt, rs, imm
/// Operation: rt = rs | zero_extend(imm)
pub(super) fn op_ori<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let result = ctx.gpr(rs(instr)) | imm(instr);
    ctx.set_gpr(rt(instr), result);
    Ok(())
}

/// XOR: Bitwise exclusive OR
///
/// Format: xor rd, rs, rt
pub(super) fn op_xor<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let result = ctx.gpr(rs(instr)) ^ ctx.gpr(rt(instr));
    ctx.set_gpr(rd(instr), result);
    Ok(())
}

/// NOR: Bitwise NOR
///
/// Format: nor rd, rs, rt
/// Operation: rd = ~(rs | rt)
pub(super) fn op_nor<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let result = !(ctx.gpr(rs(instr)) | ctx.gpr(rt(instr)));
    ctx.set_gpr(rd(instr), result);
    Ok(())
}
