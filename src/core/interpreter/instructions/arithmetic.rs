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

//! Integer add/subtract and set-on-less-than instructions
//!
//! ADD and ADDI never raise an overflow exception on the IOP core; they
//! wrap exactly like their unsigned counterparts.

use super::super::context::ExecutionContext;
use super::super::decode::{imm, imm_se, rd, rs, rt};
use super::super::Result;

// === Register-register ===

/// ADD: Add
///
/// Format: add rd, rs, rt
/// Operation: rd = rs + rt (mod 2^32, no overflow trap)
pub(super) fn op_add<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    op_addu(ctx, instr)
}

/// ADDU: Add Unsigned
///
/// Format: addu rd, rs, rt
/// Operation: rd = rs + rt (mod 2^32)
pub(super) fn op_addu<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let result = ctx.gpr(rs(instr)).wrapping_add(ctx.gpr(rt(instr)));
    ctx.set_gpr(rd(instr), result);
    Ok(())
}

/// SUBU: Subtract Unsigned
///
/// Format: subu rd, rs, rt
/// Operation: rd = rs - rt (mod 2^32)
pub(super) fn op_subu<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let result = ctx.gpr(rs(instr)).wrapping_sub(ctx.gpr(rt(instr)));
    ctx.set_gpr(rd(instr), result);
    Ok(())
}

/// SLT: Set on Less Than (signed)
///
/// Format: slt rd, rs, rt
/// Operation: rd = (rs < rt) ? 1 : 0
pub(super) fn op_slt<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let a = ctx.gpr(rs(instr)) as i32;
    let b = ctx.gpr(rt(instr)) as i32;
    ctx.set_gpr(rd(instr), (a < b) as u32);
    Ok(())
}

/// SLTU: Set on Less Than Unsigned
///
/// Format: sltu rd, rs, rt
/// Operation: rd = (rs < rt) ? 1 : 0
pub(super) fn op_sltu<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let a = ctx.gpr(rs(instr));
    let b = ctx.gpr(rt(instr));
    ctx.set_gpr(rd(instr), (a < b) as u32);
    Ok(())
}

// === Register-immediate ===

/// ADDI: Add Immediate
///
/// Format: addi rt, rs, imm
/// Operation: rt = rs + sign_extend(imm) (mod 2^32, no overflow trap)
pub(super) fn op_addi<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    op_addiu(ctx, instr)
}

/// ADDIU: Add Immediate Unsigned
///
/// Despite the name, the immediate is sign-extended.
///
/// Format: addiu rt, rs, imm
/// Operation: rt = rs + sign_extend(imm)
pub(super) fn op_addiu<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let result = ctx.gpr(rs(instr)).wrapping_add(imm_se(instr));
    ctx.set_gpr(rt(instr), result);
    Ok(())
}

/// SLTI: Set on Less Than Immediate (signed)
///
/// Format: slti rt, rs, imm
/// Operation: rt = (rs < sign_extend(imm)) ? 1 : 0
pub(super) fn op_slti<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let a = ctx.gpr(rs(instr)) as i32;
    let b = imm_se(instr) as i32;
    ctx.set_gpr(rt(instr), (a < b) as u32);
    Ok(())
}

/// SLTIU: Set on Less Than Immediate Unsigned
///
/// The IOP compares against the zero-extended immediate, so the
/// comparison value is always in 0..=0xFFFF.
///
/// Format: sltiu rt, rs, imm
/// Operation: rt = (rs < zero_extend(imm)) ? 1 : 0
pub(super) fn op_sltiu<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let a = ctx.gpr(rs(instr));
    ctx.set_gpr(rt(instr), (a < imm(instr)) as u32);
    Ok(())
}
