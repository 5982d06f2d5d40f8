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

//! Shift instructions
//!
//! Fixed shifts take the amount from the shamt field; variable shifts take
//! it from the low 5 bits of rs.

use super::super::context::ExecutionContext;
use super::super::decode::{rd, rs, rt, shamt};
use super::super::Result;

/// Shift amount for the variable forms (SLLV/SRLV/SRAV)
#[inline(always)]
fn variable_shift<C: ExecutionContext>(ctx: &C, instr: u32) -> u32 {
    ctx.gpr(rs(instr)) & 0x1F
}

/// SLL: Shift Left Logical
///
/// Format: sll rd, rt, shamt
/// Operation: rd = rt << shamt
pub(super) fn op_sll<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = ctx.gpr(rt(instr)) << shamt(instr);
    ctx.set_gpr(rd(instr), value);
    Ok(())
}

/// SRL: Shift Right Logical (zero-fill)
///
/// Format: srl rd, rt, shamt
/// Operation: rd = rt >> shamt
pub(super) fn op_srl<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = ctx.gpr(rt(instr)) >> shamt(instr);
    ctx.set_gpr(rd(instr), value);
    Ok(())
}

/// SRA: Shift Right Arithmetic (sign-fill)
///
/// Format: sra rd, rt, shamt
/// Operation: rd = (rt as i32) >> shamt
pub(super) fn op_sra<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = (ctx.gpr(rt(instr)) as i32) >> shamt(instr);
    ctx.set_gpr(rd(instr), value as u32);
    Ok(())
}

/// SLLV: Shift Left Logical Variable
///
/// Format: sllv rd, rt, rs
/// Operation: rd = rt << (rs & 0x1F)
pub(super) fn op_sllv<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = ctx.gpr(rt(instr)) << variable_shift(ctx, instr);
    ctx.set_gpr(rd(instr), value);
    Ok(())
}

/// SRLV: Shift Right Logical Variable
///
/// Format: srlv rd, rt, rs
/// Operation: rd = rt >> (rs & 0x1F)
pub(super) fn op_srlv<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = ctx.gpr(rt(instr)) >> variable_shift(ctx, instr);
    ctx.set_gpr(rd(instr), value);
    Ok(())
}

/// SRAV: Shift Right Arithmetic Variable
///
/// Format: srav rd, rt, rs
/// Operation: rd = (rt as i32) >> (rs & 0x1F)
pub(super) fn op_srav<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let value = (ctx.gpr(rt(instr)) as i32) >> variable_shift(ctx, instr);
    ctx.set_gpr(rd(instr), value as u32);
    Ok(())
}
