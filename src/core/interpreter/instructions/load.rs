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

//! Load instructions
//!
//! The IOP interpreter writes load results straight into the destination
//! register; load-delay behaviour, if modelled, belongs to the context.

use super::super::context::ExecutionContext;
use super::super::decode::{effective_address, rs, rt};
use super::super::Result;

/// LWL register mask, indexed by `address & 3`
const LWL_MASK: [u32; 4] = [0xFF00_0000, 0xFFFF_0000, 0xFFFF_FF00, 0xFFFF_FFFF];
/// LWL left shift applied to the aligned memory word
const LWL_SHIFT: [u32; 4] = [24, 16, 8, 0];

/// LWR register mask, indexed by `address & 3`
const LWR_MASK: [u32; 4] = [0xFFFF_FFFF, 0x00FF_FFFF, 0x0000_FFFF, 0x0000_00FF];
/// LWR right shift applied to the aligned memory word
const LWR_SHIFT: [u32; 4] = [0, 8, 16, 24];

#[inline(always)]
fn address<C: ExecutionContext>(ctx: &C, instr: u32) -> u32 {
    effective_address(ctx.gpr(rs(instr)), instr)
}

/// LB: Load Byte (sign-extended)
///
/// Format: lb rt, offset(rs)
/// Operation: rt = sign_extend(mem8[rs + sign_extend(offset)])
pub(super) fn op_lb<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let value = ctx.read8(addr) as i8 as i32 as u32;
    ctx.set_gpr(rt(instr), value);
    Ok(())
}

/// LBU: Load Byte Unsigned (zero-extended)
///
/// Format: lbu rt, offset(rs)
pub(super) fn op_lbu<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let value = ctx.read8(addr) as u32;
    ctx.set_gpr(rt(instr), value);
    Ok(())
}

/// LH: Load Halfword (sign-extended)
///
/// Format: lh rt, offset(rs)
/// Operation: rt = sign_extend(mem16[rs + sign_extend(offset)])
pub(super) fn op_lh<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let value = ctx.read16(addr) as i16 as i32 as u32;
    ctx.set_gpr(rt(instr), value);
    Ok(())
}

/// LHU: Load Halfword Unsigned (zero-extended)
///
/// Format: lhu rt, offset(rs)
pub(super) fn op_lhu<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let value = ctx.read16(addr) as u32;
    ctx.set_gpr(rt(instr), value);
    Ok(())
}

/// LW: Load Word
///
/// Format: lw rt, offset(rs)
pub(super) fn op_lw<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let value = ctx.read32(addr);
    ctx.set_gpr(rt(instr), value);
    Ok(())
}

/// LWL: Load Word Left
///
/// Loads the bytes from the start of the aligned word up to `addr` into
/// the most significant bytes of rt. The remaining low bytes of rt are
/// preserved.
///
/// Format: lwl rt, offset(rs)
///
/// # Example
///
/// ```text
/// memory word at 0x1000 = 0x44332211, rt = 0xAABBCCDD
/// lwl rt, 0x1001  ->  rt = 0x2211CCDD
/// ```
pub(super) fn op_lwl<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let shift = (addr & 0x3) as usize;

    let word = ctx.read32(addr & !0x3) << LWL_SHIFT[shift];
    let dest = rt(instr);
    let value = (ctx.gpr(dest) & !LWL_MASK[shift]) | (word & LWL_MASK[shift]);
    ctx.set_gpr(dest, value);
    Ok(())
}

/// LWR: Load Word Right
///
/// Loads the bytes from `addr` to the end of the aligned word into the
/// least significant bytes of rt. The remaining high bytes of rt are
/// preserved.
///
/// Format: lwr rt, offset(rs)
///
/// # Example
///
/// ```text
/// memory word at 0x1000 = 0x44332211, rt = 0xAABBCCDD
/// lwr rt, 0x1001  ->  rt = 0xAA443322
/// ```
pub(super) fn op_lwr<C: ExecutionContext>(ctx: &mut C, instr: u32) -> Result<()> {
    let addr = address(ctx, instr);
    let shift = (addr & 0x3) as usize;

    let word = ctx.read32(addr & !0x3) >> LWR_SHIFT[shift];
    let dest = rt(instr);
    let value = (ctx.gpr(dest) & !LWR_MASK[shift]) | (word & LWR_MASK[shift]);
    ctx.set_gpr(dest, value);
    Ok(())
}
